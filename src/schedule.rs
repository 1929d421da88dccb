//! Fixed-Rate Automation
//!
//! Periodic re-execution of a scrape: either the configured selector chain
//! (results appended to a log file, one timestamped block per run) or a
//! full-page capture (one `<timestamp>.html` file per run). A single
//! background thread runs one task at fixed intervals (first run
//! immediately, deadlines at `start + n * period`), so invocations never
//! overlap; an overrunning task delays later runs, it never drops them.
//! There is no cancellation: the thread lives for the process lifetime.
//!
//! Every tick builds a fresh [`Scraper`] from the cloned configuration, so
//! each run starts from the unfiltered whole-document pool with no state
//! carried over. Fetch and I/O failures are logged and the loop keeps
//! ticking.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Local;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::ScrapeConfig;
use crate::scraper::Scraper;

/// A schedule period expressed in calendar-ish parts.
///
/// # Example
///
/// ```rust
/// use pagesieve::Interval;
///
/// let every_second = Interval::new(0, 0, 0, 1, 0);
/// assert_eq!(every_second.total_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl Interval {
    /// Combine the parts into one period.
    #[must_use]
    pub fn new(days: u64, hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    /// The period in milliseconds.
    #[must_use]
    pub fn total_millis(&self) -> u64 {
        self.days * 86_400_000
            + self.hours * 3_600_000
            + self.minutes * 60_000
            + self.seconds * 1_000
            + self.millis
    }

    /// The period as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_millis())
    }
}

/// Run a task now and then at every period boundary, on one background
/// thread.
pub fn run_at_fixed_rate<F>(period: Duration, mut task: F) -> JoinHandle<()>
where
    F: FnMut() + Send + 'static,
{
    thread::spawn(move || {
        let mut deadline = Instant::now();
        loop {
            task();
            deadline += period;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
        }
    })
}

/// Periodically evaluate the config's selector chain and append each run's
/// results to a log file.
///
/// The file and its parent directory are created if absent. Each run
/// appends one block: a timestamp line followed by one line per result, no
/// separator. A failed fetch degrades to an empty block.
pub fn automate_selectors(
    config: ScrapeConfig,
    log_path: impl Into<PathBuf>,
    every: Interval,
) -> Result<JoinHandle<()>> {
    if every.total_millis() == 0 {
        return Err(Error::InvalidInterval);
    }
    let log_path = log_path.into();
    prepare_log_file(&log_path)?;
    Ok(run_at_fixed_rate(every.as_duration(), move || {
        capture_selectors(&config, &log_path);
    }))
}

/// Periodically capture the full page into `<timestamp>.html` files inside
/// `target_dir` (created if absent), one new file per run.
pub fn snapshot_html(
    config: ScrapeConfig,
    target_dir: impl Into<PathBuf>,
    every: Interval,
) -> Result<JoinHandle<()>> {
    if every.total_millis() == 0 {
        return Err(Error::InvalidInterval);
    }
    let target_dir = target_dir.into();
    fs::create_dir_all(&target_dir)?;
    Ok(run_at_fixed_rate(every.as_duration(), move || {
        capture_snapshot(&config, &target_dir);
    }))
}

/// One selector-capture tick: fetch, evaluate, append.
fn capture_selectors(config: &ScrapeConfig, log_path: &Path) {
    let mut scraper = Scraper::new(config.clone());
    let results = match scraper.fetch().and_then(|()| scraper.selector_results()) {
        Ok(results) => results,
        Err(e) => {
            warn!("selector capture of {} failed: {e}", config.full_url());
            Vec::new()
        }
    };
    if let Err(e) = append_log_block(log_path, &timestamp(), &results) {
        warn!("unable to write log {}: {e}", log_path.display());
    }
}

/// One snapshot tick: fetch, write the serialized page.
fn capture_snapshot(config: &ScrapeConfig, target_dir: &Path) {
    let mut scraper = Scraper::new(config.clone());
    let html = match scraper.fetch().and_then(|()| scraper.html()) {
        Ok(html) => html,
        Err(e) => {
            warn!("snapshot of {} failed: {e}", config.full_url());
            return;
        }
    };
    if let Err(e) = write_snapshot(target_dir, &html) {
        warn!(
            "unable to write snapshot in {}: {e}",
            target_dir.display()
        );
    }
}

/// Write one snapshot file, named from the current timestamp, and return
/// its path.
pub fn write_snapshot(target_dir: &Path, html: &str) -> std::io::Result<PathBuf> {
    let path = target_dir.join(snapshot_file_name(&timestamp()));
    fs::write(&path, html)?;
    Ok(path)
}

/// Append one run's block to the log file: timestamp line, then one line
/// per result.
pub fn append_log_block(path: &Path, timestamp: &str, results: &[String]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{timestamp}")?;
    for result in results {
        writeln!(file, "{result}")?;
    }
    Ok(())
}

/// Snapshot file name for a timestamp: spaces become underscores, `.html`
/// suffix.
#[must_use]
pub fn snapshot_file_name(timestamp: &str) -> String {
    format!("{}.html", timestamp.replace(' ', "_"))
}

/// Local wall-clock timestamp, `YYYY-MM-DD HH:MM:SS.mmm`.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn prepare_log_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}
