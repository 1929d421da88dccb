use pagesieve::{dom, evaluator, Error, Selector};

#[test]
fn indexing_after_a_narrowing_step_is_per_branch() {
    // Two containers with three paragraphs each: the chain must yield the
    // 2nd paragraph of EACH container, not the 2nd paragraph globally.
    let doc = dom::parse(
        "<div><p>a1</p><p>a2</p><p>a3</p></div>\
         <div><p>b1</p><p>b2</p><p>b3</p></div>",
    );
    let chain = vec![Selector::new("div"), Selector::new("p").nth(1)];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["a2", "b2"]);
}

#[test]
fn single_indexed_step_picks_from_the_flat_pool() {
    let doc = dom::parse("<p>one</p><p>two</p><p>three</p><p>four</p><p>five</p>");
    let chain = vec![Selector::new("p").nth(0)];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["one"]);
}

#[test]
fn branches_without_the_requested_index_are_skipped() {
    // Only the middle container has a 6th span; the other branches drop
    // out silently instead of failing the evaluation.
    let doc = dom::parse(
        "<div><span>a</span></div>\
         <div><span>1</span><span>2</span><span>3</span>\
              <span>4</span><span>5</span><span>6</span></div>\
         <div><span>b</span><span>c</span></div>",
    );
    let chain = vec![Selector::new("div"), Selector::new("span").nth(5)];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["6"]);
}

#[test]
fn indexed_attribute_presence_step_also_skips_short_branches() {
    let doc = dom::parse(
        r#"<div><a href="/one">1</a><a href="/two">2</a></div>
           <div><a href="/only">only</a></div>"#,
    );
    let chain = vec![
        Selector::new("div"),
        Selector::new("a").with_attribute("href").nth(1),
    ];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["2"]);
}

#[test]
fn indexed_value_filter_step_fails_hard_on_a_missing_match() {
    // With an attribute value filter the indexed lookup is expected to
    // hit; a branch without the match aborts the whole evaluation.
    let doc = dom::parse(
        r#"<div><span class="x">first</span></div>
           <div><span class="y">other</span></div>"#,
    );
    let chain = vec![
        Selector::new("div"),
        Selector::new("span")
            .with_attribute_value("class", "x")
            .nth(0),
    ];

    let err = evaluator::evaluate(&doc, &chain).expect_err("expected Err(_)");
    assert!(matches!(err, Error::IndexOutOfRange { index: 0, .. }));
}

#[test]
fn indexed_value_filter_step_succeeds_when_every_branch_matches() {
    let doc = dom::parse(
        r#"<div><span class="x">first</span><span class="x">second</span></div>
           <div><span class="x">third</span><span class="x">fourth</span></div>"#,
    );
    let chain = vec![
        Selector::new("div"),
        Selector::new("span")
            .with_attribute_value("class", "x")
            .nth(1),
    ];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["second", "fourth"]);
}

#[test]
fn unindexed_attribute_value_step_flattens_matches() {
    let doc = dom::parse(
        r#"<div class="wrap"><p>in</p></div>
           <div class="other"><p>out</p></div>
           <div class="wrap"><p>also in</p></div>"#,
    );
    let chain = vec![
        Selector::new("div").with_attribute_value("class", "wrap"),
        Selector::new("p"),
    ];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["in", "also in"]);
}

#[test]
fn suffix_match_selects_by_attribute_ending() {
    let doc = dom::parse(
        r#"<img src="photo.png"><img src="photo.jpg"><img src="icon.png">"#,
    );
    let chain = vec![Selector::new("img").with_attribute_ending("src", ".png")];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    // img is void: two matches, both with empty inner content.
    assert_eq!(results.len(), 2);
}

#[test]
fn flat_indexed_pick_out_of_range_is_a_hard_failure() {
    let doc = dom::parse("<p>lonely</p>");
    let chain = vec![Selector::new("p").nth(3)];

    let err = evaluator::evaluate(&doc, &chain).expect_err("expected Err(_)");
    assert!(matches!(err, Error::IndexOutOfRange { index: 3, .. }));
}

#[test]
fn evaluation_is_idempotent_and_does_not_mutate_the_document() {
    let doc = dom::parse(
        "<div><p>a1</p><p>a2</p></div>\
         <div><p>b1</p><p>b2</p></div>",
    );
    let chain = vec![Selector::new("div"), Selector::new("p").nth(1)];

    let first = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    let second = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(first, second);

    // A different chain against the same document still sees everything.
    let all_paragraphs = evaluator::evaluate(&doc, &[Selector::new("p")]).expect("expected Ok(_)");
    assert_eq!(all_paragraphs.len(), 4);
}

#[test]
fn three_step_chain_narrows_level_by_level() {
    let doc = dom::parse(
        r#"<section id="s1">
             <div><p>one</p><p>two</p></div>
           </section>
           <section id="s2">
             <div><p>three</p><p>four</p></div>
           </section>"#,
    );
    let chain = vec![
        Selector::new("section"),
        Selector::new("div"),
        Selector::new("p").nth(0),
    ];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["one", "three"]);
}

#[test]
fn serialization_strips_the_enclosing_tag() {
    let doc = dom::parse("<div><p><b>bold</b> text</p></div>");
    let chain = vec![Selector::new("p")];

    let results = evaluator::evaluate(&doc, &chain).expect("expected Ok(_)");
    assert_eq!(results, vec!["<b>bold</b> text"]);
}
