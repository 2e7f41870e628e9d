use super::*;

#[test]
fn empty_elements_self_close() {
    let e = Element::new("rect").attr("x", "0").attr("fill", "#050507");
    assert_eq!(e.to_string(), r##"<rect x="0" fill="#050507" />"##);
}

#[test]
fn set_attr_replaces_in_place() {
    let mut e = Element::new("g").attr("a", "1").attr("b", "2");
    e.set_attr("a", "3");
    assert_eq!(e.to_string(), r#"<g a="3" b="2" />"#);
    assert_eq!(e.get_attr("a"), Some("3"));
    assert_eq!(e.get_attr("missing"), None);
}

#[test]
fn nested_children_indent_by_two_spaces() {
    let e = Element::new("svg").child(Element::new("g").child(Element::new("rect")));
    assert_eq!(e.to_string(), "<svg>\n  <g>\n    <rect />\n  </g>\n</svg>");
}

#[test]
fn text_is_escaped_and_inline() {
    let e = Element::new("text").text("a<b & c>");
    assert_eq!(e.to_string(), "<text>a&lt;b &amp; c&gt;</text>");

    let mixed = Element::new("text")
        .text("Ω")
        .child(Element::new("animate").attr("dur", "1s"));
    assert_eq!(mixed.to_string(), "<text>Ω<animate dur=\"1s\" />\n</text>");
}

#[test]
fn first_child_follows_text_directly() {
    let e = Element::new("g").child(
        Element::new("text")
            .text("A")
            .child(Element::new("animateTransform"))
            .child(Element::new("animate")),
    );
    assert_eq!(
        e.to_string(),
        "<g>\n  <text>A<animateTransform />\n    <animate />\n  </text>\n</g>"
    );
}

#[test]
fn attribute_values_are_escaped() {
    let e = Element::new("x").attr("v", "\"q\" & <t>\nline");
    assert_eq!(
        e.to_string(),
        "<x v=\"&quot;q&quot; &amp; &lt;t&gt;&#10;line\" />"
    );
}

#[test]
fn lookup_helpers_walk_the_tree() {
    let tree = Element::new("svg")
        .child(Element::new("g").attr("id", "a").child(Element::new("text")))
        .child(Element::new("g").attr("id", "b"));
    assert_eq!(tree.descendants().len(), 4);
    assert_eq!(tree.find_by_id("b").map(|e| e.name()), Some("g"));
    assert_eq!(tree.find_by_id("a").unwrap().children().len(), 1);
    assert!(tree.find_by_id("zzz").is_none());
}
