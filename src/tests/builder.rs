use super::{build, clean_text};
use crate::error::ExtractError;
use crate::section::SectionNode;
use crate::token::Token;

fn leaf(text: &str) -> SectionNode {
    SectionNode::Leaf(text.to_string())
}

fn branch(title: &str, children: Vec<SectionNode>) -> SectionNode {
    SectionNode::Branch {
        title: title.to_string(),
        children,
    }
}

#[test]
fn test_sibling_headings_at_level_one() {
    let tokens = vec![
        Token::heading(1, "Intro"),
        Token::text("Hello world"),
        Token::heading(1, "See also"),
        Token::text("x, y"),
    ];

    let tree = build(tokens).unwrap();

    assert_eq!(
        tree,
        vec![
            branch("Intro", vec![leaf("Hello world")]),
            branch("See also", vec![leaf("x, y")]),
        ]
    );
}

#[test]
fn test_nested_heading_then_shallower_sibling() {
    let tokens = vec![
        Token::heading(1, "A"),
        Token::heading(2, "B"),
        Token::text("inner"),
        Token::heading(1, "C"),
        Token::text("outer"),
    ];

    let tree = build(tokens).unwrap();

    assert_eq!(
        tree,
        vec![
            branch("A", vec![branch("B", vec![leaf("inner")])]),
            branch("C", vec![leaf("outer")]),
        ]
    );
}

#[test]
fn test_lead_text_stays_at_root() {
    // Extracts start with untitled lead paragraphs, then level-2 sections
    let tokens = vec![
        Token::text("Lead paragraph."),
        Token::heading(2, "History"),
        Token::text("Long ago."),
        Token::heading(3, "Early"),
        Token::text("Very long ago."),
        Token::heading(2, "Geography"),
        Token::text("Hills."),
    ];

    let tree = build(tokens).unwrap();

    assert_eq!(
        tree,
        vec![
            leaf("Lead paragraph."),
            branch(
                "History",
                vec![leaf("Long ago."), branch("Early", vec![leaf("Very long ago.")])]
            ),
            branch("Geography", vec![leaf("Hills.")]),
        ]
    );
}

#[test]
fn test_multi_level_jump_closes_only_two_frames() {
    let tokens = vec![
        Token::heading(2, "x"),
        Token::heading(3, "y"),
        Token::heading(4, "z"),
        Token::heading(2, "b"),
        Token::text("body"),
    ];

    let tree = build(tokens).unwrap();

    // `b` lands inside `x` because a strict decrease closes exactly two frames
    assert_eq!(
        tree,
        vec![branch(
            "x",
            vec![
                branch("y", vec![branch("z", vec![])]),
                branch("b", vec![leaf("body")]),
            ]
        )]
    );
}

#[test]
fn test_root_frame_survives_extra_closes() {
    let tokens = vec![
        Token::heading(3, "deep"),
        Token::heading(1, "top"),
        Token::heading(1, "next"),
        Token::text("t"),
    ];

    let tree = build(tokens).unwrap();

    assert_eq!(
        tree,
        vec![
            branch("deep", vec![]),
            branch("top", vec![]),
            branch("next", vec![leaf("t")]),
        ]
    );
}

#[test]
fn test_level_zero_is_accepted() {
    let tokens = vec![Token::heading(0, "zero"), Token::text("a")];

    let tree = build(tokens).unwrap();

    assert_eq!(tree, vec![branch("zero", vec![leaf("a")])]);
}

#[test]
fn test_heading_titles_are_trimmed() {
    let tree = build(vec![Token::heading(2, "  History \n")]).unwrap();

    assert_eq!(tree[0].title(), Some("History"));
    assert!(tree[0].children().is_empty());
}

#[test]
fn test_blank_text_is_dropped() {
    let tokens = vec![
        Token::text("   "),
        Token::text("\n\n"),
        Token::heading(2, "S"),
        Token::text(""),
    ];

    let tree = build(tokens).unwrap();

    assert_eq!(tree, vec![branch("S", vec![])]);
}

#[test]
fn test_empty_stream_builds_empty_tree() {
    let tree = build(Vec::new()).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn test_unknown_token_rejects_build() {
    let tokens = vec![
        Token::heading(2, "S"),
        Token::text("ok"),
        Token::Other {
            name: "template".to_string(),
        },
        Token::text("never reached"),
    ];

    match build(tokens) {
        Err(ExtractError::InvalidTokenKind { kind, position }) => {
            assert_eq!(kind, "template");
            assert_eq!(position, 2);
        }
        other => panic!("expected InvalidTokenKind, got {other:?}"),
    }
}

#[test]
fn test_each_line_break_becomes_one_space() {
    let tree = build(vec![Token::text("\nfirst line\n\nsecond line\r\nthird\n")]).unwrap();

    assert_eq!(tree, vec![leaf("first line  second line third")]);
}

#[test]
fn test_clean_text_whitespace() {
    assert_eq!(clean_text("  a\nb  "), "a b");
    assert_eq!(clean_text("a\n\nb"), "a  b");
    assert_eq!(clean_text("a\r\nb"), "a b");
    assert_eq!(clean_text("a  b"), "a  b");
    assert_eq!(clean_text("\n \t"), "");
    assert_eq!(clean_text("a\rb"), "a\rb");
}
