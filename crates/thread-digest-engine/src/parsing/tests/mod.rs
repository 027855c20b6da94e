//! Integration tests for the parsing module.
//!
//! Every case also runs the structural invariant checks in `invariants`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{BlockKind, GenericBlock},
    inline::RichSpan,
    segment,
};

fn segment_checked(source: &str) -> Vec<GenericBlock> {
    let blocks = segment(source);
    invariants::check(source, &blocks);
    blocks
}

#[test]
fn thread_summary_template() {
    let md = "## Thread Summary\n\nParent Message: hi\n\nNumber of Replies: 2\n\n- first\n- second\n\n-----";
    let blocks = segment_checked(md);

    let kinds: Vec<&str> = blocks.iter().map(|b| b.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "heading_2",
            "paragraph",
            "paragraph",
            "bulleted_list_item",
            "bulleted_list_item",
            "paragraph",
        ]
    );

    let texts: Vec<String> = blocks.iter().map(GenericBlock::plain_text).collect();
    assert_eq!(
        texts,
        vec![
            "Thread Summary",
            "Parent Message: hi",
            "Number of Replies: 2",
            "first",
            "second",
            "-----",
        ]
    );
}

#[test]
fn heading_bold_and_plain_paragraphs() {
    let blocks = segment_checked("## Test Heading\n\n**Bold Text**\n\nRegular text");

    insta::assert_debug_snapshot!(blocks, @r#"
    [
        GenericBlock {
            kind: "heading_2",
            spans: [
                RichSpan {
                    text: "Test Heading",
                    bold: false,
                },
            ],
        },
        GenericBlock {
            kind: "paragraph",
            spans: [
                RichSpan {
                    text: "Bold Text",
                    bold: true,
                },
            ],
        },
        GenericBlock {
            kind: "paragraph",
            spans: [
                RichSpan {
                    text: "Regular text",
                    bold: false,
                },
            ],
        },
    ]
    "#);
}

#[test]
fn blank_lines_separate_only() {
    let blocks = segment_checked("a\n\n b ");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].spans, vec![RichSpan::plain("b")]);
}

#[test]
fn crlf_line_endings() {
    let blocks = segment_checked("## Title\r\n\r\n- item\r\n");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].spans, vec![RichSpan::plain("Title")]);
    assert_eq!(blocks[1].spans, vec![RichSpan::plain("item")]);
}

#[rstest]
#[case("## ****")]
#[case("- **")]
#[case("****")]
fn zero_span_lines_are_dropped(#[case] line: &str) {
    let md = format!("before\n{line}\nafter");
    let blocks = segment_checked(&md);
    let texts: Vec<String> = blocks.iter().map(GenericBlock::plain_text).collect();
    assert_eq!(texts, vec!["before", "after"]);
}

#[test]
fn bare_prefixes_become_paragraphs() {
    let blocks = segment_checked("## \n- ");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.kind == BlockKind::Paragraph.discriminator()));
    assert_eq!(blocks[0].plain_text(), "##");
    assert_eq!(blocks[1].plain_text(), "-");
}

#[rstest]
#[case("plain words only")]
#[case("- a bullet with * single stars *")]
#[case("## heading with `code` and _underscores_")]
#[case("line one\nline two\n\n- three")]
fn no_delimiter_means_no_bold(#[case] md: &str) {
    let blocks = segment_checked(md);
    assert!(blocks.iter().flat_map(|b| &b.spans).all(|s| !s.bold));
}

#[rstest]
#[case("## **X**", BlockKind::Heading)]
#[case("- **X**", BlockKind::BulletItem)]
#[case("**X**", BlockKind::Paragraph)]
fn fully_bold_line_is_one_bold_span(#[case] md: &str, #[case] kind: BlockKind) {
    let blocks = segment_checked(md);
    assert_eq!(blocks, vec![GenericBlock::new(kind.discriminator(), vec![RichSpan::bold("X")])]);
}

#[test]
fn bold_labels_in_bullets() {
    let blocks = segment_checked("- **Replies:** none yet");
    assert_eq!(
        blocks[0].spans,
        vec![RichSpan::bold("Replies:"), RichSpan::plain(" none yet")]
    );
}

#[test]
fn odd_delimiters_alternate_mechanically() {
    let blocks = segment_checked("a **b** c **d");
    assert_eq!(
        blocks[0].spans,
        vec![
            RichSpan::plain("a "),
            RichSpan::bold("b"),
            RichSpan::plain(" c "),
            RichSpan::bold("d"),
        ]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(segment_checked("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(segment_checked("\n  \n\t\n").is_empty());
}
