//! # Materialization
//!
//! Converts loosely typed [`GenericBlock`]s (or raw JSON records in the
//! Notion block shape) into validated [`TypedBlock`]s.
//!
//! Materialization is a partial-failure collector: each record is checked on
//! its own, failures are reported as [`ConversionError`]s, and valid records
//! are kept in input order.

pub mod error;
pub mod typed;

use log::warn;
use serde_json::Value;

pub use error::ConversionError;
pub use typed::TypedBlock;

use crate::{
    parsing::blocks::{BlockKind, GenericBlock},
    wire,
};

/// Materializes generic blocks, returning the valid blocks and one error per
/// rejected block. Both outputs keep the relative order of the input.
pub fn materialize(blocks: Vec<GenericBlock>) -> (Vec<TypedBlock>, Vec<ConversionError>) {
    let mut typed = Vec::with_capacity(blocks.len());
    let mut errors = vec![];

    for (index, block) in blocks.into_iter().enumerate() {
        match materialize_one(index, block) {
            Ok(b) => typed.push(b),
            Err(e) => {
                warn!("{e}");
                errors.push(e);
            }
        }
    }

    (typed, errors)
}

/// Materializes records produced outside the segmenter, in the Notion block
/// wire shape (`{"type": K, K: {"rich_text": [...]}}`).
///
/// Records are decoded into [`GenericBlock`]s first; a record that cannot be
/// decoded far enough to read its discriminator is a
/// [`ConversionError::MalformedRecord`].
pub fn materialize_records(records: &[Value]) -> (Vec<TypedBlock>, Vec<ConversionError>) {
    let mut typed = Vec::with_capacity(records.len());
    let mut errors = vec![];

    for (index, record) in records.iter().enumerate() {
        match wire::decode_record(index, record).and_then(|b| materialize_one(index, b)) {
            Ok(b) => typed.push(b),
            Err(e) => {
                warn!("{e}");
                errors.push(e);
            }
        }
    }

    (typed, errors)
}

fn materialize_one(index: usize, block: GenericBlock) -> Result<TypedBlock, ConversionError> {
    let Some(kind) = BlockKind::from_discriminator(&block.kind) else {
        return Err(ConversionError::UnsupportedBlockType {
            index,
            kind: block.kind,
        });
    };

    if let Some(pos) = block.spans.iter().position(|s| s.text.is_empty()) {
        return Err(ConversionError::malformed(
            index,
            format!("{kind} span {pos} has no text"),
        ));
    }

    Ok(TypedBlock::new(kind, block.spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::RichSpan;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn block(kind: &str, text: &str) -> GenericBlock {
        GenericBlock::new(kind, vec![RichSpan::plain(text)])
    }

    #[rstest]
    #[case("heading_2", BlockKind::Heading)]
    #[case("bulleted_list_item", BlockKind::BulletItem)]
    #[case("paragraph", BlockKind::Paragraph)]
    fn recognised_kinds_keep_spans(#[case] kind: &str, #[case] expected: BlockKind) {
        let spans = vec![RichSpan::bold("Label:"), RichSpan::plain(" value")];
        let (typed, errors) = materialize(vec![GenericBlock::new(kind, spans.clone())]);

        assert!(errors.is_empty());
        assert_eq!(typed.len(), 1);
        assert_eq!(typed[0].kind(), expected);
        assert_eq!(typed[0].spans(), spans.as_slice());
    }

    #[test]
    fn unknown_kind_is_reported() {
        let (typed, errors) = materialize(vec![block("quote", "to be or not")]);

        assert!(typed.is_empty());
        assert_eq!(
            errors,
            vec![ConversionError::UnsupportedBlockType {
                index: 0,
                kind: "quote".to_string(),
            }]
        );
    }

    #[test]
    fn empty_span_text_is_malformed() {
        let (typed, errors) = materialize(vec![GenericBlock::new(
            "paragraph",
            vec![RichSpan::plain("ok"), RichSpan::bold("")],
        )]);

        assert!(typed.is_empty());
        assert!(matches!(
            errors.as_slice(),
            [ConversionError::MalformedRecord { index: 0, .. }]
        ));
    }

    #[test]
    fn zero_spans_are_accepted() {
        let (typed, errors) = materialize(vec![GenericBlock::new("paragraph", vec![])]);
        assert!(errors.is_empty());
        assert!(typed[0].spans().is_empty());
    }

    #[test]
    fn valid_and_invalid_keep_relative_order() {
        let input = vec![
            block("heading_2", "one"),
            block("quote", "two"),
            block("paragraph", "three"),
            block("toggle", "four"),
            block("bulleted_list_item", "five"),
        ];
        let (typed, errors) = materialize(input);

        let texts: Vec<String> = typed.iter().map(TypedBlock::plain_text).collect();
        assert_eq!(texts, vec!["one", "three", "five"]);

        let indices: Vec<usize> = errors.iter().map(ConversionError::index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn records_roundtrip_to_the_same_json() {
        let record = json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    {
                        "type": "text",
                        "text": { "content": "Sample text" }
                    }
                ]
            }
        });

        let (typed, errors) = materialize_records(std::slice::from_ref(&record));

        assert!(errors.is_empty());
        assert_eq!(typed.len(), 1);
        assert_eq!(serde_json::to_value(&typed[0]).unwrap(), record);
    }

    #[test]
    fn bold_annotation_is_read() {
        let record = json!({
            "type": "heading_2",
            "heading_2": {
                "rich_text": [
                    { "text": { "content": "Loud" }, "annotations": { "bold": true, "italic": false } },
                    { "text": { "content": " quiet" }, "annotations": { "italic": true } }
                ]
            }
        });

        let (typed, errors) = materialize_records(&[record]);

        assert!(errors.is_empty());
        assert_eq!(
            typed[0].spans(),
            &[RichSpan::bold("Loud"), RichSpan::plain(" quiet")]
        );
    }

    #[rstest]
    #[case(json!("paragraph"))]
    #[case(json!({ "paragraph": { "rich_text": [] } }))]
    #[case(json!({ "type": 7, "paragraph": { "rich_text": [] } }))]
    #[case(json!({ "type": "paragraph" }))]
    #[case(json!({ "type": "paragraph", "paragraph": { "rich_text": "nope" } }))]
    #[case(json!({ "type": "paragraph", "paragraph": { "rich_text": [{ "text": { "content": null } }] } }))]
    #[case(json!({ "type": "paragraph", "paragraph": { "rich_text": [{ "type": "text" }] } }))]
    fn malformed_records(#[case] record: Value) {
        let (typed, errors) = materialize_records(&[record]);

        assert!(typed.is_empty());
        assert!(
            matches!(errors.as_slice(), [ConversionError::MalformedRecord { index: 0, .. }]),
            "got {errors:?}"
        );
    }

    #[test]
    fn unsupported_record_type_wins_over_shape() {
        let record = json!({ "type": "quote", "quote": "not even rich text" });
        let (_, errors) = materialize_records(&[record]);

        assert_eq!(
            errors,
            vec![ConversionError::UnsupportedBlockType {
                index: 0,
                kind: "quote".to_string(),
            }]
        );
    }

    #[test]
    fn bad_records_do_not_stop_the_rest() {
        let records = vec![
            json!({ "type": "paragraph", "paragraph": { "rich_text": [{ "text": { "content": "a" } }] } }),
            json!(null),
            json!({ "type": "quote", "quote": { "rich_text": [] } }),
            json!({ "type": "bulleted_list_item", "bulleted_list_item": { "rich_text": [{ "text": { "content": "b" } }] } }),
        ];
        let (typed, errors) = materialize_records(&records);

        let texts: Vec<String> = typed.iter().map(TypedBlock::plain_text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConversionError::MalformedRecord { index: 1, .. }));
        assert!(matches!(errors[1], ConversionError::UnsupportedBlockType { index: 2, .. }));
    }
}
