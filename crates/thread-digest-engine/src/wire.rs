//! Serde shapes for Notion's block format.
//!
//! A block on the wire is an object keyed by its own discriminator:
//!
//! ```json
//! {"object": "block", "type": "paragraph",
//!  "paragraph": {"rich_text": [{"type": "text", "text": {"content": "hi"},
//!                               "annotations": {"bold": true}}]}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    materialize::ConversionError,
    parsing::{
        blocks::{BlockKind, GenericBlock},
        inline::RichSpan,
    },
};

/// Longest `text.content` Notion accepts in a single rich-text item.
pub const MAX_TEXT_CONTENT_CHARS: usize = 2000;

/// The payload object stored under a block's discriminator key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBody {
    pub rich_text: Vec<WireRichText>,
}

impl RichTextBody {
    /// Spans longer than [`MAX_TEXT_CONTENT_CHARS`] become several items
    /// with the same annotations.
    pub fn from_spans(spans: &[RichSpan]) -> Self {
        Self {
            rich_text: spans.iter().flat_map(WireRichText::chunked).collect(),
        }
    }

    pub fn into_spans(self) -> Vec<RichSpan> {
        self.rich_text.into_iter().map(RichSpan::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRichText {
    #[serde(rename = "type", default = "text_type")]
    pub kind: String,
    pub text: WireText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<WireAnnotations>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireText {
    pub content: String,
}

/// Only `bold` is modelled; other annotation flags are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireAnnotations {
    #[serde(default)]
    pub bold: bool,
}

fn text_type() -> String {
    "text".to_string()
}

impl WireRichText {
    fn new(content: &str, bold: bool) -> Self {
        Self {
            kind: text_type(),
            text: WireText {
                content: content.to_string(),
            },
            // Plain text carries no annotations object at all
            annotations: bold.then_some(WireAnnotations { bold: true }),
        }
    }

    /// Splits a span into items of at most [`MAX_TEXT_CONTENT_CHARS`]
    /// characters, cutting on char boundaries.
    pub fn chunked(span: &RichSpan) -> Vec<Self> {
        let text = span.text.as_str();
        let mut items = Vec::new();
        let mut start = 0;
        while text.len() - start > MAX_TEXT_CONTENT_CHARS {
            let end = text[start..]
                .char_indices()
                .nth(MAX_TEXT_CONTENT_CHARS)
                .map_or(text.len(), |(i, _)| start + i);
            items.push(Self::new(&text[start..end], span.bold));
            start = end;
        }
        if start < text.len() || items.is_empty() {
            items.push(Self::new(&text[start..], span.bold));
        }
        items
    }
}

impl From<&RichSpan> for WireRichText {
    fn from(span: &RichSpan) -> Self {
        Self::new(&span.text, span.bold)
    }
}

impl From<WireRichText> for RichSpan {
    fn from(rt: WireRichText) -> Self {
        RichSpan {
            text: rt.text.content,
            bold: rt.annotations.is_some_and(|a| a.bold),
        }
    }
}

impl GenericBlock {
    /// Encodes this block as a loosely keyed wire record.
    ///
    /// The discriminator is written as-is, so unrecognised kinds produce a
    /// record that materialization will reject.
    pub fn to_record(&self) -> Value {
        let mut map = Map::new();
        map.insert("object".into(), json!("block"));
        map.insert("type".into(), json!(self.kind));
        map.insert(self.kind.clone(), json!(RichTextBody::from_spans(&self.spans)));
        Value::Object(map)
    }
}

/// Decodes a wire record into a [`GenericBlock`].
///
/// The discriminator must be readable for anything else to happen. A record
/// whose discriminator is not a known kind is returned with no spans and its
/// payload left unchecked, so materialization reports it as unsupported
/// rather than malformed.
pub(crate) fn decode_record(index: usize, record: &Value) -> Result<GenericBlock, ConversionError> {
    let obj = record
        .as_object()
        .ok_or_else(|| ConversionError::malformed(index, "record is not an object"))?;

    let kind = match obj.get("type") {
        Some(Value::String(kind)) => kind,
        Some(_) => return Err(ConversionError::malformed(index, "`type` is not a string")),
        None => return Err(ConversionError::malformed(index, "missing `type`")),
    };

    if BlockKind::from_discriminator(kind).is_none() {
        return Ok(GenericBlock::new(kind.as_str(), vec![]));
    }

    let payload = obj
        .get(kind.as_str())
        .ok_or_else(|| ConversionError::malformed(index, format!("missing `{kind}` payload")))?;

    let body = RichTextBody::deserialize(payload)
        .map_err(|e| ConversionError::malformed(index, format!("invalid `{kind}` payload: {e}")))?;

    Ok(GenericBlock::new(kind.as_str(), body.into_spans()))
}
