use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    parsing::{blocks::BlockKind, inline::RichSpan},
    wire::RichTextBody,
};

/// A block whose kind and shape have been validated.
///
/// Fields are private and the only constructor is crate-internal, so every
/// `TypedBlock` outside this crate came out of [`materialize`](super::materialize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedBlock {
    kind: BlockKind,
    spans: Vec<RichSpan>,
}

impl TypedBlock {
    pub(crate) fn new(kind: BlockKind, spans: Vec<RichSpan>) -> Self {
        Self { kind, spans }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn spans(&self) -> &[RichSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<RichSpan> {
        self.spans
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    pub fn is_bullet_item(&self) -> bool {
        self.kind == BlockKind::BulletItem
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph
    }

    /// Concatenated span text with emphasis markers removed.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Serializes into the Notion block shape:
/// `{"object": "block", "type": K, K: {"rich_text": [...]}}`.
impl Serialize for TypedBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind.discriminator();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        map.serialize_entry(kind, &RichTextBody::from_spans(&self.spans))?;
        map.end()
    }
}
