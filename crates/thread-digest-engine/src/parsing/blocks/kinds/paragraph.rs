/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// prefix matches, and carry the whole trimmed line as content.
pub struct Paragraph;
