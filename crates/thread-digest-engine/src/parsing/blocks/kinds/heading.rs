/// Level-two heading block type with owned prefix constant.
///
/// Only `## ` is recognised; other heading levels fall through to paragraphs.
pub struct Heading;

impl Heading {
    pub const PREFIX: &'static str = "## ";

    /// Strips the heading prefix, returning the trimmed heading text.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
