/// Bulleted list item block type with owned prefix constant.
///
/// Only `- ` bullets are recognised and nesting is not tracked.
pub struct BulletItem;

impl BulletItem {
    pub const PREFIX: &'static str = "- ";

    /// Strips the bullet prefix. The remainder is kept as-is, so extra
    /// spaces after the marker stay part of the item text.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
