/// Strong emphasis inline type with owned delimiter constant.
///
/// Only the `**` form is recognised. Delimiters are not matched in pairs:
/// every occurrence toggles emphasis, so an unmatched opener runs to the
/// end of the line.
pub struct Strong;

impl Strong {
    /// The delimiter that opens and closes a bold run.
    pub const DELIM: &'static str = "**";

    /// Whether the piece at `index` of a delimiter split is emphasized.
    ///
    /// Pieces alternate plain/bold starting with plain at index 0.
    pub fn is_bold_piece(index: usize) -> bool {
        index % 2 == 1
    }
}
