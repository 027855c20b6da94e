use super::{kinds::Strong, types::RichSpan};

/// Tokenizes a block's content into [`RichSpan`]s.
///
/// Content without any [`Strong::DELIM`] becomes a single plain span holding
/// the whole input, even when that input is empty. Otherwise the content is
/// split on the delimiter, pieces alternate plain/bold starting with plain,
/// and empty pieces (from content that starts or ends on a delimiter, or
/// adjacent delimiters) are dropped.
///
/// An odd number of delimiters is not an error: the final bold region
/// extends to the end of the content.
pub fn parse_inline(s: &str) -> Vec<RichSpan> {
    if !s.contains(Strong::DELIM) {
        return vec![RichSpan::plain(s)];
    }

    s.split(Strong::DELIM)
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .map(|(i, piece)| RichSpan {
            text: piece.to_string(),
            bold: Strong::is_bold_piece(i),
        })
        .collect()
}
