//! Text codec over the cover text itself.
//!
//! All three methods are sentinel framed and keep the visible text intact:
//! zero-width characters, whitespace parity markers or trailing line
//! whitespace carry the payload. The carrier unit is a character position, a
//! whitespace run or a line, depending on the method.

pub mod parity;
pub mod whitespace;
pub mod zero_width;

use crate::result::Result;

/// inserted after a position to signal a 1 bit, or to flip a decoded parity
pub(crate) const ZERO_WIDTH_SPACE: char = '\u{200B}';
/// inserted after a position to signal a 0 bit
pub(crate) const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMethod {
    /// insert one zero-width marker per payload bit
    ZeroWidth,
    /// encode bits as the running parity of whitespace positions
    Parity,
    /// encode one bit per line as trailing tab or space
    Whitespace,
}

/// Embeds a sentinel framed message into `cover`, returning the new text.
///
/// A cover without enough carrier positions reports a capacity error and
/// produces no output.
pub fn embed_message(cover: &str, message: &str, method: &TextMethod) -> Result<String> {
    match method {
        TextMethod::ZeroWidth => zero_width::embed(cover, message),
        TextMethod::Parity => parity::embed(cover, message),
        TextMethod::Whitespace => whitespace::embed(cover, message),
    }
}

/// Reads a sentinel framed message back out of `text`.
///
/// A text without an embedded message yields the empty string.
pub fn extract_message(text: &str, method: &TextMethod) -> String {
    match method {
        TextMethod::ZeroWidth => zero_width::extract(text),
        TextMethod::Parity => parity::extract(text),
        TextMethod::Whitespace => whitespace::extract(text),
    }
}
