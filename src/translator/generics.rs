//! Elision of generic arguments.

use std::borrow::Cow;

use super::Error;

/// Removes every `<...>` generic argument list, at any nesting depth, from `text`.
/// The content of the brackets is dropped without being inspected.
///
/// # Errors
/// Returns [`Error::GenericMismatch`] if the brackets are not balanced.
pub(crate) fn strip_generics(text: &str) -> Result<Cow<'_, str>, Error> {
    if !text.contains(['<', '>']) {
        return Ok(Cow::Borrowed(text));
    }
    let mismatch = || Error::GenericMismatch(text.to_owned());
    let mut stripped = String::with_capacity(text.len());
    let mut nesting: usize = 0;
    for c in text.chars() {
        match c {
            '<' => nesting += 1,
            '>' => nesting = nesting.checked_sub(1).ok_or_else(mismatch)?,
            _ if nesting == 0 => stripped.push(c),
            _ => {}
        }
    }
    if nesting == 0 {
        Ok(Cow::Owned(stripped))
    } else {
        Err(mismatch())
    }
}
