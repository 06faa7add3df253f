//! Decomposition of `base-type [brackets] [identifier] [brackets]` fragments.

use super::Error;

/// Checks whether `c` may appear in a type name or an identifier.
///
/// Any character that is not whitespace, a control character, or ASCII punctuation qualifies,
/// as well as `_`, `$`, and `.` which join package segments and nested classes.
pub(crate) fn is_identifier_char(c: char) -> bool {
    matches!(c, '_' | '$' | '.')
        || !(c.is_whitespace() || c.is_control() || c.is_ascii_punctuation())
}

/// Checks whether `c` may start a type name or an identifier.
pub(crate) fn is_identifier_start(c: char) -> bool {
    c != '.' && is_identifier_char(c)
}

/// The maximum number of array dimensions of a type.
pub(crate) const MAX_ARRAY_DIMENSIONS: usize = u8::MAX as usize;

/// A decomposed type reference or field declaration, with generic arguments already removed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Declaration<'a> {
    /// The whole fragment.
    pub text: &'a str,
    /// The base type as written, e.g., `java.util.Map$Entry` or `int`.
    pub base_type: &'a str,
    /// The declared name, if any.
    pub identifier: Option<&'a str>,
    /// The number of `[` in the fragment, on either side of the identifier.
    pub dimensions: usize,
}

impl<'a> Declaration<'a> {
    /// Parses a fragment shaped as `base-type [brackets] [identifier] [brackets]`.
    ///
    /// # Errors
    /// Returns [`Error::MalformedDeclaration`] if the fragment does not follow the grammar.
    pub(crate) fn parse(fragment: &'a str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(fragment);
        cursor.skip_whitespace();
        let base_type = cursor
            .identifier()
            .ok_or_else(|| Error::malformed_declaration(fragment, "missing type"))?;
        let mut dimensions = cursor.array_brackets()?;
        let identifier = cursor.identifier();
        if identifier.is_some() {
            dimensions += cursor.array_brackets()?;
        }
        if dimensions > MAX_ARRAY_DIMENSIONS {
            return Err(Error::malformed_declaration(
                fragment,
                "more than 255 array dimensions",
            ));
        }
        cursor.skip_whitespace();
        if !cursor.remaining().is_empty() {
            return Err(Error::malformed_declaration(
                fragment,
                "unexpected text after declaration",
            ));
        }
        Ok(Self {
            text: fragment,
            base_type,
            identifier,
            dimensions,
        })
    }
}

/// A forward-only scanner over a fragment.
struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remaining();
        self.position += remaining.len() - remaining.trim_start().len();
    }

    /// Consumes an identifier starting right at the cursor.
    fn identifier(&mut self) -> Option<&'a str> {
        let remaining = self.remaining();
        if !remaining.starts_with(is_identifier_start) {
            return None;
        }
        let len = remaining
            .find(|c| !is_identifier_char(c))
            .unwrap_or(remaining.len());
        self.position += len;
        Some(&remaining[..len])
    }

    /// Consumes any run of `[ ]` pairs together with the surrounding whitespace.
    /// Returns the number of pairs.
    fn array_brackets(&mut self) -> Result<usize, Error> {
        let mut dimensions = 0;
        self.skip_whitespace();
        while self.peek() == Some('[') {
            self.bump();
            self.skip_whitespace();
            if self.peek() != Some(']') {
                return Err(Error::malformed_declaration(
                    self.text,
                    "unclosed array bracket",
                ));
            }
            self.bump();
            self.skip_whitespace();
            dimensions += 1;
            if dimensions > MAX_ARRAY_DIMENSIONS {
                return Err(Error::malformed_declaration(
                    self.text,
                    "more than 255 array dimensions",
                ));
            }
        }
        Ok(dimensions)
    }
}
