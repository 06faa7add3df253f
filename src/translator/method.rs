//! Splitting of `returnType name(params)` declarations.

use super::{
    Error,
    declaration::{Declaration, is_identifier_char, is_identifier_start},
};

/// A method declaration split into its return type, name, and parameters.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct MethodDeclaration<'a> {
    pub return_type: Declaration<'a>,
    pub name: &'a str,
    /// The parameter fragments. Names given to the parameters are kept but carry no meaning.
    pub parameters: Vec<Declaration<'a>>,
}

impl<'a> MethodDeclaration<'a> {
    /// Parses a method declaration whose generic arguments have been removed.
    /// A trailing `;` and surrounding whitespace are allowed.
    ///
    /// # Errors
    /// - [`Error::MalformedMethod`] if the text is not shaped as `type name(params)`.
    /// - [`Error::MalformedDeclaration`] if any of the parameters is malformed.
    pub(crate) fn parse(declaration: &'a str) -> Result<Self, Error> {
        let malformed = |reason| Error::malformed_method(declaration, reason);

        let text = declaration.trim();
        let text = text.strip_suffix(';').map_or(text, str::trim_end);
        let body = text
            .strip_suffix(')')
            .ok_or_else(|| malformed("missing closing parenthesis"))?;
        let (head, parameters) = body
            .split_once('(')
            .ok_or_else(|| malformed("missing parameter list"))?;
        if parameters.contains(['(', ')']) {
            return Err(malformed("unbalanced parentheses"));
        }

        let head = head.trim_end();
        let name_start = head
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_identifier_char(*c))
            .last()
            .map(|(idx, _)| idx)
            .ok_or_else(|| malformed("missing method name"))?;
        let name = &head[name_start..];
        if !name.starts_with(is_identifier_start) {
            return Err(malformed("invalid method name"));
        }
        let return_type = head[..name_start].trim();
        if return_type.is_empty() {
            return Err(malformed("missing method name"));
        }
        let return_type =
            Declaration::parse(return_type).map_err(|_| malformed("invalid return type"))?;
        if return_type.identifier.is_some() {
            return Err(malformed("unexpected text between return type and method name"));
        }

        let parameters = parameters
            .split(',')
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .map(Declaration::parse)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            return_type,
            name,
            parameters,
        })
    }
}
