/// An error that occurs when translating a declaration.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum Error {
    /// The `<` and `>` of generic arguments are not balanced.
    #[error("Mismatched <>s: {0}")]
    GenericMismatch(String),
    /// A type reference or a field declaration does not follow the declaration grammar.
    #[error("Invalid declaration `{fragment}`: {reason}")]
    MalformedDeclaration {
        /// The offending fragment.
        fragment: String,
        /// What is wrong with the fragment.
        reason: &'static str,
    },
    /// A method declaration does not follow the `type name(params)` form.
    #[error("Invalid method declaration `{declaration}`: {reason}")]
    MalformedMethod {
        /// The offending declaration, after removing generic arguments.
        declaration: String,
        /// What is wrong with the declaration.
        reason: &'static str,
    },
    /// The type is neither a primitive type nor a class known to the resolver, even when
    /// prefixed with any of the imports.
    #[error("Unknown type: {0}")]
    UnknownType(String),
}

impl Error {
    pub(crate) fn malformed_declaration(fragment: &str, reason: &'static str) -> Self {
        Self::MalformedDeclaration {
            fragment: fragment.to_owned(),
            reason,
        }
    }

    pub(crate) fn malformed_method(declaration: &str, reason: &'static str) -> Self {
        Self::MalformedMethod {
            declaration: declaration.to_owned(),
            reason,
        }
    }
}
