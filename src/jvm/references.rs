//! References to JVM elements.

/// A reference to a class, identified by its binary name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, derive_more::Display)]
#[display("{binary_name}")]
pub struct ClassRef {
    /// The binary name of the class.
    pub binary_name: String,
}

impl ClassRef {
    /// Creates a new [`ClassRef`] from a binary name.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        ClassRef {
            binary_name: binary_name.into(),
        }
    }

    /// Returns the name of the class as written in Java source, i.e., with `.` separating the
    /// package segments. Nested classes keep their `$`.
    #[must_use]
    pub fn source_name(&self) -> String {
        self.binary_name.replace('/', ".")
    }
}
