//! Non-generic JVM field types.

use std::str::FromStr;

use crate::{jvm::references::ClassRef, macros::see_jvm_spec};

use super::Descriptor;

/// A primitive type in Java.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// All the primitive types.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
    ];

    /// Returns the Java keyword naming this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
        }
    }

    /// Returns the single-letter descriptor of this type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }
}

/// An error indicating that a character is not the descriptor of a primitive type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid primitive type descriptor: {0}")]
pub struct InvalidPrimitiveDescriptor(pub char);

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidPrimitiveDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|it| it.descriptor_char() == descriptor)
            .ok_or(InvalidPrimitiveDescriptor(descriptor))
    }
}

/// An error indicating that a string is not a Java primitive type keyword.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Not a primitive type keyword: {0}")]
pub struct NotAPrimitiveKeyword(pub String);

impl FromStr for PrimitiveType {
    type Err = NotAPrimitiveKeyword;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.keyword() == keyword)
            .ok_or_else(|| NotAPrimitiveKeyword(keyword.to_owned()))
    }
}

impl Descriptor for PrimitiveType {
    fn descriptor(&self) -> String {
        self.descriptor_char().to_string()
    }
}

/// A field type (non-generic) in Java.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A reference type (except arrays).
    Object(ClassRef),
    /// An array type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Creates an array type with the given type as its elements.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Creates an array type of `dim` dimensions with `element` as the innermost element type.
    #[must_use]
    pub fn array_of(element: Self, dim: u8) -> Self {
        (0..dim).fold(element, |acc, _| acc.into_array_type())
    }

    /// Returns the number of array dimensions of this type, zero for non-array types.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        let mut dimensions = 0;
        let mut element = self;
        while let Self::Array(inner) = element {
            dimensions += 1;
            element = inner;
        }
        dimensions
    }
}

impl Descriptor for FieldType {
    fn descriptor(&self) -> String {
        let mut descriptor = String::new();
        let mut element = self;
        while let Self::Array(inner) = element {
            descriptor.push('[');
            element = inner;
        }
        match element {
            Self::Base(it) => descriptor.push(it.descriptor_char()),
            Self::Object(ClassRef { binary_name }) => {
                descriptor.push('L');
                descriptor.push_str(binary_name);
                descriptor.push(';');
            }
            Self::Array(_) => unreachable!("Array types are unwrapped above"),
        }
        descriptor
    }
}
