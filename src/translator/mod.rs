//! Translation of Java-language declarations into JVM descriptors.
//!
//! A [`Translator`] accepts three kinds of declarations:
//! - type references, e.g., `int[]` or `java.util.List<String>`,
//! - field declarations, e.g., `String[] names`,
//! - method declarations, e.g., `boolean add(int index, Object element);`.
//!
//! Generic arguments are accepted anywhere and ignored, as long as the `<` and `>` are balanced.
//! Nested classes are written with `$` (`Map$Entry`), as in their binary names.

use itertools::Itertools;
use tracing::{debug, debug_span, trace};

use crate::{
    jvm::{class_loader::ClassResolver, references::ClassRef},
    types::{
        Descriptor,
        field_type::{FieldType, PrimitiveType},
        method_descriptor::{MethodDescriptor, ReturnType},
    },
};

mod declaration;
mod errors;
mod generics;
mod method;

use declaration::Declaration;
pub use errors::Error;
use generics::strip_generics;
use method::MethodDeclaration;

/// Translates declarations into descriptors.
///
/// Type names that are neither primitive types nor classes known to the resolver are looked up
/// again under each of the imports, in order.
#[derive(Debug, Clone)]
pub struct Translator<R> {
    resolver: R,
    imports: Vec<String>,
}

impl<R> Translator<R> {
    /// The package imported when no imports are given.
    pub const DEFAULT_IMPORT: &'static str = "java.lang";

    /// Creates a translator that imports [`Self::DEFAULT_IMPORT`].
    pub fn new(resolver: R) -> Self {
        Self::with_imports(resolver, [Self::DEFAULT_IMPORT])
    }

    /// Creates a translator that imports the given packages, e.g., `java.util`.
    /// The packages are searched in the given order.
    pub fn with_imports<I>(resolver: R, imports: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let imports = imports.into_iter().map(Into::into).collect();
        Self { resolver, imports }
    }

    /// Returns the imported packages.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Returns the class resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

/// The base type of a declaration after resolution.
enum BaseType {
    Primitive(PrimitiveType),
    Void,
    Class(ClassRef),
}

impl<R: ClassResolver> Translator<R> {
    /// Returns the descriptor of a type, e.g., `[I` for `int[]`.
    /// A name following the type is accepted and ignored.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn translate_type(&self, declaration: &str) -> Result<String, Error> {
        self.type_of(declaration).map(|it| it.descriptor())
    }

    /// Returns the name and the descriptor of a field, e.g., `("foo", "I")` for `int foo`.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn translate_field(&self, declaration: &str) -> Result<(String, String), Error> {
        self.field_of(declaration)
            .map(|(name, field_type)| (name, field_type.descriptor()))
    }

    /// Returns the name and the descriptor of a method, e.g., `("bar", "([I)Ljava/lang/String;")`
    /// for `String bar(int[] i)`.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn translate_method(&self, declaration: &str) -> Result<(String, String), Error> {
        self.method_of(declaration)
            .map(|(name, descriptor)| (name, descriptor.descriptor()))
    }

    /// Translates a method declaration that has been split into tokens.
    ///
    /// A pair of a method name and a descriptor starting with `(` has already been translated and
    /// is returned unchanged. Any other tokens are joined with spaces and translated as a method
    /// declaration, so `["boolean", "foo", "(", ")"]` is the same as `boolean foo ( )`.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn translate_method_tokens<I>(&self, tokens: I) -> Result<(String, String), Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|it| it.as_ref().to_owned())
            .collect();
        match tokens.as_slice() {
            [name, descriptor] if descriptor.starts_with('(') => {
                Ok((name.clone(), descriptor.clone()))
            }
            _ => self.translate_method(&tokens.iter().join(" ")),
        }
    }

    /// Returns the type referred to by a declaration.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn type_of(&self, declaration: &str) -> Result<ReturnType, Error> {
        let _span = debug_span!("translate_type", declaration).entered();
        let stripped = strip_generics(declaration)?;
        let decl = Declaration::parse(&stripped)?;
        self.resolve_declaration(&decl)
    }

    /// Returns the name and the type of a field declaration.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn field_of(&self, declaration: &str) -> Result<(String, FieldType), Error> {
        let _span = debug_span!("translate_field", declaration).entered();
        let stripped = strip_generics(declaration)?;
        let decl = Declaration::parse(&stripped)?;
        let name = decl
            .identifier
            .ok_or_else(|| Error::malformed_declaration(&stripped, "missing field name"))?;
        let field_type = self.resolve_field_type(&decl, "void field")?;
        Ok((name.to_owned(), field_type))
    }

    /// Returns the name and the descriptor of a method declaration.
    ///
    /// # Errors
    /// See [`Error`].
    pub fn method_of(&self, declaration: &str) -> Result<(String, MethodDescriptor), Error> {
        let _span = debug_span!("translate_method", declaration).entered();
        let stripped = strip_generics(declaration)?;
        let method = MethodDeclaration::parse(&stripped)?;
        let parameters_types = method
            .parameters
            .iter()
            .map(|param| self.resolve_field_type(param, "void parameter"))
            .collect::<Result<_, _>>()?;
        let return_type = self.resolve_declaration(&method.return_type)?;
        debug!(name = method.name, "Translated method");
        Ok((
            method.name.to_owned(),
            MethodDescriptor {
                parameters_types,
                return_type,
            },
        ))
    }

    fn resolve_declaration(&self, decl: &Declaration<'_>) -> Result<ReturnType, Error> {
        let element = match self.resolve_base_type(decl.base_type)? {
            BaseType::Void if decl.dimensions == 0 => return Ok(ReturnType::Void),
            BaseType::Void => {
                return Err(Error::malformed_declaration(decl.text, "array of void"));
            }
            BaseType::Primitive(prim) => FieldType::Base(prim),
            BaseType::Class(class) => FieldType::Object(class),
        };
        let field_type = (0..decl.dimensions).fold(element, |acc, _| acc.into_array_type());
        Ok(ReturnType::Some(field_type))
    }

    fn resolve_field_type(
        &self,
        decl: &Declaration<'_>,
        void_reason: &'static str,
    ) -> Result<FieldType, Error> {
        match self.resolve_declaration(decl)? {
            ReturnType::Some(field_type) => Ok(field_type),
            ReturnType::Void => Err(Error::malformed_declaration(decl.text, void_reason)),
        }
    }

    fn resolve_base_type(&self, name: &str) -> Result<BaseType, Error> {
        if name == "void" {
            return Ok(BaseType::Void);
        }
        if let Ok(prim) = name.parse() {
            return Ok(BaseType::Primitive(prim));
        }
        self.resolve_class(name).map(BaseType::Class)
    }

    fn resolve_class(&self, name: &str) -> Result<ClassRef, Error> {
        let qualified = self.imports.iter().map(|prefix| {
            if prefix.ends_with('.') {
                format!("{prefix}{name}")
            } else {
                format!("{prefix}.{name}")
            }
        });
        let candidates = std::iter::once(name.to_owned()).chain(qualified);
        for candidate in candidates {
            let found = self.resolver.resolve_class(&candidate);
            trace!(%candidate, found = found.is_some(), "Looked up type name");
            if let Some(class) = found {
                return Ok(class);
            }
        }
        debug!(name, imports = ?self.imports, "Unknown type");
        Err(Error::UnknownType(name.to_owned()))
    }
}
