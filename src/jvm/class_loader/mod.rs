//! Resolving type names to classes.

use std::ops::Deref;

use tracing::trace;

use super::references::ClassRef;

pub mod class_paths;

#[cfg(feature = "jar")]
#[cfg_attr(docsrs, doc(cfg(feature = "jar")))]
pub use class_paths::JarClassPath;
pub use class_paths::{DirectoryClassPath, KnownClasses, NopClassPath};

/// Something that knows which classes exist.
///
/// Implementations only perform lookups, so they are expected to be safe to query from several
/// threads at once when they are [`Sync`].
pub trait ClassResolver {
    /// Looks up a class by its name as written in Java source, e.g., `java.lang.String` or
    /// `java.util.Map$Entry`.
    ///
    /// Returns the canonical reference to the class, or [`None`] if no class has exactly that
    /// name. The binary name in the returned reference is used verbatim in descriptors.
    fn resolve_class(&self, name: &str) -> Option<ClassRef>;
}

impl<T> ClassResolver for T
where
    T: Deref,
    <T as Deref>::Target: ClassResolver,
{
    fn resolve_class(&self, name: &str) -> Option<ClassRef> {
        self.deref().resolve_class(name)
    }
}

/// An ordered list of class paths. The first class path that knows a class wins.
#[derive(Debug)]
pub struct ClassPathChain<P> {
    class_path: Vec<P>,
}

impl<P> ClassPathChain<P> {
    /// Creates a chain searching the given class paths in order.
    #[must_use]
    pub fn new(class_path: impl Into<Vec<P>>) -> Self {
        let class_path = class_path.into();
        Self { class_path }
    }
}

impl<P: ClassResolver> ClassResolver for ClassPathChain<P> {
    fn resolve_class(&self, name: &str) -> Option<ClassRef> {
        self.class_path.iter().enumerate().find_map(|(idx, cp)| {
            let found = cp.resolve_class(name);
            trace!(name, class_path = idx, found = found.is_some(), "Searched class path");
            found
        })
    }
}

/// Splits a source-form class name into its package and class segments.
/// Returns [`None`] if the name cannot denote a class, e.g., it is empty, has empty segments,
/// or contains path separators.
pub(crate) fn name_segments(name: &str) -> Option<Vec<&str>> {
    if name.contains(['/', '\\']) {
        return None;
    }
    let segments: Vec<_> = name.split('.').collect();
    segments
        .iter()
        .all(|it| !it.is_empty())
        .then_some(segments)
}
