#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Translates Java-language declarations such as `int foo` or `String bar(int[] i)` into the
//! descriptors recorded in JVM metadata tables.
//!
//! ```
//! use jvm_translator::{jvm::class_loader::KnownClasses, translator::Translator};
//!
//! let classes = KnownClasses::new(["java/lang/String", "java/lang/Object"]);
//! let translator = Translator::new(classes);
//! let (name, descriptor) = translator.translate_method("String bar(int[] i)")?;
//! assert_eq!(name, "bar");
//! assert_eq!(descriptor, "([I)Ljava/lang/String;");
//! # Ok::<(), jvm_translator::translator::Error>(())
//! ```
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod jvm;
pub(crate) mod macros;
pub mod translator;
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
