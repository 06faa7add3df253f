//! Module containing the APIs for the JVM type system.
pub mod field_type;
pub mod method_descriptor;

/// Trait for types that have a descriptor.
pub trait Descriptor {
    /// Returns the descriptor of the type.
    fn descriptor(&self) -> String;

    /// Returns the descriptor encoded in the modified UTF-8 used by the constant pool of a class
    /// file.
    fn modified_utf8(&self) -> Vec<u8> {
        cesu8::to_java_cesu8(&self.descriptor()).into_owned()
    }
}
