//! Module containing the APIs for the JVM elements.

pub mod class_loader;
pub mod references;
