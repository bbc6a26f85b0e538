//! Trait seams between subsystems.

pub mod metadata_source;

pub use metadata_source::MetadataSource;
