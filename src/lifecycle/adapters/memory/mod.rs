//! In-process adapter implementations.

pub mod extension_registry;

pub use extension_registry::StaticExtensionRegistry;
