pub mod emitter;
pub mod enumeration;
pub mod error;
pub mod format;
pub mod resolver;
pub mod types;
