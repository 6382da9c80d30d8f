// Adapters layer: concrete implementations for external systems (http, files, console).

pub mod console;
pub mod file;
pub mod http;
