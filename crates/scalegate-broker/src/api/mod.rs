//! HTTP API surface (service bindings).

pub mod bindings;
