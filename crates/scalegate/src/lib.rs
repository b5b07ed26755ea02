//! Top-level facade crate for scalegate.
//!
//! Re-exports core types and the broker library so users can depend on a single crate.

pub mod core {
    pub use scalegate_core::*;
}

pub mod broker {
    pub use scalegate_broker::*;
}
