//! Top-level facade crate for latscope.
//!
//! Re-exports the core statistics types and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use latscope_core::*;
}

pub mod gateway {
    pub use latscope_gateway::*;
}
