//! World model: bodies, world-level attribute text, uniform geometric scaling.
//!
//! # Invariants
//! - Bodies are index-addressed; removing index `i` shifts every index above
//!   `i` down by one and leaves indices below `i` untouched.
//! - Attribute text is an opaque string cell; the model never interprets it.

pub mod world;

pub use world::{Body, World};
