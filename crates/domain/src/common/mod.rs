//! Common utility functions shared across the GCMS crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod serde_helpers;
pub mod string;

pub use serde_helpers::{double_option, finite_f64};
pub use string::email_local_part;
