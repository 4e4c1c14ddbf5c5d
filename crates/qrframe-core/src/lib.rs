//! Core types, catalogs, and utilities for the qrframe export pipeline.
//!
//! This crate provides the foundational types used across all other qrframe crates:
//! - Value types (colors, color schemes, caption styles)
//! - The immutable scheme and caption-style catalogs
//! - Render requests and export formats
//! - The vector image exchanged with QR symbol providers
//! - Editor state with explicit UI transitions
//! - Configuration and error types

pub mod config;
pub mod errors;
pub mod request;
pub mod state;
pub mod types;
pub mod vector;

pub use config::*;
pub use errors::*;
pub use request::*;
pub use state::*;
pub use types::*;
pub use vector::*;
