//! CliniRisk: HTTP risk-prediction services.
//!
//! Three single-endpoint services share this pipeline: a request schema
//! gates entry, a fixed-order feature encoder feeds a startup-selected
//! classifier, and the thresholded probability becomes a JSON verdict.
//! When the model artifact cannot be loaded, a constant stand-in keeps the
//! service reachable.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod inference;
pub mod model;
pub mod server;

pub use error::{AppError, Result};
