//! CropCast domain library.
//!
//! The advisory decision engine lives in [`advisory`]: the outcome
//! interpreter turns a raw yield prediction into qualitative factors,
//! anomaly diagnostics, and recommendations, while the intent router answers
//! free-text farmer questions through an ordered keyword hierarchy with an
//! optional completion-service enhancement in front of it. [`prediction`]
//! holds the injected seam to the trained model and its preprocessor.

pub mod advisory;
pub mod config;
pub mod error;
pub mod prediction;
pub mod telemetry;
