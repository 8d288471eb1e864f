//! Welcome to stockview!

#[cfg(feature = "data")]
/// Market data module
pub mod data;

/// Tracing setup shared by services
pub mod logger;
