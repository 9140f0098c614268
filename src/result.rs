//! Error handling and result types for herald.
//!
//! This module provides a unified error handling approach using the
//! `color-eyre` crate, which offers enhanced error reporting with context,
//! suggestions, and colored output.
//!
//! All fallible functions in herald should return the `Result<T>` type
//! defined in this module, ensuring consistent error handling and reporting
//! across the application.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout herald.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`, providing
/// enhanced error reporting including colorized output and chain-able
/// error contexts using `.wrap_err()`.
pub type Result<T> = EyreResult<T>;
