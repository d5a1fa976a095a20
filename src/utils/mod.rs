//! Utility functions shared across layers.
//!
//! - [`timestamp`] - Parsing of check-in/check-out values from request bodies

pub mod timestamp;
