//! Request-pipeline concerns: error-to-response mapping.

pub mod error;
