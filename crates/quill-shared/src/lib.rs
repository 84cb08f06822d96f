//! # Quill Shared
//!
//! DTOs and standardized response types shared between the HTTP surface and
//! any future frontend crate.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
