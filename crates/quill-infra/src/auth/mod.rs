//! Credential verification implementations.

mod policy;

pub use policy::{CredentialPolicy, StaticCredentialVerifier};
