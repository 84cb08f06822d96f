use crate::domain::User;

/// Credential verification, isolated behind one interface so the placeholder
/// static-secret policy can be swapped for a real hashing scheme without
/// touching the session store.
pub trait CredentialVerifier: Send + Sync {
    /// Check a supplied secret against the policy for this user.
    fn verify(&self, user: &User, password: &str) -> bool;
}
