//! The flat two-branch credential policy.
//!
//! Not a real credential-verification scheme: no hashing, no per-user
//! secrets. One designated super-administrator address with its own secret,
//! and one shared default secret for every other account. The policy sits
//! behind the [`CredentialVerifier`] port so it can be replaced without
//! touching the session store.

use quill_core::domain::User;
use quill_core::ports::CredentialVerifier;

/// Configuration for the static credential policy.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    pub super_admin_email: String,
    pub super_admin_password: String,
    pub shared_password: String,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            super_admin_email: "djoricnenad@gmail.com".to_string(),
            super_admin_password: "1Flasicradule!".to_string(),
            shared_password: "admin123".to_string(),
        }
    }
}

impl CredentialPolicy {
    /// Load the policy from environment variables, falling back to the
    /// built-in placeholder constants.
    pub fn from_env() -> Self {
        let policy = Self {
            super_admin_email: std::env::var("SUPER_ADMIN_EMAIL")
                .unwrap_or_else(|_| Self::default().super_admin_email),
            super_admin_password: std::env::var("SUPER_ADMIN_PASSWORD")
                .unwrap_or_else(|_| Self::default().super_admin_password),
            shared_password: std::env::var("SHARED_PASSWORD")
                .unwrap_or_else(|_| Self::default().shared_password),
        };

        if policy.has_placeholder_secrets() {
            tracing::warn!(
                "Using placeholder credential secrets. Set SUPER_ADMIN_PASSWORD and SHARED_PASSWORD for real deployments."
            );
        }

        policy
    }

    /// True when either secret still equals its built-in placeholder.
    pub fn has_placeholder_secrets(&self) -> bool {
        let defaults = Self::default();
        self.super_admin_password == defaults.super_admin_password
            || self.shared_password == defaults.shared_password
    }
}

/// [`CredentialVerifier`] implementation carrying exactly the two branches:
/// the designated super-admin address authenticates only with the designated
/// super-admin secret, everyone else only with the shared default secret.
pub struct StaticCredentialVerifier {
    policy: CredentialPolicy,
}

impl StaticCredentialVerifier {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, user: &User, password: &str) -> bool {
        if user.email == self.policy.super_admin_email {
            return password == self.policy.super_admin_password;
        }

        password == self.policy.shared_password
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::Role;

    use super::*;

    fn policy() -> CredentialPolicy {
        CredentialPolicy {
            super_admin_email: "root@example.com".to_string(),
            super_admin_password: "RootSecret!".to_string(),
            shared_password: "shared123".to_string(),
        }
    }

    #[test]
    fn super_admin_requires_the_designated_secret() {
        let verifier = StaticCredentialVerifier::new(policy());
        let admin = User::new("Root", "root@example.com", Role::SuperAdmin);

        assert!(verifier.verify(&admin, "RootSecret!"));
        assert!(!verifier.verify(&admin, "shared123"));
        assert!(!verifier.verify(&admin, "anything-else"));
    }

    #[test]
    fn other_users_take_the_shared_secret_only() {
        let verifier = StaticCredentialVerifier::new(policy());
        let editor = User::new("Ed", "ed@example.com", Role::Editor);

        assert!(verifier.verify(&editor, "shared123"));
        assert!(!verifier.verify(&editor, "RootSecret!"));
    }

    #[test]
    fn placeholder_secrets_are_flagged_until_both_are_replaced() {
        let mut policy = CredentialPolicy::default();
        assert!(policy.has_placeholder_secrets());

        // A custom address alone does not make the secrets real.
        policy.super_admin_email = "other@example.com".to_string();
        assert!(policy.has_placeholder_secrets());

        policy.super_admin_password = "RotatedRoot!".to_string();
        assert!(policy.has_placeholder_secrets());

        policy.shared_password = "rotated-shared".to_string();
        assert!(!policy.has_placeholder_secrets());
    }

    #[test]
    fn default_policy_carries_the_placeholder_constants() {
        let policy = CredentialPolicy::default();
        assert_eq!(policy.super_admin_email, "djoricnenad@gmail.com");
        assert_eq!(policy.shared_password, "admin123");
    }
}
