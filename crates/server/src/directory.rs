//! The fixed set of demo accounts accepted at sign-in.

use shared_types::{DemoAccount, DEMO_ACCOUNTS};

pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid email or password. Try using one of the demo accounts.";

/// Find a demo account by email. Comparison ignores case and surrounding whitespace.
pub fn find_account(email: &str) -> Option<&'static DemoAccount> {
    let email = email.trim();
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email.eq_ignore_ascii_case(email))
}

/// Check credentials against the directory. Passwords are compared exactly.
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoAccount> {
    find_account(email).filter(|account| account.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    #[test]
    fn email_lookup_ignores_case_and_padding() {
        let account = find_account("  Agent@Insurance.COM ").unwrap();
        assert_eq!(account.role, Role::Agent);
    }

    #[test]
    fn password_must_match_exactly() {
        assert!(authenticate("admin@insurance.com", "admin123").is_some());
        assert!(authenticate("admin@insurance.com", "Admin123").is_none());
        assert!(authenticate("admin@insurance.com", "admin123 ").is_none());
    }

    #[test]
    fn unknown_email_is_rejected() {
        assert!(authenticate("intruder@insurance.com", "admin123").is_none());
    }
}
