use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[cfg(feature = "validation")]
use validator::Validate;

/// Role of a signed-in user.
///
/// - `Admin`: system overview, every claim and alert.
/// - `Agent`: assigned claims, daily tasks and targets.
/// - `Customer`: own claims and policies. Also the fallback for unknown values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Agent,
    #[default]
    Customer,
}

/// Every role in the order the registration form lists them.
pub const ALL_ROLES: &[Role] = &[Role::Customer, Role::Agent, Role::Admin];

impl Role {
    /// Parse a role string. Only the exact keys `"admin"` and `"agent"` are
    /// recognized, anything else is `Customer`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "agent" => Role::Agent,
            _ => Role::Customer,
        }
    }

    /// Lowercase key used in storage and session payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Customer => "customer",
        }
    }

    /// Account type label shown in forms.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Agent => "Insurance Agent",
            Role::Customer => "Customer",
        }
    }
}

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "Please sign in to continue";
pub const ACCESS_DENIED_MESSAGE: &str = "You don't have permission to view this page.";

/// Let the caller through when their role is one of `allowed`.
pub fn require_role(role: Option<Role>, allowed: &[Role]) -> Result<Role, AppError> {
    match role {
        None => Err(AppError::unauthorized(SIGN_IN_REQUIRED_MESSAGE)),
        Some(role) if allowed.contains(&role) => Ok(role),
        Some(_) => Err(AppError::forbidden(ACCESS_DENIED_MESSAGE)),
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_str_or_default(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in identity reported by the session service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// First letter of the display name, upper-cased, for avatar bubbles.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A fixed account accepted by the demo session service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
}

impl DemoAccount {
    /// Session identity for this account.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: format!("demo-{}", self.role.as_str()),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
        }
    }
}

/// Demo accounts listed on the login page.
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@insurance.com",
        password: "admin123",
        role: Role::Admin,
        name: "Admin User",
    },
    DemoAccount {
        email: "agent@insurance.com",
        password: "agent123",
        role: Role::Agent,
        name: "Insurance Agent",
    },
    DemoAccount {
        email: "customer@insurance.com",
        password: "customer123",
        role: Role::Customer,
        name: "John Customer",
    },
    DemoAccount {
        email: "demo@test.com",
        password: "demo123",
        role: Role::Customer,
        name: "Demo User",
    },
];

/// A locally registered account, as persisted under the `registeredUsers` storage key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub created_at: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn require_role_separates_anonymous_from_forbidden() {
        assert_eq!(require_role(Some(Role::Admin), &[Role::Admin]).unwrap(), Role::Admin);
        let anonymous = require_role(None, &[Role::Admin]).unwrap_err();
        assert_eq!(anonymous.kind, AppErrorKind::Unauthorized);
        let customer = require_role(Some(Role::Customer), &[Role::Admin, Role::Agent]).unwrap_err();
        assert_eq!(customer.kind, AppErrorKind::Forbidden);
        assert_eq!(customer.message, ACCESS_DENIED_MESSAGE);
    }

    #[test]
    fn unknown_role_defaults_to_customer() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Customer);
        assert_eq!(Role::from_str_or_default(""), Role::Customer);
        assert_eq!(Role::from_str_or_default("agent"), Role::Agent);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
    }

    #[test]
    fn role_keys_are_case_and_whitespace_sensitive() {
        for name in ["Admin", "ADMIN", " admin ", "Agent", "agent "] {
            assert_eq!(Role::from_str_or_default(name), Role::Customer, "{name:?}");
        }
    }

    #[test]
    fn role_serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), r#""agent""#);
        let parsed: Role = serde_json::from_str(r#""manager""#).unwrap();
        assert_eq!(parsed, Role::Customer);
    }

    #[test]
    fn registered_user_uses_camel_case_keys() {
        let user = RegisteredUser {
            id: "1718000000000".to_string(),
            full_name: "Priya Nair".to_string(),
            email: "priya@example.com".to_string(),
            role: Role::Agent,
            phone: String::new(),
            address: String::new(),
            created_at: "2024-06-10T06:13:20.000Z".to_string(),
            is_active: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fullName"], "Priya Nair");
        assert_eq!(json["createdAt"], "2024-06-10T06:13:20.000Z");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["role"], "agent");
    }

    #[test]
    fn registered_user_tolerates_missing_optional_fields() {
        let json = r#"{"id":"1","fullName":"A","email":"a@b.co","role":"customer","createdAt":"x"}"#;
        let user: RegisteredUser = serde_json::from_str(json).unwrap();
        assert!(user.is_active);
        assert!(user.phone.is_empty());
    }

    #[test]
    fn demo_accounts_cover_every_role() {
        for role in ALL_ROLES {
            assert!(DEMO_ACCOUNTS.iter().any(|a| a.role == *role));
        }
    }

    #[test]
    fn session_user_initial() {
        let user = DEMO_ACCOUNTS[1].to_session_user();
        assert_eq!(user.initial(), "I");
        assert_eq!(user.id, "demo-agent");
    }
}
