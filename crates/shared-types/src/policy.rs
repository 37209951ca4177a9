use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Auto,
    Home,
    Health,
    Life,
    Travel,
}

impl PolicyType {
    pub fn display_name(&self) -> &'static str {
        match self {
            PolicyType::Auto => "Auto Insurance",
            PolicyType::Home => "Home Insurance",
            PolicyType::Health => "Health Insurance",
            PolicyType::Life => "Life Insurance",
            PolicyType::Travel => "Travel Insurance",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Active,
    Pending,
    Expired,
    Cancelled,
}

impl PolicyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Pending => "pending",
            PolicyStatus::Expired => "expired",
            PolicyStatus::Cancelled => "cancelled",
        }
    }
}

/// A display-only insurance policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    pub id: String,
    pub policy_number: String,
    pub policy_type: PolicyType,
    pub status: PolicyStatus,
    /// Monthly premium in rupees.
    pub premium: f64,
    /// Pre-formatted coverage amount.
    pub coverage: String,
    pub start_date: String,
    pub end_date: String,
    pub next_payment: String,
    pub description: String,
}

/// Filter chips on the policies list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyFilter {
    #[default]
    All,
    Only(PolicyStatus),
}

pub const POLICY_FILTERS: &[PolicyFilter] = &[
    PolicyFilter::All,
    PolicyFilter::Only(PolicyStatus::Active),
    PolicyFilter::Only(PolicyStatus::Pending),
    PolicyFilter::Only(PolicyStatus::Expired),
];

impl PolicyFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PolicyFilter::All => "All Policies",
            PolicyFilter::Only(PolicyStatus::Active) => "Active",
            PolicyFilter::Only(PolicyStatus::Pending) => "Pending",
            PolicyFilter::Only(PolicyStatus::Expired) => "Expired",
            PolicyFilter::Only(PolicyStatus::Cancelled) => "Cancelled",
        }
    }

    pub fn apply<'a>(&self, policies: &'a [Policy]) -> Vec<&'a Policy> {
        policies
            .iter()
            .filter(|p| match self {
                PolicyFilter::All => true,
                PolicyFilter::Only(status) => p.status == *status,
            })
            .collect()
    }
}

/// Totals shown in the summary cards above the policies list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicySummary {
    pub active: usize,
    pub monthly_premium: f64,
    pub total: usize,
}

impl PolicySummary {
    /// Premium counts only active policies.
    pub fn of(policies: &[Policy]) -> Self {
        let active = policies.iter().filter(|p| p.status == PolicyStatus::Active);
        Self {
            active: active.clone().count(),
            monthly_premium: active.map(|p| p.premium).sum(),
            total: policies.len(),
        }
    }
}

pub const POLICY_NOT_FOUND_MESSAGE: &str = "Policy not found";

/// Look a policy up by its policy number (case-insensitive) or by id.
pub fn find_policy<'a>(policies: &'a [Policy], key: &str) -> Result<&'a Policy, AppError> {
    let key = key.trim();
    policies
        .iter()
        .find(|p| p.policy_number.eq_ignore_ascii_case(key) || p.id == key)
        .ok_or_else(|| AppError::not_found(POLICY_NOT_FOUND_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_policies;

    #[test]
    fn summary_counts_only_active_premiums() {
        let summary = PolicySummary::of(&sample_policies());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.monthly_premium, 9500.0 + 6800.0 + 16000.0);
    }

    #[test]
    fn find_by_number_ignores_case() {
        let policies = sample_policies();
        let found = find_policy(&policies, "pol-home-001").unwrap();
        assert_eq!(found.policy_type, PolicyType::Home);
        assert_eq!(find_policy(&policies, "4").unwrap().policy_number, "POL-LIFE-001");
        let missing = find_policy(&policies, "POL-BOAT-001").unwrap_err();
        assert_eq!(missing.kind, crate::error::AppErrorKind::NotFound);
        assert_eq!(missing.message, POLICY_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn pending_filter() {
        let policies = sample_policies();
        let pending = PolicyFilter::Only(PolicyStatus::Pending).apply(&policies);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].policy_type, PolicyType::Life);
        assert!(PolicyFilter::Only(PolicyStatus::Expired).apply(&policies).is_empty());
    }
}
