//! Fixed sample data rendered by the dashboards.

use serde::{Deserialize, Serialize};

use crate::claim::{ClaimPriority, ClaimRecord, ClaimStatus, ClaimType};
use crate::error::AppError;
use crate::models::Role;
use crate::policy::{Policy, PolicyStatus, PolicyType};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub total_users: u32,
    pub total_claims: u32,
    pub pending_claims: u32,
    pub approved_claims: u32,
    pub rejected_claims: u32,
    pub total_policies: u32,
    pub system_revenue: f64,
    pub monthly_growth: f64,
}

pub const ADMIN_STATS: AdminStats = AdminStats {
    total_users: 1247,
    total_claims: 2890,
    pending_claims: 127,
    approved_claims: 2456,
    rejected_claims: 307,
    total_policies: 5420,
    system_revenue: 18_500_000.0,
    monthly_growth: 12.5,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgentStats {
    pub assigned_claims: u32,
    pub completed_today: u32,
    pub pending_claims: u32,
    pub customers: u32,
    pub monthly_target: u32,
    pub performance: f64,
    pub commission: f64,
    pub rank: u32,
}

impl AgentStats {
    /// Share of the monthly target already assigned, capped at 100.
    pub fn target_progress_percent(&self) -> u32 {
        if self.monthly_target == 0 {
            return 0;
        }
        (self.assigned_claims * 100 / self.monthly_target).min(100)
    }
}

pub const AGENT_STATS: AgentStats = AgentStats {
    assigned_claims: 24,
    completed_today: 5,
    pending_claims: 19,
    customers: 156,
    monthly_target: 50,
    performance: 87.5,
    commission: 45_000.0,
    rank: 3,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CustomerStats {
    pub total_claims: u32,
    pub pending_claims: u32,
    pub approved_claims: u32,
    pub total_claim_amount: f64,
}

pub const CUSTOMER_STATS: CustomerStats = CustomerStats {
    total_claims: 3,
    pending_claims: 2,
    approved_claims: 1,
    total_claim_amount: 1_465_000.0,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ClaimReview,
    CustomerCall,
    DocumentReview,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentTask {
    pub id: u32,
    pub kind: TaskKind,
    pub title: String,
    pub customer: String,
    pub priority: ClaimPriority,
    pub due_time: String,
    pub estimated: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemAlert {
    pub id: u32,
    pub level: AlertLevel,
    pub message: String,
    pub time: String,
}

#[allow(clippy::too_many_arguments)]
fn claim(
    id: &str,
    claim_number: &str,
    claim_type: ClaimType,
    status: ClaimStatus,
    priority: ClaimPriority,
    amount: f64,
    description: &str,
    dates: (&str, &str),
    people: (&str, Option<&str>),
) -> ClaimRecord {
    ClaimRecord {
        id: id.to_string(),
        claim_number: claim_number.to_string(),
        claim_type,
        status,
        priority,
        amount,
        description: description.to_string(),
        incident_date: dates.0.to_string(),
        submitted_date: dates.1.to_string(),
        customer: people.0.to_string(),
        agent: people.1.map(str::to_string),
    }
}

/// The signed-in customer's claim history, shown on the claims list.
pub fn claims_history() -> Vec<ClaimRecord> {
    vec![
        claim(
            "1",
            "CLM-20241015-ABC12345",
            ClaimType::Auto,
            ClaimStatus::UnderReview,
            ClaimPriority::Medium,
            200_000.0,
            "Vehicle damage from rear-end collision",
            ("2024-10-10", "2024-10-12"),
            ("John Customer", Some("Sarah Johnson")),
        ),
        claim(
            "2",
            "CLM-20241014-DEF67890",
            ClaimType::Property,
            ClaimStatus::Approved,
            ClaimPriority::High,
            1_200_000.0,
            "Water damage from burst pipe",
            ("2024-10-08", "2024-10-09"),
            ("John Customer", Some("Mike Wilson")),
        ),
        claim(
            "3",
            "CLM-20241002-7F3B9C21",
            ClaimType::Health,
            ClaimStatus::Submitted,
            ClaimPriority::Low,
            65_000.0,
            "Emergency room visit",
            ("2024-09-30", "2024-10-02"),
            ("John Customer", None),
        ),
    ]
}

/// Claims on the customer home page.
pub fn customer_recent_claims() -> Vec<ClaimRecord> {
    vec![
        claim(
            "CLM-2024-001",
            "CLM-2024-001",
            ClaimType::Auto,
            ClaimStatus::Processing,
            ClaimPriority::Medium,
            200_000.0,
            "Rear-end collision on Highway 101",
            ("2024-01-15", "2024-01-15"),
            ("John Customer", None),
        ),
        claim(
            "CLM-2024-002",
            "CLM-2024-002",
            ClaimType::Property,
            ClaimStatus::Approved,
            ClaimPriority::Medium,
            1_200_000.0,
            "Water damage from burst pipe",
            ("2024-01-10", "2024-01-10"),
            ("John Customer", None),
        ),
        claim(
            "CLM-2024-003",
            "CLM-2024-003",
            ClaimType::Health,
            ClaimStatus::UnderReview,
            ClaimPriority::Medium,
            65_000.0,
            "Emergency room visit",
            ("2024-01-08", "2024-01-08"),
            ("John Customer", None),
        ),
    ]
}

/// System-wide recent claims on the admin dashboard.
pub fn admin_recent_claims() -> Vec<ClaimRecord> {
    vec![
        claim(
            "CLM-2024-001",
            "CLM-2024-001",
            ClaimType::Auto,
            ClaimStatus::Pending,
            ClaimPriority::High,
            125_000.0,
            "Collision damage",
            ("2024-01-15", "2024-01-15"),
            ("John Doe", Some("Sarah Johnson")),
        ),
        claim(
            "CLM-2024-002",
            "CLM-2024-002",
            ClaimType::Health,
            ClaimStatus::Approved,
            ClaimPriority::Medium,
            85_000.0,
            "Hospitalization",
            ("2024-01-14", "2024-01-14"),
            ("Jane Smith", Some("Mike Wilson")),
        ),
        claim(
            "CLM-2024-003",
            "CLM-2024-003",
            ClaimType::Property,
            ClaimStatus::UnderReview,
            ClaimPriority::Urgent,
            350_000.0,
            "Storm damage",
            ("2024-01-13", "2024-01-13"),
            ("Bob Johnson", Some("Lisa Chen")),
        ),
    ]
}

/// Claims assigned to the signed-in agent.
pub fn agent_recent_claims() -> Vec<ClaimRecord> {
    vec![
        claim(
            "CLM-2024-089",
            "CLM-2024-089",
            ClaimType::Auto,
            ClaimStatus::PendingReview,
            ClaimPriority::High,
            125_000.0,
            "Collision damage",
            ("2024-01-15", "2024-01-15"),
            ("Sarah Martinez", None),
        ),
        claim(
            "CLM-2024-087",
            "CLM-2024-087",
            ClaimType::Health,
            ClaimStatus::InProgress,
            ClaimPriority::Medium,
            85_000.0,
            "Outpatient treatment",
            ("2024-01-14", "2024-01-14"),
            ("John Smith", None),
        ),
        claim(
            "CLM-2024-085",
            "CLM-2024-085",
            ClaimType::Property,
            ClaimStatus::Completed,
            ClaimPriority::Low,
            350_000.0,
            "Fire damage",
            ("2024-01-13", "2024-01-13"),
            ("Lisa Johnson", None),
        ),
    ]
}

pub const CLAIM_NOT_FOUND_MESSAGE: &str = "Claim not found";

/// Every sample claim a role can open, in lookup order.
pub fn claims_visible_to(role: Role) -> Vec<ClaimRecord> {
    match role {
        Role::Admin => [admin_recent_claims(), claims_history()].concat(),
        Role::Agent => agent_recent_claims(),
        Role::Customer => [claims_history(), customer_recent_claims()].concat(),
    }
}

/// Look a claim up by id among the claims `role` can see.
pub fn find_claim(role: Role, id: &str) -> Result<ClaimRecord, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("Claim id is required"));
    }
    claims_visible_to(role)
        .into_iter()
        .find(|claim| claim.id == id)
        .ok_or_else(|| AppError::not_found(CLAIM_NOT_FOUND_MESSAGE))
}

pub fn agent_tasks() -> Vec<AgentTask> {
    let task = |id, kind, title: &str, customer: &str, priority, due: &str, est: &str| AgentTask {
        id,
        kind,
        title: title.to_string(),
        customer: customer.to_string(),
        priority,
        due_time: due.to_string(),
        estimated: est.to_string(),
    };
    vec![
        task(
            1,
            TaskKind::ClaimReview,
            "Review Auto Claim CLM-2024-089",
            "Sarah Martinez",
            ClaimPriority::High,
            "2:00 PM",
            "30 min",
        ),
        task(
            2,
            TaskKind::CustomerCall,
            "Follow up with John Smith",
            "John Smith",
            ClaimPriority::Medium,
            "3:30 PM",
            "15 min",
        ),
        task(
            3,
            TaskKind::DocumentReview,
            "Document verification - Health Claim",
            "Lisa Johnson",
            ClaimPriority::High,
            "4:00 PM",
            "45 min",
        ),
    ]
}

pub fn system_alerts() -> Vec<SystemAlert> {
    let alert = |id, level, message: &str, time: &str| SystemAlert {
        id,
        level,
        message: message.to_string(),
        time: time.to_string(),
    };
    vec![
        alert(1, AlertLevel::Warning, "High claim volume detected in Auto Insurance", "2 hours ago"),
        alert(2, AlertLevel::Info, "New agent training scheduled for next week", "4 hours ago"),
        alert(3, AlertLevel::Error, "Payment gateway maintenance required", "6 hours ago"),
    ]
}

pub fn sample_policies() -> Vec<Policy> {
    let policy = |id: &str,
                  number: &str,
                  policy_type,
                  status,
                  premium,
                  coverage: &str,
                  term: (&str, &str),
                  next_payment: &str,
                  description: &str| Policy {
        id: id.to_string(),
        policy_number: number.to_string(),
        policy_type,
        status,
        premium,
        coverage: coverage.to_string(),
        start_date: term.0.to_string(),
        end_date: term.1.to_string(),
        next_payment: next_payment.to_string(),
        description: description.to_string(),
    };
    vec![
        policy(
            "1",
            "POL-AUTO-001",
            PolicyType::Auto,
            PolicyStatus::Active,
            9500.0,
            "₹80,00,000",
            ("2024-01-01", "2024-12-31"),
            "2024-02-15",
            "Comprehensive auto insurance coverage",
        ),
        policy(
            "2",
            "POL-HOME-001",
            PolicyType::Home,
            PolicyStatus::Active,
            6800.0,
            "₹2,00,00,000",
            ("2024-01-01", "2024-12-31"),
            "2024-02-20",
            "Homeowner's insurance with full replacement cost",
        ),
        policy(
            "3",
            "POL-HEALTH-001",
            PolicyType::Health,
            PolicyStatus::Active,
            16000.0,
            "₹40,00,000",
            ("2024-01-01", "2024-12-31"),
            "2024-02-01",
            "Comprehensive health insurance plan",
        ),
        policy(
            "4",
            "POL-LIFE-001",
            PolicyType::Life,
            PolicyStatus::Pending,
            3600.0,
            "₹80,00,000",
            ("2024-02-01", "2025-01-31"),
            "2024-02-01",
            "Term life insurance policy",
        ),
    ]
}
