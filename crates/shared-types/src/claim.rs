#[cfg(feature = "validation")]
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::{Validate, ValidateArgs, ValidationError};

#[cfg(feature = "validation")]
use crate::error::AppError;

/// Line of insurance a claim is filed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    #[default]
    Auto,
    Health,
    Property,
    Life,
}

pub const ALL_CLAIM_TYPES: &[ClaimType] = &[
    ClaimType::Auto,
    ClaimType::Health,
    ClaimType::Property,
    ClaimType::Life,
];

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Auto => "auto",
            ClaimType::Health => "health",
            ClaimType::Property => "property",
            ClaimType::Life => "life",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "health" => ClaimType::Health,
            "property" => ClaimType::Property,
            "life" => ClaimType::Life,
            _ => ClaimType::Auto,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClaimType::Auto => "Auto Insurance",
            ClaimType::Health => "Health Insurance",
            ClaimType::Property => "Property Insurance",
            ClaimType::Life => "Life Insurance",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

pub const ALL_PRIORITIES: &[ClaimPriority] = &[
    ClaimPriority::Low,
    ClaimPriority::Medium,
    ClaimPriority::High,
    ClaimPriority::Urgent,
];

impl ClaimPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimPriority::Low => "low",
            ClaimPriority::Medium => "medium",
            ClaimPriority::High => "high",
            ClaimPriority::Urgent => "urgent",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "low" => ClaimPriority::Low,
            "high" => ClaimPriority::High,
            "urgent" => ClaimPriority::Urgent,
            _ => ClaimPriority::Medium,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClaimPriority::Low => "Low",
            ClaimPriority::Medium => "Medium",
            ClaimPriority::High => "High",
            ClaimPriority::Urgent => "Urgent",
        }
    }
}

/// Processing state of a claim as shown in lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Submitted,
    Pending,
    PendingReview,
    UnderReview,
    InProgress,
    Processing,
    Approved,
    Completed,
    Rejected,
    Settled,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Pending => "pending",
            ClaimStatus::PendingReview => "pending_review",
            ClaimStatus::UnderReview => "under_review",
            ClaimStatus::InProgress => "in_progress",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Completed => "completed",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Settled => "settled",
        }
    }

    /// Whether the claim still awaits a decision.
    pub fn is_open(&self) -> bool {
        !matches!(
            self,
            ClaimStatus::Approved | ClaimStatus::Completed | ClaimStatus::Rejected | ClaimStatus::Settled
        )
    }
}

/// A display-only claim row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimRecord {
    pub id: String,
    pub claim_number: String,
    pub claim_type: ClaimType,
    pub status: ClaimStatus,
    pub priority: ClaimPriority,
    pub amount: f64,
    pub description: String,
    pub incident_date: String,
    pub submitted_date: String,
    pub customer: String,
    pub agent: Option<String>,
}

/// Filter chips on the claims list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimFilter {
    #[default]
    All,
    Only(ClaimStatus),
}

pub const CLAIM_FILTERS: &[ClaimFilter] = &[
    ClaimFilter::All,
    ClaimFilter::Only(ClaimStatus::Submitted),
    ClaimFilter::Only(ClaimStatus::UnderReview),
    ClaimFilter::Only(ClaimStatus::Approved),
    ClaimFilter::Only(ClaimStatus::Rejected),
];

impl ClaimFilter {
    pub fn matches(&self, claim: &ClaimRecord) -> bool {
        match self {
            ClaimFilter::All => true,
            ClaimFilter::Only(status) => claim.status == *status,
        }
    }

    pub fn apply<'a>(&self, claims: &'a [ClaimRecord]) -> Vec<&'a ClaimRecord> {
        claims.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Raw new-claim form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClaimForm {
    pub claim_type: ClaimType,
    pub priority: ClaimPriority,
    pub incident_date: String,
    pub amount: String,
    pub description: String,
}

/// A validated claim ready for submission.
///
/// Rules that depend on the current date take `today` as context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(feature = "validation", validate(context = NaiveDate))]
pub struct NewClaimRequest {
    pub claim_type: ClaimType,
    pub priority: ClaimPriority,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_in_future", use_context))
    )]
    pub incident_date: NaiveDate,
    #[cfg_attr(
        feature = "validation",
        validate(range(exclusive_min = 0.0, message = "Amount must be greater than zero"))
    )]
    pub amount: f64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, message = "Description must be at least 10 characters"))
    )]
    pub description: String,
}

#[cfg(feature = "validation")]
fn not_in_future(date: &NaiveDate, today: &NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        return Err(ValidationError::new("future_date")
            .with_message("Incident date cannot be in the future".into()));
    }
    Ok(())
}

#[cfg(feature = "validation")]
const CLAIM_FIELD_ORDER: &[&str] = &["incident_date", "amount", "description"];

impl NewClaimForm {
    /// Validate the form against `today`. The first failing field wins.
    ///
    /// Text that does not parse is reported before any rule on the parsed
    /// request runs for that field.
    #[cfg(feature = "validation")]
    pub fn check(&self, today: NaiveDate) -> Result<NewClaimRequest, AppError> {
        let mut field_errors = HashMap::new();

        let raw_date = self.incident_date.trim();
        let incident_date = if raw_date.is_empty() {
            field_errors.insert("incident_date".to_string(), "Incident date is required".to_string());
            None
        } else {
            let parsed = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok();
            if parsed.is_none() {
                field_errors.insert(
                    "incident_date".to_string(),
                    "Please enter a valid incident date".to_string(),
                );
            }
            parsed
        };

        let amount = self
            .amount
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite());
        if amount.is_none() {
            field_errors.insert("amount".to_string(), "Please enter a valid claim amount".to_string());
        }

        let request = NewClaimRequest {
            claim_type: self.claim_type,
            priority: self.priority,
            incident_date: incident_date.unwrap_or(today),
            amount: amount.unwrap_or(1.0),
            description: self.description.trim().to_string(),
        };
        if let Err(errors) = request.validate_with_args(&today) {
            for (field, message) in AppError::from(errors).field_errors {
                field_errors.entry(field).or_insert(message);
            }
        }

        match AppError::first_field_error(field_errors, CLAIM_FIELD_ORDER) {
            Some(err) => Err(err),
            None => Ok(request),
        }
    }
}

/// Acknowledgement returned after a (simulated) claim submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimReceipt {
    pub claim_number: String,
    pub submitted_at: DateTime<Utc>,
}

/// Build a claim number of the form `CLM-YYYYMMDD-XXXXXXXX`.
pub fn generate_claim_number(at: DateTime<Utc>, id: Uuid) -> String {
    let suffix: String = id.simple().to_string().chars().take(8).collect();
    format!("CLM-{}-{}", at.format("%Y%m%d"), suffix.to_uppercase())
}

impl ClaimReceipt {
    pub fn issue(at: DateTime<Utc>, id: Uuid) -> Self {
        Self {
            claim_number: generate_claim_number(at, id),
            submitted_at: at,
        }
    }
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
    }

    fn filled_form() -> NewClaimForm {
        NewClaimForm {
            claim_type: ClaimType::Property,
            priority: ClaimPriority::High,
            incident_date: "2024-10-10".to_string(),
            amount: "1,20,000".to_string(),
            description: "Water damage from burst pipe".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_request() {
        let req = filled_form().check(today()).unwrap();
        assert_eq!(req.amount, 120000.0);
        assert_eq!(req.claim_type, ClaimType::Property);
        assert_eq!(req.incident_date, NaiveDate::from_ymd_opt(2024, 10, 10).unwrap());
    }

    #[test]
    fn missing_date_is_reported_first() {
        let form = NewClaimForm {
            incident_date: String::new(),
            amount: String::new(),
            ..filled_form()
        };
        let err = form.check(today()).unwrap_err();
        assert_eq!(err.message, "Incident date is required");
        assert_eq!(err.field_errors.len(), 1);
    }

    #[test]
    fn unparsable_date_is_reported_before_amount() {
        let form = NewClaimForm {
            incident_date: "10/10/2024".to_string(),
            amount: "0".to_string(),
            ..filled_form()
        };
        let err = form.check(today()).unwrap_err();
        assert_eq!(err.message, "Please enter a valid incident date");
    }

    #[test]
    fn request_rules_use_the_given_day() {
        let request = filled_form().check(today()).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2024, 10, 9).unwrap();
        let err = AppError::from(request.validate_with_args(&day_before).unwrap_err());
        assert_eq!(err.field_errors["incident_date"], "Incident date cannot be in the future");
    }

    #[test]
    fn future_incident_date_is_rejected() {
        let form = NewClaimForm {
            incident_date: "2024-10-16".to_string(),
            ..filled_form()
        };
        let err = form.check(today()).unwrap_err();
        assert_eq!(err.message, "Incident date cannot be in the future");
    }

    #[test]
    fn non_positive_or_garbage_amounts_are_rejected() {
        for amount in ["0", "-5", "abc", "", "NaN"] {
            let form = NewClaimForm {
                amount: amount.to_string(),
                ..filled_form()
            };
            let err = form.check(today()).unwrap_err();
            assert!(err.field_errors.contains_key("amount"), "amount {amount:?}");
            let expected = if matches!(amount, "0" | "-5") {
                "Amount must be greater than zero"
            } else {
                "Please enter a valid claim amount"
            };
            assert_eq!(err.message, expected, "amount {amount:?}");
        }
    }

    #[test]
    fn short_description_is_rejected() {
        let form = NewClaimForm {
            description: "  dent  ".to_string(),
            ..filled_form()
        };
        let err = form.check(today()).unwrap_err();
        assert_eq!(err.message, "Description must be at least 10 characters");
    }

    #[test]
    fn claim_number_format() {
        let at = Utc.with_ymd_and_hms(2024, 10, 15, 9, 30, 0).unwrap();
        let id = Uuid::parse_str("abc12345-0000-4000-8000-000000000000").unwrap();
        assert_eq!(generate_claim_number(at, id), "CLM-20241015-ABC12345");
    }

    #[test]
    fn filter_matches_only_selected_status() {
        let claims = crate::samples::claims_history();
        let approved = ClaimFilter::Only(ClaimStatus::Approved).apply(&claims);
        assert!(!approved.is_empty());
        assert!(approved.iter().all(|c| c.status == ClaimStatus::Approved));
        assert_eq!(ClaimFilter::All.apply(&claims).len(), claims.len());
    }

    #[test]
    fn closed_statuses_are_not_open() {
        assert!(ClaimStatus::UnderReview.is_open());
        assert!(!ClaimStatus::Settled.is_open());
    }
}
