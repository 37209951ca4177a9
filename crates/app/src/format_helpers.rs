//! Shared formatting utilities for the UI layer.
//!
//! Dates are ISO-8601 strings (e.g. "2024-01-15" or "2024-01-15T10:30:00Z");
//! amounts are rupees.

use shared_types::{
    AlertLevel, ClaimFilter, ClaimPriority, ClaimStatus, NextAction, PolicyStatus, RiskLevel,
};
use shared_ui::BadgeTone;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 15, 2024".
///
/// Falls back to the input when it is not a date.
pub fn format_date_human(date_str: &str) -> String {
    let Some(date) = date_str.get(..10).filter(|d| d.is_ascii()) else {
        return date_str.to_string();
    };
    let (year, month, day) = (&date[..4], &date[5..7], &date[8..10]);

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date.to_string(),
    }
}

/// Convert a snake_case string to Title Case (e.g. "under_review" → "Under Review").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group an integer with commas every three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a rupee amount as "₹45,000". Fractions are rounded away.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_thousands(amount.abs().round() as u64))
}

/// Rupees in lakhs, one decimal: 1,250,000 → "₹12.5L".
pub fn format_inr_lakhs(amount: f64) -> String {
    format!("₹{:.1}L", amount / 100_000.0)
}

/// Rupees in millions, one decimal: 18,500,000 → "₹18.5M".
pub fn format_inr_millions(amount: f64) -> String {
    format!("₹{:.1}M", amount / 1_000_000.0)
}

/// Rupees in thousands, no decimals: 45,000 → "₹45K".
pub fn format_inr_thousands(amount: f64) -> String {
    format!("₹{:.0}K", amount / 1_000.0)
}

/// Plain count with thousands separators.
pub fn format_count(n: u32) -> String {
    group_thousands(u64::from(n))
}

pub fn status_label(status: ClaimStatus) -> String {
    format_snake_case_title(status.as_str())
}

pub fn status_tone(status: ClaimStatus) -> BadgeTone {
    match status {
        ClaimStatus::Approved | ClaimStatus::Completed | ClaimStatus::Settled => BadgeTone::Success,
        ClaimStatus::Rejected => BadgeTone::Danger,
        ClaimStatus::Processing | ClaimStatus::Pending | ClaimStatus::PendingReview => {
            BadgeTone::Warning
        }
        ClaimStatus::UnderReview | ClaimStatus::InProgress => BadgeTone::Info,
        ClaimStatus::Submitted => BadgeTone::Neutral,
    }
}

pub fn priority_tone(priority: ClaimPriority) -> BadgeTone {
    match priority {
        ClaimPriority::Urgent => BadgeTone::Danger,
        ClaimPriority::High => BadgeTone::Warning,
        ClaimPriority::Medium => BadgeTone::Info,
        ClaimPriority::Low => BadgeTone::Neutral,
    }
}

pub fn next_action_tone(action: NextAction) -> BadgeTone {
    match action {
        NextAction::AutoApprove => BadgeTone::Success,
        NextAction::StandardReview => BadgeTone::Info,
        NextAction::ManualReview => BadgeTone::Warning,
        NextAction::Investigate => BadgeTone::Danger,
    }
}

pub fn risk_tone(level: RiskLevel) -> BadgeTone {
    match level {
        RiskLevel::Low => BadgeTone::Success,
        RiskLevel::Medium => BadgeTone::Warning,
        RiskLevel::High => BadgeTone::Danger,
    }
}

/// `0.876` → `"88%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

pub fn policy_status_tone(status: PolicyStatus) -> BadgeTone {
    match status {
        PolicyStatus::Active => BadgeTone::Success,
        PolicyStatus::Pending => BadgeTone::Warning,
        PolicyStatus::Expired | PolicyStatus::Cancelled => BadgeTone::Danger,
    }
}

pub fn alert_tone(level: AlertLevel) -> BadgeTone {
    match level {
        AlertLevel::Info => BadgeTone::Info,
        AlertLevel::Warning => BadgeTone::Warning,
        AlertLevel::Error => BadgeTone::Danger,
    }
}

pub fn alert_label(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "Info",
        AlertLevel::Warning => "Warning",
        AlertLevel::Error => "Error",
    }
}

/// Chip label for a claims-list filter.
pub fn claim_filter_label(filter: ClaimFilter) -> String {
    match filter {
        ClaimFilter::All => "All Claims".to_string(),
        ClaimFilter::Only(status) => status_label(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(format_percent(0.3), "30%");
        assert_eq!(format_percent(shared_types::ANALYSIS_CONFIDENCE), "88%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn investigations_are_flagged_red() {
        assert_eq!(next_action_tone(NextAction::Investigate), BadgeTone::Danger);
        assert_eq!(risk_tone(RiskLevel::Low), BadgeTone::Success);
    }

    #[test]
    fn dates_render_month_names() {
        assert_eq!(format_date_human("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date_human("2024-12-05T10:30:00Z"), "Dec 5, 2024");
    }

    #[test]
    fn malformed_dates_fall_back() {
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2024-13-01"), "2024-13-01");
    }

    #[test]
    fn snake_case_titles() {
        assert_eq!(format_snake_case_title("under_review"), "Under Review");
        assert_eq!(format_snake_case_title("approved"), "Approved");
        assert_eq!(format_snake_case_title(""), "");
    }

    #[test]
    fn rupee_amounts_are_grouped() {
        assert_eq!(format_inr(45000.0), "₹45,000");
        assert_eq!(format_inr(1_465_000.0), "₹1,465,000");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(-1200.4), "-₹1,200");
    }

    #[test]
    fn compact_rupee_amounts() {
        assert_eq!(format_inr_lakhs(1_250_000.0), "₹12.5L");
        assert_eq!(format_inr_millions(18_500_000.0), "₹18.5M");
        assert_eq!(format_inr_thousands(45_000.0), "₹45K");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(2890), "2,890");
        assert_eq!(format_count(127), "127");
    }

    #[test]
    fn filter_labels() {
        assert_eq!(claim_filter_label(ClaimFilter::All), "All Claims");
        assert_eq!(
            claim_filter_label(ClaimFilter::Only(ClaimStatus::UnderReview)),
            "Under Review"
        );
    }

    #[test]
    fn settled_outcomes_share_a_tone() {
        assert_eq!(status_tone(ClaimStatus::Approved), status_tone(ClaimStatus::Settled));
        assert_ne!(status_tone(ClaimStatus::Approved), status_tone(ClaimStatus::Rejected));
    }
}
