use serde::{Deserialize, Serialize};

use crate::claim::{ClaimPriority, ClaimRecord, ClaimType, NewClaimRequest};

// Scores are kept in whole percentage points so thresholds compare exactly.
const BASE_RISK_POINTS: u32 = 30;
const BASE_FRAUD_POINTS: u32 = 10;

/// Confidence reported for the rule-based analysis: the mean of the
/// classification, fraud and rule confidences.
pub const ANALYSIS_CONFIDENCE: f64 = (0.85 + 0.88 + 0.9) / 3.0;

/// The claim details the analysis rules look at.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimFacts {
    pub claim_type: ClaimType,
    pub amount: f64,
    pub description: String,
}

impl From<&ClaimRecord> for ClaimFacts {
    fn from(claim: &ClaimRecord) -> Self {
        Self {
            claim_type: claim.claim_type,
            amount: claim.amount,
            description: claim.description.clone(),
        }
    }
}

impl From<&NewClaimRequest> for ClaimFacts {
    fn from(request: &NewClaimRequest) -> Self {
        Self {
            claim_type: request.claim_type,
            amount: request.amount,
            description: request.description.clone(),
        }
    }
}

impl ClaimFacts {
    fn mentions(&self, phrase: &str) -> bool {
        self.description.to_lowercase().contains(phrase)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    fn from_points(points: u32) -> Self {
        match points {
            0..=29 => Self::Low,
            30..=69 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Outcome suggested by the fraud screen alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FraudRecommendation {
    Approve,
    Investigate,
    Reject,
}

impl FraudRecommendation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Investigate => "Investigate",
            Self::Reject => "Reject",
        }
    }
}

/// What the claim handling workflow should do next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    Investigate,
    ManualReview,
    AutoApprove,
    StandardReview,
}

impl NextAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investigate => "investigate",
            Self::ManualReview => "manual_review",
            Self::AutoApprove => "auto_approve",
            Self::StandardReview => "standard_review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Investigate => "Investigate",
            Self::ManualReview => "Manual review",
            Self::AutoApprove => "Auto-approve",
            Self::StandardReview => "Standard review",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub score: f64,
    pub level: RiskLevel,
    pub factors: Vec<String>,
    pub approval_probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FraudCheck {
    pub probability: f64,
    pub indicators: Vec<String>,
    pub investigation_required: bool,
    pub recommendation: FraudRecommendation,
}

/// Rule-based screening of a claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimAnalysis {
    pub processing_priority: ClaimPriority,
    pub required_documents: Vec<String>,
    pub risk: RiskAssessment,
    pub fraud: FraudCheck,
    pub recommendations: Vec<String>,
    pub confidence: f64,
    pub next_action: NextAction,
}

/// Processing priority: life claims and anything over 100,000 are high.
pub fn processing_priority(facts: &ClaimFacts) -> ClaimPriority {
    if facts.amount > 100_000.0 || facts.claim_type == ClaimType::Life {
        ClaimPriority::High
    } else if facts.amount > 25_000.0 {
        ClaimPriority::Medium
    } else {
        ClaimPriority::Low
    }
}

pub fn required_documents(claim_type: ClaimType) -> &'static [&'static str] {
    match claim_type {
        ClaimType::Auto => &["Police report", "Vehicle photos", "Repair estimates"],
        ClaimType::Health => &["Medical records", "Bills", "Doctor's statement"],
        ClaimType::Property => &["Photos", "Repair estimates", "Police report (if applicable)"],
        ClaimType::Life => &["Death certificate", "Policy documents", "Beneficiary forms"],
    }
}

fn risk_points(facts: &ClaimFacts) -> (u32, Vec<String>) {
    let mut points = BASE_RISK_POINTS;
    let mut factors = Vec::new();
    if facts.amount > 50_000.0 {
        points += 20;
        factors.push("High claim amount".to_string());
    }
    if facts.claim_type == ClaimType::Auto && facts.mentions("accident") {
        points += 10;
        factors.push("Vehicle accident claim".to_string());
    }
    (points.min(100), factors)
}

pub fn assess_risk(facts: &ClaimFacts) -> RiskAssessment {
    let (points, factors) = risk_points(facts);
    RiskAssessment {
        score: f64::from(points) / 100.0,
        level: RiskLevel::from_points(points),
        factors,
        approval_probability: f64::from(100 - points) / 100.0,
    }
}

fn fraud_points(facts: &ClaimFacts) -> (u32, Vec<String>) {
    let mut points = BASE_FRAUD_POINTS;
    let mut indicators = Vec::new();
    if facts.amount > 200_000.0 {
        points += 30;
        indicators.push("Unusually high claim amount".to_string());
    }
    if facts.mentions("total loss") && facts.amount > 50_000.0 {
        points += 20;
        indicators.push("High-value total loss claim".to_string());
    }
    if facts.mentions("emergency") {
        points += 10;
        indicators.push("Emergency claim - requires verification".to_string());
    }
    (points.min(100), indicators)
}

pub fn check_fraud(facts: &ClaimFacts) -> FraudCheck {
    let (points, indicators) = fraud_points(facts);
    let recommendation = match points {
        71.. => FraudRecommendation::Reject,
        41..=70 => FraudRecommendation::Investigate,
        _ => FraudRecommendation::Approve,
    };
    FraudCheck {
        probability: f64::from(points) / 100.0,
        indicators,
        investigation_required: points > 50,
        recommendation,
    }
}

fn recommendations(risk: RiskLevel, fraud_points: u32) -> Vec<String> {
    let mut out: Vec<&str> = match risk {
        RiskLevel::Low if fraud_points < 30 => vec![
            "Fast-track approval recommended",
            "Standard verification process sufficient",
        ],
        RiskLevel::Medium => vec![
            "Standard review process",
            "Additional documentation may be required",
        ],
        _ => vec![
            "Detailed manual review required",
            "Consider specialist evaluation",
        ],
    };
    if fraud_points > 50 {
        out.extend(["Fraud investigation recommended", "Hold payment pending investigation"]);
    }
    out.into_iter().map(str::to_string).collect()
}

fn next_action(risk: RiskLevel, fraud_points: u32) -> NextAction {
    if fraud_points > 70 {
        NextAction::Investigate
    } else if risk == RiskLevel::High {
        NextAction::ManualReview
    } else if risk == RiskLevel::Low && fraud_points < 30 {
        NextAction::AutoApprove
    } else {
        NextAction::StandardReview
    }
}

impl ClaimAnalysis {
    pub fn of(facts: &ClaimFacts) -> Self {
        let risk = assess_risk(facts);
        let (fraud_score, _) = fraud_points(facts);
        Self {
            processing_priority: processing_priority(facts),
            required_documents: required_documents(facts.claim_type)
                .iter()
                .map(|doc| doc.to_string())
                .collect(),
            recommendations: recommendations(risk.level, fraud_score),
            next_action: next_action(risk.level, fraud_score),
            fraud: check_fraud(facts),
            risk,
            confidence: ANALYSIS_CONFIDENCE,
        }
    }
}
