//! Claim lookups behind the claim server functions.

use shared_types::{find_claim, require_role, AppError, ClaimAnalysis, ClaimFacts, Role, ALL_ROLES};

/// Analyse the claim `claim_id` as seen by `role`.
///
/// Anonymous callers are `Unauthorized`; ids the role cannot see are `NotFound`.
pub fn analyze_claim_for(role: Option<Role>, claim_id: &str) -> Result<ClaimAnalysis, AppError> {
    let role = require_role(role, ALL_ROLES)?;
    let claim = find_claim(role, claim_id)?;
    let analysis = ClaimAnalysis::of(&ClaimFacts::from(&claim));
    tracing::debug!(
        claim_id = %claim.id,
        next_action = analysis.next_action.as_str(),
        "claim analysed"
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, NextAction};

    #[test]
    fn signed_in_roles_get_an_analysis() {
        let analysis = analyze_claim_for(Some(Role::Customer), "2").unwrap();
        assert_eq!(analysis.next_action, NextAction::StandardReview);
        assert_eq!(analysis.fraud.probability, 0.4);
    }

    #[test]
    fn anonymous_callers_are_rejected() {
        let err = analyze_claim_for(None, "2").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn other_roles_claims_are_not_found() {
        let err = analyze_claim_for(Some(Role::Agent), "2").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }
}
