//! Breadcrumb trail derived from the current route path.

use serde::{Deserialize, Serialize};

/// Route the root breadcrumb links to.
pub const DASHBOARD_HOME: &str = "/dashboard/home";

/// Label of the root breadcrumb.
pub const ROOT_LABEL: &str = "Dashboard";

/// Glyph shown next to a breadcrumb label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreadcrumbIcon {
    Home,
    Claims,
    Policies,
    Profile,
    New,
}

/// One entry of a breadcrumb trail. `href` is `None` for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
    pub icon: Option<BreadcrumbIcon>,
}

impl BreadcrumbItem {
    pub fn is_current(&self) -> bool {
        self.href.is_none()
    }
}

/// Segments that are already represented by the root entry.
fn is_root_alias(segment: &str) -> bool {
    matches!(segment, "dashboard" | "home")
}

fn known_segment(segment: &str) -> Option<(&'static str, BreadcrumbIcon)> {
    match segment {
        "claims" => Some(("Claims", BreadcrumbIcon::Claims)),
        "policies" => Some(("Policies", BreadcrumbIcon::Policies)),
        "profile" => Some(("Profile", BreadcrumbIcon::Profile)),
        "new" => Some(("New", BreadcrumbIcon::New)),
        _ => None,
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the breadcrumb trail for `path`.
///
/// The trail always starts with the Dashboard root. `dashboard` and `home`
/// segments fold into the root, known segments get a fixed label and icon,
/// and anything else (ids, policy numbers) is shown with its first letter
/// capitalized. Every entry links to its accumulated path prefix except the
/// one produced by the final path segment. When nothing follows the root,
/// the root itself is the current page and carries no link.
pub fn derive_breadcrumbs(path: &str) -> Vec<BreadcrumbItem> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut trail = vec![BreadcrumbItem {
        label: ROOT_LABEL.to_string(),
        href: Some(DASHBOARD_HOME.to_string()),
        icon: Some(BreadcrumbIcon::Home),
    }];

    let mut prefix = String::new();
    for (index, segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);

        if is_root_alias(segment) {
            continue;
        }

        let (label, icon) = match known_segment(segment) {
            Some((label, icon)) => (label.to_string(), Some(icon)),
            None => (capitalize_first(segment), None),
        };
        let href = (index + 1 < segments.len()).then(|| prefix.clone());

        trail.push(BreadcrumbItem { label, href, icon });
    }

    if trail.len() == 1 {
        trail[0].href = None;
    }

    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(label: &str, href: Option<&str>, icon: Option<BreadcrumbIcon>) -> BreadcrumbItem {
        BreadcrumbItem {
            label: label.to_string(),
            href: href.map(str::to_string),
            icon,
        }
    }

    #[test]
    fn new_claim_path() {
        assert_eq!(
            derive_breadcrumbs("/dashboard/claims/new"),
            vec![
                item("Dashboard", Some("/dashboard/home"), Some(BreadcrumbIcon::Home)),
                item("Claims", Some("/dashboard/claims"), Some(BreadcrumbIcon::Claims)),
                item("New", None, Some(BreadcrumbIcon::New)),
            ]
        );
    }

    #[test]
    fn policy_number_is_a_dynamic_terminal_segment() {
        let trail = derive_breadcrumbs("/dashboard/policies/POL-AUTO-001");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1], item("Policies", Some("/dashboard/policies"), Some(BreadcrumbIcon::Policies)));
        let last = trail.last().unwrap();
        assert_eq!(last.label, "POL-AUTO-001");
        assert_eq!(last.href, None);
        assert_eq!(last.icon, None);
    }

    #[test]
    fn lowercase_identifier_gets_capitalized() {
        let trail = derive_breadcrumbs("/dashboard/claims/clm-2024-001");
        assert_eq!(trail[2].label, "Clm-2024-001");
        assert!(trail[2].is_current());
    }

    #[test]
    fn home_collapses_into_a_terminal_root() {
        assert_eq!(
            derive_breadcrumbs("/dashboard/home"),
            vec![item("Dashboard", None, Some(BreadcrumbIcon::Home))]
        );
    }

    #[test]
    fn empty_and_root_paths_yield_only_the_root() {
        for path in ["", "/", "/dashboard", "//dashboard//"] {
            let trail = derive_breadcrumbs(path);
            assert_eq!(trail.len(), 1, "path {path:?}");
            assert!(trail[0].is_current());
        }
    }

    #[test]
    fn profile_is_terminal() {
        assert_eq!(
            derive_breadcrumbs("/dashboard/profile"),
            vec![
                item("Dashboard", Some("/dashboard/home"), Some(BreadcrumbIcon::Home)),
                item("Profile", None, Some(BreadcrumbIcon::Profile)),
            ]
        );
    }

    #[test]
    fn intermediate_dynamic_segment_keeps_its_prefix_link() {
        let trail = derive_breadcrumbs("/dashboard/policies/pol-7/claims");
        assert_eq!(trail[2], item("Pol-7", Some("/dashboard/policies/pol-7"), None));
        assert_eq!(trail[3], item("Claims", None, Some(BreadcrumbIcon::Claims)));
    }

    #[test]
    fn skipped_segments_still_extend_the_prefix() {
        let trail = derive_breadcrumbs("/dashboard/claims/home");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].href.as_deref(), Some("/dashboard/claims"));
    }

    #[test]
    fn repeated_segments_are_not_deduplicated() {
        let trail = derive_breadcrumbs("/dashboard/new/new");
        let labels: Vec<&str> = trail.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "New", "New"]);
        assert_eq!(trail[1].href.as_deref(), Some("/dashboard/new"));
    }

    #[test]
    fn derivation_is_idempotent() {
        let path = "/dashboard/policies/POL-HOME-001";
        assert_eq!(derive_breadcrumbs(path), derive_breadcrumbs(path));
    }

    #[test]
    fn non_ascii_first_letter_is_capitalized() {
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }
}
