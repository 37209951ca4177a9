use crate::breadcrumb::BreadcrumbIcon;
use crate::models::Role;

/// The presentational shell that wraps dashboard pages.
///
/// Exactly one shell is chosen per render from the signed-in role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutShell {
    Admin,
    Agent,
    Customer,
}

/// A sidebar entry inside a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: BreadcrumbIcon,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Overview", href: "/dashboard/admin", icon: BreadcrumbIcon::Home },
    NavItem { label: "All Claims", href: "/dashboard/claims", icon: BreadcrumbIcon::Claims },
    NavItem { label: "Policies", href: "/dashboard/policies", icon: BreadcrumbIcon::Policies },
    NavItem { label: "Profile", href: "/dashboard/profile", icon: BreadcrumbIcon::Profile },
];

const AGENT_NAV: &[NavItem] = &[
    NavItem { label: "My Desk", href: "/dashboard/agent", icon: BreadcrumbIcon::Home },
    NavItem { label: "Assigned Claims", href: "/dashboard/claims", icon: BreadcrumbIcon::Claims },
    NavItem { label: "Policies", href: "/dashboard/policies", icon: BreadcrumbIcon::Policies },
    NavItem { label: "Profile", href: "/dashboard/profile", icon: BreadcrumbIcon::Profile },
];

const CUSTOMER_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard/home", icon: BreadcrumbIcon::Home },
    NavItem { label: "My Claims", href: "/dashboard/claims", icon: BreadcrumbIcon::Claims },
    NavItem { label: "New Claim", href: "/dashboard/claims/new", icon: BreadcrumbIcon::New },
    NavItem { label: "My Policies", href: "/dashboard/policies", icon: BreadcrumbIcon::Policies },
    NavItem { label: "Profile", href: "/dashboard/profile", icon: BreadcrumbIcon::Profile },
];

impl LayoutShell {
    /// Select the shell for a role. Admin and agent get their own shells,
    /// every other role falls through to the customer shell.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => LayoutShell::Admin,
            Role::Agent => LayoutShell::Agent,
            _ => LayoutShell::Customer,
        }
    }

    /// Select the shell from a raw role string, which may be missing.
    pub fn for_role_name(role: Option<&str>) -> Self {
        role.map(Role::from_str_or_default)
            .map(Self::for_role)
            .unwrap_or(LayoutShell::Customer)
    }

    /// Landing route of the shell's dashboard.
    pub fn home_route(&self) -> &'static str {
        match self {
            LayoutShell::Admin => "/dashboard/admin",
            LayoutShell::Agent => "/dashboard/agent",
            LayoutShell::Customer => "/dashboard/home",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            LayoutShell::Admin => "Administration",
            LayoutShell::Agent => "Agent Workspace",
            LayoutShell::Customer => "Customer Portal",
        }
    }

    /// Value of the `data-shell` attribute that scopes the shell's accent colors.
    pub fn css_key(&self) -> &'static str {
        match self {
            LayoutShell::Admin => "admin",
            LayoutShell::Agent => "agent",
            LayoutShell::Customer => "customer",
        }
    }

    pub fn nav_items(&self) -> &'static [NavItem] {
        match self {
            LayoutShell::Admin => ADMIN_NAV,
            LayoutShell::Agent => AGENT_NAV,
            LayoutShell::Customer => CUSTOMER_NAV,
        }
    }

    /// Whether `path` should highlight `item` in the sidebar.
    ///
    /// Exact match, or a nested path under the item, except when a more
    /// specific sibling entry matches exactly.
    pub fn is_nav_active(&self, item: &NavItem, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        if path == item.href {
            return true;
        }
        let nested = path.starts_with(item.href) && path[item.href.len()..].starts_with('/');
        nested && !self.nav_items().iter().any(|other| other.href == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_agent_get_their_own_shells() {
        assert_eq!(LayoutShell::for_role(Role::Admin), LayoutShell::Admin);
        assert_eq!(LayoutShell::for_role(Role::Agent), LayoutShell::Agent);
        assert_eq!(LayoutShell::for_role(Role::Customer), LayoutShell::Customer);
    }

    #[test]
    fn unrecognized_or_missing_roles_get_the_customer_shell() {
        for name in ["customer", "guest", "", "root", "Adjuster"] {
            assert_eq!(LayoutShell::for_role_name(Some(name)), LayoutShell::Customer, "{name}");
        }
        assert_eq!(LayoutShell::for_role_name(None), LayoutShell::Customer);
    }

    #[test]
    fn role_names_must_match_exactly() {
        assert_eq!(LayoutShell::for_role_name(Some("admin")), LayoutShell::Admin);
        assert_eq!(LayoutShell::for_role_name(Some("agent")), LayoutShell::Agent);
        for name in ["Admin", "ADMIN", " admin ", "Agent", "AGENT"] {
            assert_eq!(LayoutShell::for_role_name(Some(name)), LayoutShell::Customer, "{name:?}");
        }
    }

    #[test]
    fn shells_are_pairwise_distinct() {
        let admin = LayoutShell::for_role(Role::Admin);
        let agent = LayoutShell::for_role(Role::Agent);
        let customer = LayoutShell::for_role(Role::Customer);
        assert_ne!(agent, admin);
        assert_ne!(agent, customer);
        assert_ne!(admin, customer);
        assert_ne!(agent.css_key(), admin.css_key());
        assert_ne!(agent.home_route(), customer.home_route());
    }

    #[test]
    fn first_nav_item_is_the_shell_home() {
        for shell in [LayoutShell::Admin, LayoutShell::Agent, LayoutShell::Customer] {
            assert_eq!(shell.nav_items()[0].href, shell.home_route());
        }
    }

    #[test]
    fn nested_paths_highlight_their_section() {
        let shell = LayoutShell::Admin;
        let policies = shell.nav_items()[2];
        assert!(shell.is_nav_active(&policies, "/dashboard/policies/POL-AUTO-001"));
        assert!(shell.is_nav_active(&policies, "/dashboard/policies/"));
        assert!(!shell.is_nav_active(&policies, "/dashboard/policiesx"));
    }

    #[test]
    fn exact_sibling_wins_over_prefix() {
        let shell = LayoutShell::Customer;
        let claims = shell.nav_items()[1];
        let new_claim = shell.nav_items()[2];
        assert!(shell.is_nav_active(&new_claim, "/dashboard/claims/new"));
        assert!(!shell.is_nav_active(&claims, "/dashboard/claims/new"));
    }
}
