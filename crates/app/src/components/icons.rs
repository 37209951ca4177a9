use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLayoutDashboard, LdPlus, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::BreadcrumbIcon;

/// Glyph for a navigation section, shared by breadcrumbs and sidebars.
#[component]
pub fn SectionIcon(icon: BreadcrumbIcon, #[props(default = 16)] size: u32) -> Element {
    match icon {
        BreadcrumbIcon::Home => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size }
        },
        BreadcrumbIcon::Claims => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: size, height: size }
        },
        BreadcrumbIcon::Policies => rsx! {
            Icon::<LdShield> { icon: LdShield, width: size, height: size }
        },
        BreadcrumbIcon::Profile => rsx! {
            Icon::<LdUser> { icon: LdUser, width: size, height: size }
        },
        BreadcrumbIcon::New => rsx! {
            Icon::<LdPlus> { icon: LdPlus, width: size, height: size }
        },
    }
}
