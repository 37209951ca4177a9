use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronRight;
use dioxus_free_icons::Icon;
use shared_types::derive_breadcrumbs;

use super::SectionIcon;

/// Breadcrumb trail for `path`. Linked entries navigate, the current page is plain text.
#[component]
pub fn Breadcrumbs(path: String) -> Element {
    let trail = derive_breadcrumbs(&path);
    let last = trail.len().saturating_sub(1);

    rsx! {
        nav { class: "breadcrumbs", "aria-label": "Breadcrumb",
            ol { class: "breadcrumbs-list",
                for (index, item) in trail.into_iter().enumerate() {
                    li { key: "{index}", class: "breadcrumbs-item",
                        if let Some(href) = item.href.clone() {
                            Link { class: "breadcrumbs-link", to: href,
                                if let Some(icon) = item.icon {
                                    SectionIcon { icon, size: 14 }
                                }
                                span { "{item.label}" }
                            }
                        } else {
                            span { class: "breadcrumbs-current", "aria-current": "page",
                                if let Some(icon) = item.icon {
                                    SectionIcon { icon, size: 14 }
                                }
                                span { "{item.label}" }
                            }
                        }
                        if index < last {
                            span { class: "breadcrumbs-separator",
                                Icon::<LdChevronRight> { icon: LdChevronRight, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}
