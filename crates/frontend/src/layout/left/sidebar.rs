//! Sidebar with the top-level sections of the admin

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        path: "/",
        label: "Dashboard",
        icon: "dashboard",
    },
    MenuItem {
        path: "/customers",
        label: "Customers",
        icon: "customers",
    },
    MenuItem {
        path: "/transactions",
        label: "Transactions",
        icon: "transactions",
    },
];

/// A section stays highlighted on its nested pages, e.g. a transaction detail
fn is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        current == "/"
    } else {
        current == item_path || current.starts_with(&format!("{}/", item_path))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">"Admin"</div>
            {MENU_ITEMS
                .into_iter()
                .map(|item| {
                    view! {
                        <A href=item.path>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    pathname.with(|path| is_active(item.path, path))
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/customers"));
        assert!(is_active("/transactions", "/transactions"));
        assert!(is_active("/transactions", "/transactions/T-001"));
        assert!(!is_active("/transactions", "/transactions-archive"));
    }
}
