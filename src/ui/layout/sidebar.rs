// src/ui/layout/sidebar.rs - Navigation sidebar

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{router::Route, state::use_session};

/// Navigation item definition
#[derive(Debug, Clone, PartialEq)]
struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
    superadmin_only: bool,
}

fn navigation_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Dashboard",
            icon: "📊",
            route: Route::Dashboard {},
            superadmin_only: false,
        },
        NavItem {
            label: "Items",
            icon: "🍱",
            route: Route::Items {},
            superadmin_only: false,
        },
        NavItem {
            label: "Ulasan",
            icon: "💬",
            route: Route::Reviews {},
            superadmin_only: false,
        },
        NavItem {
            label: "Pengaturan",
            icon: "⚙️",
            route: Route::Settings {},
            superadmin_only: true,
        },
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Whether the mobile drawer is open
    pub open: bool,
    /// Callback for closing the mobile drawer
    pub on_close: Callback<()>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        // Desktop sidebar
        div {
            class: "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 lg:z-40 lg:w-72 bg-white border-r border-gray-200",
            SidebarNav { on_close }
        }

        // Mobile drawer
        if props.open {
            div {
                class: "fixed inset-0 z-50 lg:hidden",
                div {
                    class: "absolute inset-0 bg-black/30",
                    onclick: move |_| on_close.call(()),
                }
                div {
                    class: "absolute inset-y-0 left-0 w-72 bg-white shadow-xl flex flex-col",
                    SidebarNav { on_close }
                }
            }
        }
    }
}

#[component]
fn SidebarNav(on_close: Callback<()>) -> Element {
    let session = use_session();
    let current_route = use_route::<Route>();

    let is_superadmin = session
        .read()
        .user()
        .map(|u| u.is_superadmin())
        .unwrap_or(false);
    let items: Vec<NavItem> = navigation_items()
        .into_iter()
        .filter(|item| !item.superadmin_only || is_superadmin)
        .collect();

    rsx! {
        div {
            class: "flex items-center gap-2 px-4 py-5 border-b border-gray-100",
            span { class: "text-xl", "🛵" }
            span { class: "text-lg font-semibold", "Channelboard" }
        }
        nav {
            class: "flex-1 px-3 py-4 space-y-1",
            for item in items {
                SidebarLink {
                    label: item.label,
                    icon: item.icon,
                    route: item.route.clone(),
                    active: current_route == item.route,
                    on_close,
                }
            }
        }
    }
}

#[component]
fn SidebarLink(
    label: &'static str,
    icon: &'static str,
    route: Route,
    active: bool,
    on_close: Callback<()>,
) -> Element {
    let class = if active {
        "flex items-center gap-3 rounded-xl px-3 py-2 text-sm font-medium transition bg-green-50 text-green-700"
    } else {
        "flex items-center gap-3 rounded-xl px-3 py-2 text-sm font-medium transition text-gray-600 hover:bg-gray-50"
    };

    rsx! {
        Link {
            to: route,
            class: "{class}",
            onclick: move |_| on_close.call(()),
            span { "{icon}" }
            span { "{label}" }
        }
    }
}
