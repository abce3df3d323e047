// src/ui/layout/topbar.rs - Top bar with brand selector and user menu

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::Route,
    state::{use_services, use_session},
};

#[derive(Props, Clone, PartialEq)]
pub struct TopbarProps {
    /// Callback to open the mobile sidebar drawer
    pub on_open_sidebar: Callback<()>,
}

#[component]
pub fn Topbar(props: TopbarProps) -> Element {
    let services = use_services();
    let mut session = use_session();
    let navigator = use_navigator();
    let on_open_sidebar = props.on_open_sidebar;

    let state = session.read();
    let brands = state.brands().to_vec();
    let active_id = state.active_brand().map(|b| b.id);
    let username = state.user().map(|u| u.username.clone());
    drop(state);

    let select_services = services.clone();
    let on_brand_change = move |e: Event<FormData>| {
        let Ok(brand_id) = e.value().parse::<i64>() else {
            return;
        };
        let services = select_services.clone();
        spawn(async move {
            let state = services.session.select_brand(brand_id).await;
            session.set(state);
        });
    };

    let on_logout = move |_| {
        let services = services.clone();
        let navigator = navigator;
        spawn(async move {
            let state = services.session.logout().await;
            session.set(state);
            navigator.replace(Route::Login {});
        });
    };

    rsx! {
        header {
            class: "sticky top-0 z-30 flex items-center justify-between gap-4 border-b border-gray-200 bg-white/95 px-4 py-3 backdrop-blur lg:px-6",

            // Mobile menu button
            button {
                r#type: "button",
                class: "rounded-lg border border-gray-200 p-2 text-gray-600 hover:bg-gray-50 lg:hidden",
                onclick: move |_| on_open_sidebar.call(()),
                "☰"
            }

            // Brand selector: every data view follows this choice
            div {
                class: "flex items-center gap-2",
                label {
                    class: "hidden text-xs text-gray-500 sm:block",
                    "Brand"
                }
                select {
                    class: "rounded-lg border border-gray-200 bg-white px-3 py-2 text-sm",
                    value: active_id.map(|id| id.to_string()).unwrap_or_default(),
                    onchange: on_brand_change,
                    for brand in brands {
                        option {
                            value: "{brand.id}",
                            selected: Some(brand.id) == active_id,
                            "{brand.name}"
                        }
                    }
                }
            }

            // User + logout
            div {
                class: "flex items-center gap-3",
                if let Some(username) = username {
                    span {
                        class: "hidden text-sm text-gray-600 sm:block",
                        "{username}"
                    }
                }
                button {
                    r#type: "button",
                    class: "rounded-lg border border-gray-200 px-3 py-2 text-sm text-gray-600 hover:bg-gray-50",
                    onclick: on_logout,
                    "Keluar"
                }
            }
        }
    }
}
