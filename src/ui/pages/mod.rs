// src/ui/pages/mod.rs - Page components and shared page chrome

use dioxus::prelude::*;

mod add_user;
mod dashboard;
mod items;
mod login;
mod not_found;
mod reviews;
mod select_brand;
mod settings;

pub use add_user::AddUser;
pub use dashboard::Dashboard;
pub use items::Items;
pub use login::Login;
pub use not_found::NotFound;
pub use reviews::Reviews;
pub use select_brand::SelectBrand;
pub use settings::Settings;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        main {
            class: "p-6 space-y-6",

            // Page header
            if !title.is_empty() {
                header {
                    class: "flex flex-col gap-4 md:flex-row md:items-end md:justify-between",
                    div {
                        h1 {
                            class: "text-2xl font-semibold text-gray-800",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-sm text-gray-500",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "flex flex-col gap-3 sm:flex-row",
                            {actions}
                        }
                    }
                }
            }

            // Page content
            {children}
        }
    }
}

/// Loading placeholder shared by the table views
#[component]
pub fn LoadingRow(#[props(default = "Memuat data…".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "px-3 py-8 text-center text-gray-500",
            span { class: "animate-pulse", "{message}" }
        }
    }
}
