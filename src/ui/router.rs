// src/ui/router.rs
use crate::ui::{
    layout::Layout,
    pages::{
        AddUser as AddUserPage, Dashboard as DashboardPage, Items as ItemsPage,
        Login as LoginPage, NotFound as NotFoundPage, Reviews as ReviewsPage,
        SelectBrand as SelectBrandPage, Settings as SettingsPage,
    },
    state::{use_hydrated, use_session},
};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/items")]
    Items {},
    #[route("/reviews")]
    Reviews {},
    #[route("/select-brand")]
    SelectBrand {},
    #[route("/settings")]
    Settings {},
    #[route("/settings/add-user")]
    AddUser {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Redirect to the login page when no session token exists. Waits for
/// hydration so a persisted session survives a reload.
#[component]
fn AuthGuard(children: Element) -> Element {
    let session = use_session();
    let hydrated = use_hydrated();
    let navigator = use_navigator();

    use_effect(move || {
        if hydrated() && !session.read().is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });

    if !hydrated() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "text-gray-500", "Memuat sesi…" }
            }
        };
    }

    if session.read().is_authenticated() {
        rsx! { {children} }
    } else {
        rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "text-gray-500", "Mengalihkan ke halaman login…" }
            }
        }
    }
}

#[component]
fn AuthenticatedLayout(children: Element) -> Element {
    rsx! {
        AuthGuard {
            Layout {
                {children}
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        AuthenticatedLayout {
            DashboardPage {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AuthenticatedLayout {
            DashboardPage {}
        }
    }
}

#[component]
pub fn Items() -> Element {
    rsx! {
        AuthenticatedLayout {
            ItemsPage {}
        }
    }
}

#[component]
pub fn Reviews() -> Element {
    rsx! {
        AuthenticatedLayout {
            ReviewsPage {}
        }
    }
}

#[component]
pub fn SelectBrand() -> Element {
    rsx! {
        AuthGuard {
            SelectBrandPage {}
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        AuthenticatedLayout {
            SettingsPage {}
        }
    }
}

#[component]
pub fn AddUser() -> Element {
    rsx! {
        AuthenticatedLayout {
            AddUserPage {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundPage { segments }
    }
}
