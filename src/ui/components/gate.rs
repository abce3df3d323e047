// src/ui/components/gate.rs - Superadmin-only content gate

use dioxus::prelude::*;

use crate::ui::state::use_session;

/// Renders its children only for superadmin users; everyone else gets a
/// flat denial instead of the gated content.
#[component]
pub fn SuperadminGate(children: Element) -> Element {
    let session = use_session();
    let allowed = session
        .read()
        .user()
        .map(|u| u.is_superadmin())
        .unwrap_or(false);

    if allowed {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            main {
                class: "p-6",
                div {
                    class: "rounded-2xl bg-white/95 p-6 shadow-md text-sm text-gray-600",
                    "Halaman ini hanya untuk superadmin."
                }
            }
        }
    }
}
