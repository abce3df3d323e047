// src/ui/pages/settings.rs - Settings hub, superadmin only

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::components::SuperadminGate;
use crate::ui::router::Route;

#[component]
pub fn Settings() -> Element {
    rsx! {
        SuperadminGate {
            main {
                class: "p-6",
                div {
                    class: "rounded-2xl bg-white/95 p-6 shadow-md",
                    h1 { class: "text-2xl font-bold mb-4", "Pengaturan" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        Link {
                            to: Route::AddUser {},
                            class: "rounded-xl border border-gray-200 bg-white p-4 hover:bg-green-50 transition",
                            div { class: "font-semibold", "➕ Tambahkan User" }
                            p {
                                class: "text-sm text-gray-600 mt-1",
                                "Buat user baru dan tautkan ke company/brand."
                            }
                        }
                    }
                }
            }
        }
    }
}
