// src/ui/pages/not_found.rs - Catch-all page for unknown routes

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 px-4",
            div {
                class: "text-center",
                div { class: "text-6xl", "🔍" }
                h1 { class: "mt-4 text-2xl font-semibold text-gray-800", "Halaman tidak ditemukan" }
                p { class: "mt-1 text-sm text-gray-500", "Tidak ada halaman di /{path}" }
                Link {
                    to: Route::Dashboard {},
                    class: "mt-6 inline-block rounded-xl bg-green-600 px-4 py-2 text-sm font-semibold text-white hover:bg-green-500",
                    "Kembali ke Dashboard"
                }
            }
        }
    }
}
