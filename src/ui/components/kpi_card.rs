// src/ui/components/kpi_card.rs - Headline number cards and the error banner

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KpiTone {
    #[default]
    Slate,
    Green,
    Gray,
}

#[component]
pub fn KpiCard(
    label: &'static str,
    value: String,
    #[props(default)] tone: KpiTone,
) -> Element {
    let tone_class = match tone {
        KpiTone::Green => "bg-green-50 text-green-700 ring-1 ring-green-100",
        KpiTone::Gray => "bg-gray-50 text-gray-700 ring-1 ring-gray-100",
        KpiTone::Slate => "bg-white text-slate-800 ring-1 ring-slate-100",
    };

    rsx! {
        div {
            class: "rounded-2xl p-5 shadow-md {tone_class}",
            div { class: "text-sm text-gray-500", "{label}" }
            div { class: "mt-1 text-2xl font-semibold", "{value}" }
        }
    }
}

/// Inline banner for fetch failures. Cancellations never reach this; the
/// views only set an error message for real failures.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "px-4 py-3 mb-4 text-sm text-red-700 border border-red-200 rounded-lg bg-red-50",
            "{message}"
        }
    }
}
