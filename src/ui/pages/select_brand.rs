// src/ui/pages/select_brand.rs - Brand picker shown after login

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::models::Brand;
use crate::ui::{
    router::Route,
    state::{use_services, use_session},
};

#[component]
pub fn SelectBrand() -> Element {
    let services = use_services();
    let mut session = use_session();
    let navigator = use_navigator();

    let mut brands = use_signal(Vec::<Brand>::new);
    let mut active = use_signal(|| None::<Brand>);
    let mut loading = use_signal(|| true);
    let mut submitting = use_signal(|| None::<i64>);
    let mut error = use_signal(|| None::<String>);

    // one fresh load of the list and the current selection
    let load_services = services.clone();
    use_future(move || {
        let services = load_services.clone();
        async move {
            let Some(token) = session.peek().token().map(String::from) else {
                loading.set(false);
                return;
            };

            if let Ok(current) = services.api.active_brand(&token).await {
                active.set(current);
            }
            match services.api.brands(&token).await {
                Ok(list) => brands.set(list),
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        error.set(Some(message));
                    }
                }
            }
            loading.set(false);
        }
    });

    let choose = use_callback(move |brand_id: i64| {
        let services = services.clone();
        submitting.set(Some(brand_id));
        spawn(async move {
            let state = services.session.select_brand(brand_id).await;
            session.set(state);
            navigator.push(Route::Dashboard {});
        });
    });

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-900 px-4",
            div {
                class: "w-full max-w-md rounded-2xl bg-white/95 p-8 shadow-2xl",
                h1 { class: "text-2xl font-bold text-center", "Pilih Brand" }
                p {
                    class: "mt-1 mb-6 text-center text-sm text-gray-600",
                    if let Some(active) = active() {
                        "Brand aktif saat ini: {active.name}"
                    } else {
                        "Belum ada brand aktif"
                    }
                }

                if let Some(error) = error() {
                    div {
                        class: "mb-4 rounded-lg border border-red-200 bg-red-50 px-3 py-2 text-sm text-red-700",
                        "{error}"
                    }
                }

                if loading() {
                    div { class: "py-6 text-center text-gray-500", "Memuat…" }
                }

                div {
                    class: "space-y-3",
                    for brand in brands() {
                        BrandButton {
                            brand: brand.clone(),
                            submitting: submitting().is_some(),
                            saving: submitting() == Some(brand.id),
                            on_choose: choose,
                        }
                    }
                }

                button {
                    class: "mt-6 w-full text-sm text-gray-500 hover:text-gray-700",
                    onclick: move |_| {
                        navigator.replace(Route::Login {});
                    },
                    "Ganti Akun"
                }
            }
        }
    }
}

#[component]
fn BrandButton(
    brand: Brand,
    submitting: bool,
    saving: bool,
    on_choose: Callback<i64>,
) -> Element {
    let class = if saving {
        "w-full py-3 rounded-lg border text-center text-base font-semibold transition bg-green-600 text-white"
    } else {
        "w-full py-3 rounded-lg border text-center text-base font-semibold transition bg-white hover:bg-green-50 border-gray-300"
    };
    let brand_id = brand.id;

    rsx! {
        button {
            class: "{class}",
            disabled: submitting,
            onclick: move |_| on_choose.call(brand_id),
            if saving {
                "Menyimpan…"
            } else {
                "{brand.name}"
            }
        }
    }
}
