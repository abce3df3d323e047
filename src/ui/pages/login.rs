// src/ui/pages/login.rs - Authentication login page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::Route,
    state::{use_hydrated, use_services, use_session},
};

/// Login page component
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let mut session = use_session();
    let hydrated = use_hydrated();
    let navigator = use_navigator();

    // Form state
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut login_error = use_signal(|| None::<String>);

    // Already authenticated sessions go straight to the dashboard
    use_effect(move || {
        if hydrated() && session.read().is_authenticated() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |_| {
        if loading() {
            return;
        }
        login_error.set(None);

        if username().trim().is_empty() {
            login_error.set(Some("Username wajib diisi".to_string()));
            return;
        }
        if password().trim().is_empty() {
            login_error.set(Some("Password wajib diisi".to_string()));
            return;
        }

        loading.set(true);
        let services = services.clone();
        let user = username.peek().clone();
        let pass = password.peek().clone();
        spawn(async move {
            match services.api.login(&user, &pass).await {
                Ok(response) => {
                    let Some(token) = response.token.filter(|t| !t.is_empty()) else {
                        login_error.set(Some("Token tidak ditemukan dalam response".to_string()));
                        loading.set(false);
                        return;
                    };
                    let first_brand_id = response.brands.first().map(|b| b.id);
                    let state = services
                        .session
                        .seed(token, response.user, response.brands, first_brand_id)
                        .await;
                    session.set(state);
                    loading.set(false);
                    navigator.replace(Route::Dashboard {});
                }
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        login_error.set(Some(message));
                    }
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-900 to-black px-4",
            div {
                class: "w-full max-w-md rounded-2xl border border-gray-700 bg-gray-800/80 p-8 shadow-2xl md:p-10",

                div {
                    class: "mb-10 text-center",
                    div { class: "text-4xl", "🛵" }
                    h1 { class: "mt-2 text-2xl font-semibold text-white", "Channelboard" }
                    p {
                        class: "mt-1 text-sm text-gray-400",
                        "Performa channel food delivery dalam satu dasbor."
                    }
                }

                form {
                    class: "space-y-6",
                    onsubmit: handle_submit,

                    div {
                        label {
                            class: "block mb-2 text-sm font-medium text-gray-200",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            placeholder: "Masukkan username",
                            class: "w-full rounded-xl border border-gray-600 bg-gray-700/50 px-4 py-3 text-white placeholder-gray-400 outline-none focus:border-green-400",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }

                    div {
                        label {
                            class: "block mb-2 text-sm font-medium text-gray-200",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            placeholder: "Masukkan password brand",
                            class: "w-full rounded-xl border border-gray-600 bg-gray-700/50 px-4 py-3 text-white placeholder-gray-400 outline-none focus:border-green-400",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    if let Some(error) = login_error() {
                        div {
                            class: "rounded-xl border border-red-400/30 bg-red-500/10 px-4 py-3 text-sm text-red-200",
                            "{error}"
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: loading(),
                        class: "w-full rounded-xl bg-green-500 py-3 text-sm font-semibold text-black transition hover:bg-green-400 disabled:cursor-not-allowed disabled:opacity-70",
                        if loading() {
                            "Memproses…"
                        } else {
                            "Masuk"
                        }
                    }
                }

                div {
                    class: "mt-8 text-center text-xs text-gray-500",
                    "© 2025 Channelboard. All rights reserved."
                }
            }
        }
    }
}
