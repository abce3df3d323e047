// src/ui/pages/add_user.rs - Create a user and link it to a company/brand

use dioxus::prelude::*;

use crate::api::models::{Brand, Company, CreateUserRequest};
use crate::ui::components::{ErrorBanner, SuperadminGate};
use crate::ui::state::{use_services, use_session};

#[component]
pub fn AddUser() -> Element {
    let services = use_services();
    let session = use_session();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "user".to_string());

    let mut companies = use_signal(Vec::<Company>::new);
    let mut company_id = use_signal(|| None::<i64>);
    let mut brands = use_signal(Vec::<Brand>::new);

    let mut submitting = use_signal(|| false);
    let mut message = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let mut new_company_name = use_signal(String::new);
    let mut new_brand_name = use_signal(String::new);

    let token = use_memo(move || session.read().token().map(str::to_string));

    // companies, once
    let load_services = services.clone();
    use_future(move || {
        let services = load_services.clone();
        async move {
            let Some(token) = session.peek().token().map(String::from) else {
                return;
            };
            match services.api.companies(&token).await {
                Ok(list) => companies.set(list),
                Err(e) => {
                    if let Some(msg) = e.user_message() {
                        error.set(Some(msg));
                    }
                }
            }
        }
    });

    // brand list follows the selected company
    let brand_services = services.clone();
    use_effect(move || {
        let Some(token) = token() else { return };
        let Some(company) = company_id() else {
            brands.set(Vec::new());
            return;
        };
        let api = brand_services.api.clone();
        spawn(async move {
            match api.company_brands(&token, company).await {
                Ok(list) => brands.set(list),
                Err(_) => brands.set(Vec::new()),
            }
        });
    });

    let create_company_services = services.clone();
    let create_company = move |_| {
        let Some(token) = token.peek().clone() else { return };
        let name = new_company_name.peek().clone();
        if name.trim().is_empty() {
            return;
        }
        error.set(None);
        let services = create_company_services.clone();
        spawn(async move {
            match services.api.create_company(&token, &name).await {
                Ok(company) => {
                    new_company_name.set(String::new());
                    company_id.set(Some(company.id));
                    match services.api.companies(&token).await {
                        Ok(list) => companies.set(list),
                        Err(_) => companies.with_mut(|c| c.push(company)),
                    }
                }
                Err(e) => {
                    if let Some(msg) = e.user_message() {
                        error.set(Some(msg));
                    }
                }
            }
        });
    };

    let create_brand_services = services.clone();
    let create_brand = move |_| {
        let Some(token) = token.peek().clone() else { return };
        let Some(company) = *company_id.peek() else { return };
        let name = new_brand_name.peek().clone();
        if name.trim().is_empty() {
            return;
        }
        error.set(None);
        let services = create_brand_services.clone();
        spawn(async move {
            match services.api.create_company_brand(&token, company, &name).await {
                Ok(()) => {
                    new_brand_name.set(String::new());
                    if let Ok(list) = services.api.company_brands(&token, company).await {
                        brands.set(list);
                    }
                }
                Err(e) => {
                    if let Some(msg) = e.user_message() {
                        error.set(Some(msg));
                    }
                }
            }
        });
    };

    let submit_services = services.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let Some(token) = token.peek().clone() else { return };
        error.set(None);
        message.set(None);
        submitting.set(true);

        let request = CreateUserRequest {
            username: username.peek().clone(),
            password: password.peek().clone(),
            role: role.peek().clone(),
            company_id: *company_id.peek(),
        };
        let services = submit_services.clone();
        spawn(async move {
            match services.api.create_user(&token, &request).await {
                Ok(_) => {
                    message.set(Some("User berhasil dibuat ✅".to_string()));
                    username.set(String::new());
                    password.set(String::new());
                    role.set("user".to_string());
                }
                Err(e) => {
                    if let Some(msg) = e.user_message() {
                        error.set(Some(msg));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        SuperadminGate {
            main {
                class: "p-6 space-y-6",
                div {
                    class: "rounded-2xl bg-white/95 p-6 shadow-md max-w-2xl",
                    h1 { class: "text-2xl font-bold mb-4", "Tambahkan User" }

                    if let Some(error) = error() {
                        ErrorBanner { message: error }
                    }
                    if let Some(message) = message() {
                        div {
                            class: "mb-4 rounded-lg border border-green-200 bg-green-50 px-3 py-2 text-sm text-green-700",
                            "{message}"
                        }
                    }

                    form {
                        class: "space-y-4",
                        onsubmit: on_submit,

                        div {
                            label { class: "text-xs text-gray-600", "Username" }
                            input {
                                value: "{username}",
                                oninput: move |e| username.set(e.value()),
                                class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                            }
                        }
                        div {
                            label { class: "text-xs text-gray-600", "Password" }
                            input {
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                                class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                            }
                        }
                        div {
                            label { class: "text-xs text-gray-600", "Role" }
                            select {
                                class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                                onchange: move |e| role.set(e.value()),
                                option { value: "user", "user" }
                                option { value: "superadmin", "superadmin" }
                            }
                        }

                        div {
                            label { class: "text-xs text-gray-600", "Company" }
                            select {
                                class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                                onchange: move |e| company_id.set(e.value().parse().ok()),
                                option { value: "", "— tanpa company —" }
                                for company in companies() {
                                    option { value: "{company.id}", "{company.name}" }
                                }
                            }
                            div {
                                class: "mt-2 flex gap-2",
                                input {
                                    value: "{new_company_name}",
                                    oninput: move |e| new_company_name.set(e.value()),
                                    placeholder: "Company baru…",
                                    class: "flex-1 rounded-lg border border-gray-200 px-3 py-2 text-sm",
                                }
                                button {
                                    r#type: "button",
                                    onclick: create_company,
                                    class: "rounded-lg border border-gray-200 px-3 py-2 text-sm hover:bg-gray-50",
                                    "+ Company"
                                }
                            }
                        }

                        if company_id().is_some() {
                            div {
                                label { class: "text-xs text-gray-600", "Brand pada company ini" }
                                ul {
                                    class: "mt-1 text-sm text-gray-700 list-disc list-inside",
                                    for brand in brands() {
                                        li { key: "{brand.id}", "{brand.name}" }
                                    }
                                }
                                div {
                                    class: "mt-2 flex gap-2",
                                    input {
                                        value: "{new_brand_name}",
                                        oninput: move |e| new_brand_name.set(e.value()),
                                        placeholder: "Brand baru…",
                                        class: "flex-1 rounded-lg border border-gray-200 px-3 py-2 text-sm",
                                    }
                                    button {
                                        r#type: "button",
                                        onclick: create_brand,
                                        class: "rounded-lg border border-gray-200 px-3 py-2 text-sm hover:bg-gray-50",
                                        "+ Brand"
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            disabled: submitting(),
                            class: "w-full rounded-xl bg-green-600 py-2.5 text-sm font-semibold text-white hover:bg-green-500 disabled:opacity-60",
                            if submitting() {
                                "Menyimpan…"
                            } else {
                                "Buat User"
                            }
                        }
                    }
                }
            }
        }
    }
}
