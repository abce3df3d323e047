// src/ui/app.rs - Main application component with routing

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{router::Route, state::AppServices, state::SessionProvider};

/// Main application component that wires services, session state, and
/// routing together
#[component]
pub fn App() -> Element {
    let services = use_hook(AppServices::build);
    use_context_provider(|| services);

    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}
