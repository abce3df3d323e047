// src/ui/state.rs - Session context, hooks, and the brand refresh task

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::platform;
use crate::session::{SessionManager, SessionState};

/// The long-lived services every view reaches through context: the
/// configuration, the API client, and the session manager. Constructed
/// once per application run and torn down with it.
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub api: ApiClient,
    pub session: Arc<SessionManager>,
}

impl AppServices {
    pub fn build() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = AppConfig::from_env().unwrap_or_default();
        #[cfg(target_arch = "wasm32")]
        let config = AppConfig::default();

        let providers = platform::create_providers();
        let api = ApiClient::new(config.api_base.clone(), providers.network);
        let session = Arc::new(SessionManager::new(providers.storage, api.clone()));
        Self {
            config,
            api,
            session,
        }
    }
}

/// Signal wrapper so the session state is addressable in context.
#[derive(Clone, Copy)]
pub struct SessionSignal(pub Signal<SessionState>);

/// Whether the initial storage hydration has completed. Route guards wait
/// on this before redirecting, so a persisted session is not mistaken for
/// a missing one.
#[derive(Clone, Copy)]
pub struct HydratedSignal(pub Signal<bool>);

/// Provides the session signal, runs hydration once, and keeps the brand
/// list fresh on a fixed interval while a token exists.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let services = use_context::<AppServices>();
    let mut session = use_signal(SessionState::default);
    let mut hydrated = use_signal(|| false);

    use_context_provider(|| SessionSignal(session));
    use_context_provider(|| HydratedSignal(hydrated));

    // hydrate from durable storage, then poll the brand list hourly; the
    // period is fixed, with no backoff or jitter
    let refresh_secs = services.config.brand_refresh_secs;
    let task_services = services.clone();
    use_future(move || {
        let services = task_services.clone();
        async move {
            let state = services.session.hydrate().await;
            session.set(state);
            hydrated.set(true);

            loop {
                sleep_secs(refresh_secs).await;
                if session.peek().is_authenticated() {
                    let state = services.session.refresh_brands().await;
                    session.set(state);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new((secs * 1000) as u32).await;
}

/// Hook to access the long-lived services
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Hook to access the session state signal
pub fn use_session() -> Signal<SessionState> {
    use_context::<SessionSignal>().0
}

/// Hook to check whether hydration has completed
pub fn use_hydrated() -> Signal<bool> {
    use_context::<HydratedSignal>().0
}
