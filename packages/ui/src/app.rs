//! Application context: the shared [`AppState`] signal, the platform session
//! store, and the helper every event handler uses to run an action.
//!
//! - **Web** (WASM + `web` feature): sessions persist in `localStorage` via
//!   [`store::LocalStorageStore`].
//! - **Native** (tests, server-side rendering): an in-memory
//!   [`store::MemoryStore`].

use std::future::Future;
use std::time::Duration;

use api::{ReqwestTransport, WebClient};
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::state::{AppState, PendingAction};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the platform-appropriate key/value store.
pub fn make_store() -> PlatformStore {
    PlatformStore::new()
}

/// The shared application state.
pub fn use_app() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// The persisted session store.
pub fn use_sessions() -> SessionStore<PlatformStore> {
    use_context::<SessionStore<PlatformStore>>()
}

/// Provider component that restores the persisted session and owns the
/// application state. Wrap the app with this component.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let kv = use_hook(make_store);
    let sessions = use_context_provider(|| SessionStore::new(kv.clone()));
    let app = use_signal(|| {
        let config = ClientConfig::load(&kv);
        tracing::info!("Using backend at {}", config.api_base);
        AppState::new(&config, sessions.restore())
    });
    use_context_provider(|| app);

    rsx! {
        {children}
    }
}

/// Run `work` with a client for the current session, unless `action` is
/// already in flight, then hand its output to `apply`. The action stays
/// registered until `work` completes. Output of work started before a
/// logout is dropped.
pub fn dispatch<R, F, Fut, A>(mut app: Signal<AppState>, action: PendingAction, work: F, apply: A)
where
    R: 'static,
    F: FnOnce(WebClient) -> Fut + 'static,
    Fut: Future<Output = R> + 'static,
    A: FnOnce(&mut AppState, R) + 'static,
{
    let Some(ticket) = app.write().in_flight.start(action.clone()) else {
        tracing::debug!("Ignoring {action:?}: already running");
        return;
    };
    let client = app.peek().client(ReqwestTransport::new());
    spawn(async move {
        let result = work(client).await;
        app.write().settle(&ticket, result, apply);
    });
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
