//! # Place Store
//!
//! The session object a UI holds on to. It owns the `AppState`, funnels every
//! mutation through `update()` and tells subscribers about it.
//!
//! ```text
//!   UI ──dispatch(Action)──▶ PlaceStore ──send_modify──▶ watch::Sender<AppState>
//!                               │                               │
//!                         spawn (once)                    subscribe()
//!                               ▼                               ▼
//!                      IndicatorSource task ──Weak──▶     UI receivers
//! ```
//!
//! The watch sender's write lock is the single writer: UI calls and the fetch
//! task both go through `send_modify`, which also marks every receiver as
//! changed even when the action left the value as it was.
//!
//! The fetch task only holds a `Weak` to the state. Dropping the store aborts
//! the task, and a completion that races the drop finds nothing to write to.
//! Without a tokio runtime there is no task at all: the fetch is recorded as
//! failed and the rate stays at 0.

use std::sync::{Arc, OnceLock, Weak};

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::core::action::{Action, update};
use crate::core::place::{Place, PlaceForm};
use crate::core::state::{AppState, IndicatorStatus, Screen};
use crate::indicator::IndicatorSource;

pub struct PlaceStore {
    state: Arc<watch::Sender<AppState>>,
    source: Arc<dyn IndicatorSource>,
    fetch: OnceLock<Option<AbortHandle>>,
}

impl PlaceStore {
    /// Creates the store and starts the indicator fetch.
    ///
    /// Outside a tokio runtime the fetch is marked failed instead.
    pub fn new(source: Arc<dyn IndicatorSource>) -> Self {
        let (state, _) = watch::channel(AppState::new());
        let store = Self {
            state: Arc::new(state),
            source,
            fetch: OnceLock::new(),
        };
        store.request_indicator_refresh();
        store
    }

    /// Starts the one indicator fetch this store will ever make.
    /// Calls after the first are ignored.
    pub fn request_indicator_refresh(&self) {
        let mut spawned = false;
        self.fetch.get_or_init(|| {
            spawned = true;
            spawn_fetch(&self.state, self.source.clone())
        });
        if !spawned {
            debug!("Indicator fetch already requested, ignoring");
        }
    }

    /// Applies an action and notifies every subscriber.
    pub fn dispatch(&self, action: Action) {
        apply(&self.state, action);
    }

    /// Receiver that is marked changed after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Reads the state without cloning it. `f` runs under the read lock, so it
    /// must not dispatch. Callers outside the crate use `snapshot()`.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Waits until the indicator fetch has either loaded or failed.
    pub async fn indicator_settled(&self) -> IndicatorStatus {
        let mut rx = self.subscribe();
        match rx
            .wait_for(|s| s.indicator != IndicatorStatus::Pending)
            .await
        {
            Ok(state) => state.indicator.clone(),
            Err(_) => IndicatorStatus::Pending,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn add_place(&self, place: Place) {
        self.dispatch(Action::AddPlace(place));
    }

    pub fn update_place(&self, place: Place) {
        self.dispatch(Action::UpdatePlace(place));
    }

    pub fn select_place(&self, place: Place) {
        self.dispatch(Action::SelectPlace(place));
    }

    pub fn navigate_to(&self, screen: Screen) {
        self.dispatch(Action::NavigateTo(screen));
    }

    pub fn open_place(&self, place: Place) {
        self.dispatch(Action::OpenPlace(place));
    }

    pub fn new_place(&self) {
        self.dispatch(Action::NewPlace);
    }

    pub fn save_place(&self, form: PlaceForm) {
        self.dispatch(Action::SavePlace(form));
    }

    pub fn preview_on_map(&self, latitude: impl Into<String>, longitude: impl Into<String>) {
        self.dispatch(Action::PreviewOnMap {
            latitude: latitude.into(),
            longitude: longitude.into(),
        });
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn places(&self) -> Vec<Place> {
        self.with_state(|s| s.places.clone())
    }

    pub fn current_screen(&self) -> Screen {
        self.with_state(|s| s.current_screen)
    }

    pub fn selected_place(&self) -> Option<Place> {
        self.with_state(|s| s.selected_place.clone())
    }

    pub fn exchange_rate(&self) -> f64 {
        self.with_state(|s| s.exchange_rate)
    }
}

impl Drop for PlaceStore {
    fn drop(&mut self) {
        if let Some(Some(handle)) = self.fetch.get() {
            handle.abort();
        }
    }
}

fn apply(state: &watch::Sender<AppState>, action: Action) {
    state.send_modify(|s| update(s, action));
}

fn spawn_fetch(
    state: &Arc<watch::Sender<AppState>>,
    source: Arc<dyn IndicatorSource>,
) -> Option<AbortHandle> {
    let runtime = match Handle::try_current() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("Cannot fetch dollar value from {}: {}", source.name(), e);
            apply(state, Action::IndicatorFailed(e.to_string()));
            return None;
        }
    };

    info!("Spawning indicator fetch ({})", source.name());

    let state: Weak<watch::Sender<AppState>> = Arc::downgrade(state);
    let handle = runtime.spawn(async move {
        let action = match source.fetch_indicators().await {
            Ok(reading) => {
                info!("Dollar value from {}: {}", source.name(), reading.dollar_value);
                Action::IndicatorLoaded(reading)
            }
            Err(e) => {
                warn!("Failed to fetch dollar value from {}: {}", source.name(), e);
                Action::IndicatorFailed(e.to_string())
            }
        };

        match state.upgrade() {
            Some(state) => apply(&state, action),
            None => debug!("Store dropped before the indicator arrived, discarding"),
        }
    });

    Some(handle.abort_handle())
}
