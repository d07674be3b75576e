//! # Core Application Logic
//!
//! This module contains the planner's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Place (records)      │
//!                    │  • AppState (app data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • PlaceStore (session) │
//!                    └───────────┬─────────────┘
//!                                │ watch::Receiver<AppState>
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Mobile    │      │    CLI     │      │   Tests    │
//!     │  adapter   │      │ (main.rs)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`place`]: `Place`, `PlaceForm` and the numeric coercion rules
//! - [`state`]: The `AppState` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`store`]: `PlaceStore`, the session object UIs subscribe to
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod place;
pub mod state;
pub mod store;

pub use action::Action;
pub use place::{Place, PlaceForm, ResourceRef};
pub use state::{AppState, IndicatorStatus, Screen};
pub use store::PlaceStore;
