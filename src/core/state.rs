//! # Application State
//!
//! Everything a UI needs to render the planner, in one plain value.
//!
//! ```text
//! AppState
//! ├── places: Vec<Place>                  // display order = insertion order
//! ├── current_screen: Screen              // PlaceList | PlaceDetail | Map
//! ├── selected_place: Option<Place>       // stale after leaving the screen
//! ├── exchange_rate: f64                  // CLP per USD, 0 until fetched
//! ├── indicator: IndicatorStatus          // Pending | Loaded | Failed
//! └── rate_updated_at: Option<DateTime>   // when the rate was fetched
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Utc};

use crate::core::place::Place;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    PlaceList,
    PlaceDetail,
    Map,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::PlaceList, Screen::PlaceDetail, Screen::Map];
}

/// Progress of the one indicator fetch a store performs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum IndicatorStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub places: Vec<Place>,
    pub current_screen: Screen,
    pub selected_place: Option<Place>,
    pub exchange_rate: f64,
    pub indicator: IndicatorStatus,
    pub rate_updated_at: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The place the map centers on: the head of the list.
    pub fn map_focus(&self) -> Option<&Place> {
        self.places.first()
    }

    pub fn lodging_cost_usd(&self, place: &Place) -> Option<f64> {
        place.lodging_cost_usd(self.exchange_rate)
    }

    /// Index of the first place called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.places.iter().position(|p| p.name == name)
    }
}
