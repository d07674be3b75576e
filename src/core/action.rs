//! # Actions
//!
//! Everything that can happen in the planner becomes an `Action`.
//! User taps a place card? That's `Action::OpenPlace(place)`.
//! The dollar value arrives? That's `Action::IndicatorLoaded(reading)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates it in place. No side effects here. I/O happens in the store.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! None of these can fail. Unknown names, blank coordinates and bad numbers
//! all degrade to a no-op or a zero.

use log::debug;

use crate::core::place::{Place, PlaceForm, parse_f64_or_default};
use crate::core::state::{AppState, IndicatorStatus, Screen};
use crate::indicator::IndicatorReading;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append to the end of the list. No dedup.
    AddPlace(Place),
    /// Replace the first place with the same name, in position.
    /// Silently ignored when no place has that name.
    UpdatePlace(Place),
    SelectPlace(Place),
    NavigateTo(Screen),
    /// Select a place and show its details.
    OpenPlace(Place),
    /// Show the detail screen for a new place. Does not clear the selection.
    NewPlace,
    /// Detail screen's save button.
    SavePlace(PlaceForm),
    /// Detail screen's map button, with the raw coordinate text.
    PreviewOnMap { latitude: String, longitude: String },
    IndicatorLoaded(IndicatorReading),
    IndicatorFailed(String),
}

pub fn update(state: &mut AppState, action: Action) {
    debug!("update: {:?}", action);
    match action {
        Action::AddPlace(place) => add_place(state, place),
        Action::UpdatePlace(place) => update_place(state, place),
        Action::SelectPlace(place) => state.selected_place = Some(place),
        Action::NavigateTo(screen) => state.current_screen = screen,
        Action::OpenPlace(place) => {
            state.selected_place = Some(place);
            state.current_screen = Screen::PlaceDetail;
        }
        Action::NewPlace => state.current_screen = Screen::PlaceDetail,
        Action::SavePlace(form) => {
            let place = form.to_place();
            if state.selected_place.is_some() {
                update_place(state, place);
            } else {
                add_place(state, place);
            }
            state.current_screen = Screen::PlaceList;
        }
        Action::PreviewOnMap {
            latitude,
            longitude,
        } => {
            if latitude.trim().is_empty() || longitude.trim().is_empty() {
                debug!("Map preview ignored: blank coordinates");
                return;
            }
            let marker = Place::at_coordinates(
                parse_f64_or_default(&latitude),
                parse_f64_or_default(&longitude),
            );
            state.places.insert(0, marker);
            state.current_screen = Screen::Map;
        }
        Action::IndicatorLoaded(reading) => {
            state.exchange_rate = reading.dollar_value;
            state.rate_updated_at = Some(reading.fetched_at);
            state.indicator = IndicatorStatus::Loaded;
        }
        Action::IndicatorFailed(message) => {
            state.indicator = IndicatorStatus::Failed(message);
        }
    }
}

fn add_place(state: &mut AppState, place: Place) {
    state.places.push(place);
}

fn update_place(state: &mut AppState, place: Place) {
    match state.position_of(&place.name) {
        Some(index) => state.places[index] = place,
        None => debug!("No place named {:?}, update skipped", place.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, visit_order: i32) -> Place {
        Place {
            name: name.to_string(),
            visit_order,
            ..Default::default()
        }
    }

    fn names(state: &AppState) -> Vec<&str> {
        state.places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_call_order_and_duplicates() {
        let mut state = AppState::new();
        for name in ["Santiago", "Arica", "Santiago", "Chiloé"] {
            update(&mut state, Action::AddPlace(place(name, 0)));
        }
        assert_eq!(names(&state), vec!["Santiago", "Arica", "Santiago", "Chiloé"]);
    }

    #[test]
    fn test_update_replaces_in_position() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("X", 1)));
        update(&mut state, Action::AddPlace(place("A", 1)));
        update(&mut state, Action::AddPlace(place("Y", 1)));

        update(&mut state, Action::UpdatePlace(place("A", 7)));

        assert_eq!(names(&state), vec!["X", "A", "Y"]);
        assert_eq!(state.places[1].visit_order, 7);
    }

    #[test]
    fn test_update_unknown_name_is_a_no_op() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("A", 1)));
        let before = state.places.clone();

        update(&mut state, Action::UpdatePlace(place("B", 9)));

        assert_eq!(state.places, before);
    }

    #[test]
    fn test_update_only_touches_first_duplicate() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("A", 1)));
        update(&mut state, Action::AddPlace(place("A", 2)));

        update(&mut state, Action::UpdatePlace(place("A", 5)));

        assert_eq!(state.places[0].visit_order, 5);
        assert_eq!(state.places[1].visit_order, 2);
    }

    #[test]
    fn test_navigation_is_unrestricted() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                let mut state = AppState::new();
                state.current_screen = from;
                update(&mut state, Action::NavigateTo(to));
                assert_eq!(state.current_screen, to, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_select_does_not_navigate() {
        let mut state = AppState::new();
        update(&mut state, Action::SelectPlace(place("A", 1)));
        assert_eq!(state.selected_place, Some(place("A", 1)));
        assert_eq!(state.current_screen, Screen::PlaceList);
    }

    #[test]
    fn test_open_place_selects_and_shows_detail() {
        let mut state = AppState::new();
        update(&mut state, Action::OpenPlace(place("A", 1)));
        assert_eq!(state.selected_place, Some(place("A", 1)));
        assert_eq!(state.current_screen, Screen::PlaceDetail);
    }

    #[test]
    fn test_new_place_leaves_selection_stale() {
        let mut state = AppState::new();
        update(&mut state, Action::OpenPlace(place("A", 1)));
        update(&mut state, Action::NavigateTo(Screen::PlaceList));
        update(&mut state, Action::NewPlace);
        assert_eq!(state.current_screen, Screen::PlaceDetail);
        assert_eq!(state.selected_place, Some(place("A", 1)));
    }

    #[test]
    fn test_save_without_selection_appends() {
        let mut state = AppState::new();
        update(&mut state, Action::NewPlace);
        let form = PlaceForm {
            name: "Iquique".to_string(),
            visit_order: "abc".to_string(),
            ..Default::default()
        };

        update(&mut state, Action::SavePlace(form));

        assert_eq!(names(&state), vec!["Iquique"]);
        assert_eq!(state.places[0].visit_order, 0);
        assert_eq!(state.current_screen, Screen::PlaceList);
    }

    #[test]
    fn test_save_with_selection_updates_by_name() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("A", 1)));
        update(&mut state, Action::OpenPlace(place("A", 1)));
        let mut form = PlaceForm::from_place(state.selected_place.as_ref());
        form.visit_order = "4".to_string();

        update(&mut state, Action::SavePlace(form));

        assert_eq!(state.places.len(), 1);
        assert_eq!(state.places[0].visit_order, 4);
        assert_eq!(state.current_screen, Screen::PlaceList);
    }

    #[test]
    fn test_save_with_selection_and_renamed_place_is_dropped() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("A", 1)));
        update(&mut state, Action::OpenPlace(place("A", 1)));
        let mut form = PlaceForm::from_place(state.selected_place.as_ref());
        form.name = "B".to_string();

        update(&mut state, Action::SavePlace(form));

        assert_eq!(names(&state), vec!["A"]);
        assert_eq!(state.current_screen, Screen::PlaceList);
    }

    #[test]
    fn test_preview_on_map_inserts_marker_at_head() {
        let mut state = AppState::new();
        update(&mut state, Action::AddPlace(place("A", 1)));
        update(&mut state, Action::NavigateTo(Screen::PlaceDetail));

        update(
            &mut state,
            Action::PreviewOnMap {
                latitude: "-33.45".to_string(),
                longitude: "oops".to_string(),
            },
        );

        assert_eq!(state.current_screen, Screen::Map);
        assert_eq!(state.places.len(), 2);
        let focus = state.map_focus().unwrap();
        assert_eq!(focus.name, "");
        assert_eq!(focus.latitude, -33.45);
        assert_eq!(focus.longitude, 0.0);
    }

    #[test]
    fn test_preview_on_map_needs_both_coordinates() {
        let mut state = AppState::new();
        update(&mut state, Action::NavigateTo(Screen::PlaceDetail));

        update(
            &mut state,
            Action::PreviewOnMap {
                latitude: "-33.45".to_string(),
                longitude: "  ".to_string(),
            },
        );

        assert!(state.places.is_empty());
        assert_eq!(state.current_screen, Screen::PlaceDetail);
    }

    #[test]
    fn test_indicator_loaded_sets_rate() {
        let mut state = AppState::new();
        let reading = IndicatorReading::new(930.25);
        update(&mut state, Action::IndicatorLoaded(reading.clone()));
        assert_eq!(state.exchange_rate, 930.25);
        assert_eq!(state.rate_updated_at, Some(reading.fetched_at));
        assert_eq!(state.indicator, IndicatorStatus::Loaded);
    }

    #[test]
    fn test_indicator_failed_keeps_rate() {
        let mut state = AppState::new();
        update(&mut state, Action::IndicatorFailed("boom".to_string()));
        assert_eq!(state.exchange_rate, 0.0);
        assert!(state.rate_updated_at.is_none());
        assert_eq!(state.indicator, IndicatorStatus::Failed("boom".to_string()));
    }
}
