//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::error::LookupError;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::QueryChange(query) => {
            if query == state.query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit => {
            // One request in flight at a time
            if state.lookup.is_loading() {
                return DispatchResult::unchanged();
            }

            if state.query.trim().is_empty() {
                state.lookup = DataResource::Failed(LookupError::Validation.to_string());
                return DispatchResult::changed();
            }

            state.request_seq += 1;
            state.lookup = DataResource::Loading;
            state.tick_count = 0;
            state.loading_anim_ticks_remaining = 0;
            DispatchResult::changed_with(Effect::FetchWeather {
                seq: state.request_seq,
                city: state.query.clone(),
            })
        }

        Action::LookupDidLoad { seq, data } => {
            if seq != state.request_seq || !state.lookup.is_loading() {
                return DispatchResult::unchanged();
            }
            state.lookup = DataResource::Loaded(data);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::LookupDidError { seq, error } => {
            if seq != state.request_seq || !state.lookup.is_loading() {
                return DispatchResult::unchanged();
            }
            state.lookup = DataResource::Failed(error.to_string());
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::LookupReset => {
            if !state.has_content() {
                return DispatchResult::unchanged();
            }
            state.query.clear();
            // An in-flight request keeps loading and still resolves
            if !state.lookup.is_loading() {
                state.lookup = DataResource::Empty;
            }
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}
