//! Actions - user intents and async outcomes

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// City input text changed
    QueryChange(String),

    // ===== Lookup category =====
    /// Intent: look up the current query (validates, then triggers async task)
    LookupSubmit,

    /// Result: request `seq` produced weather
    LookupDidLoad { seq: u64, data: WeatherResult },

    /// Result: request `seq` failed
    LookupDidError { seq: u64, error: LookupError },

    /// Clear query, result and error
    LookupReset,

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}
