//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Change signal for the trending panel - read
    pub trending_version: ReadSignal<u32>,
    /// Change signal for the trending panel - write
    set_trending_version: WriteSignal<u32>,
    /// Trigger to reload recipes from backend - read
    pub recipes_reload: ReadSignal<u32>,
    /// Trigger to reload recipes from backend - write
    set_recipes_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        trending_version: (ReadSignal<u32>, WriteSignal<u32>),
        recipes_reload: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            trending_version: trending_version.0,
            set_trending_version: trending_version.1,
            recipes_reload: recipes_reload.0,
            set_recipes_reload: recipes_reload.1,
        }
    }

    /// Notify the trending panel that a view was recorded. Called after
    /// every record attempt settles, whether or not it succeeded.
    pub fn bump_trending(&self) {
        self.set_trending_version.update(|v| *v += 1);
    }

    /// Trigger a reload of the recipe list
    pub fn reload_recipes(&self) {
        self.set_recipes_reload.update(|v| *v += 1);
    }
}
