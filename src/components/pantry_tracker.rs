//! Pantry Tracker Component
//!
//! Quantity inputs for every ingredient in the loaded recipes, backed
//! by the persisted pantry ledger. Rows come from the recipe list;
//! only quantities are persisted.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::pantry::{BrowserStore, PantryLedger};

/// Pantry panel
///
/// Props:
/// - ingredients: deduplicated sorted ingredient names from the loaded recipes
/// - on_close: callback for the panel's close button
#[component]
pub fn PantryTracker(
    #[prop(into)] ingredients: Signal<Vec<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // Hydrated once per mount; every mutation persists inside the
    // update, before the signal change becomes visible.
    let ledger = RwSignal::new(PantryLedger::load(BrowserStore));

    view! {
        <div class="pantry-tracker">
            <div class="pantry-header">
                <h2>"Your Pantry"</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"✕"</button>
            </div>

            <div class="pantry-body">
                {move || {
                    let names = ingredients.get();
                    if names.is_empty() {
                        view! { <p class="empty-note">"No ingredients loaded yet."</p> }.into_any()
                    } else {
                        view! {
                            <div>
                                {names.into_iter().map(|name| {
                                    let shown = name.clone();
                                    let name_for_input = name.clone();
                                    view! {
                                        <div class="pantry-row">
                                            <span class="pantry-name">{shown}</span>
                                            <input
                                                type="number"
                                                min="0"
                                                class="pantry-input"
                                                prop:value=move || {
                                                    ledger.with(|l| {
                                                        l.quantity(&name)
                                                            .map(|q| q.to_string())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target
                                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                                        .unwrap();
                                                    let qty = input.value().parse::<i64>().unwrap_or(0);
                                                    ledger.update(|l| {
                                                        l.set_quantity(&name_for_input, qty)
                                                    });
                                                }
                                            />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
