//! Suggestion Input Component
//!
//! Search field with debounced autosuggest popover. Two independent
//! instances exist (recipe name, ingredient); each owns its own timer,
//! ticket sequence, and result list.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_outside_click::use_outside_click;
use wasm_bindgen::JsCast;

use crate::api::{self, SuggestKind};
use crate::debounce::{Debouncer, RequestSeq};

/// Quiescence window before a lookup fires
const DEBOUNCE_MS: u32 = 200;

/// Text input with a suggestion popover
///
/// Props:
/// - kind: which suggestion endpoint to query
/// - value: the field's value, owned by the parent form
#[component]
pub fn SuggestInput(
    kind: SuggestKind,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (show, set_show) = signal(false);
    let container = NodeRef::<Div>::new();

    let debouncer = Debouncer::new(DEBOUNCE_MS);
    let seq = RequestSeq::new();
    debouncer.cancel_on_cleanup();

    // Pointer-down outside the container closes the popover; clicks on
    // the input or the list itself do not.
    use_outside_click(container, move || set_show.set(false));

    // Timer-reset debounce: every keystroke replaces the pending task.
    // The task reads the latest value, so only the final text of a
    // burst is looked up.
    let schedule_lookup = {
        let seq = seq.clone();
        move || {
            let seq = seq.clone();
            debouncer.schedule(move || {
                let q = value.get_untracked().trim().to_string();
                if q.is_empty() {
                    seq.invalidate();
                    set_suggestions.set(Vec::new());
                    set_show.set(false);
                    return;
                }
                let ticket = seq.issue();
                spawn_local(async move {
                    match api::suggest(kind, &q).await {
                        Ok(list) => {
                            if seq.is_current(ticket) {
                                set_suggestions.set(list);
                                set_show.set(true);
                            }
                        }
                        // Suggestion failures are silent to the user.
                        Err(_) => {
                            if seq.is_current(ticket) {
                                set_suggestions.set(Vec::new());
                                set_show.set(false);
                            }
                        }
                    }
                });
            });
        }
    };

    // Picking a suggestion settles the field: no pending timer, no
    // lookup for the picked value, in-flight responses discarded.
    let pick = {
        let seq = seq.clone();
        move |picked: String| {
            debouncer.cancel();
            seq.invalidate();
            value.set(picked);
            set_show.set(false);
        }
    };

    view! {
        <div class="suggest-field" node_ref=container>
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    value.set(input.value());
                    schedule_lookup();
                }
                on:focus=move |_| {
                    if !suggestions.get_untracked().is_empty() {
                        set_show.set(true);
                    }
                }
            />

            {move || {
                if !show.get() {
                    view! { <div></div> }.into_any()
                } else {
                    view! {
                        <ul class="suggestions">
                            {suggestions.get().into_iter().map(|s| {
                                let picked = s.clone();
                                let pick = pick.clone();
                                view! {
                                    <li
                                        class="suggestion-item"
                                        on:click=move |_| pick(picked.clone())
                                    >
                                        {s}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
