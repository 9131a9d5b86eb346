//! Add Review Form
//!
//! Star selector (1–5 only; out-of-range values cannot be built from
//! the UI), required username, optional comment. On success the form
//! shows a confirmation briefly, then hands control back so the parent
//! can switch to the reviews panel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;

/// How long the "Review submitted!" confirmation stays visible before
/// the completion callback runs
const CONFIRMATION_MS: u32 = 1_200;

#[component]
pub fn AddReview(
    recipe_name: String,
    #[prop(into)] on_review_added: Callback<()>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (rating, set_rating) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (submitted, set_submitted) = signal(false);

    let heading = format!("Add Your Review for {}", recipe_name);
    let recipe_name = StoredValue::new(recipe_name);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        if user.trim().is_empty() {
            return;
        }
        let name = recipe_name.get_value();
        let stars = rating.get();
        let text = comment.get();

        set_submitting.set(true);
        set_error.set(None);
        set_submitted.set(false);

        spawn_local(async move {
            match api::add_review(&name, &user, stars, &text).await {
                Ok(resp) if resp.success => {
                    set_submitted.set(true);
                    set_username.set(String::new());
                    set_rating.set(5);
                    set_comment.set(String::new());
                    set_submitting.set(false);
                    // Let the confirmation register before switching panels.
                    TimeoutFuture::new(CONFIRMATION_MS).await;
                    on_review_added.run(());
                }
                Ok(resp) => {
                    let reason = resp.error.unwrap_or_default();
                    set_error.set(Some(format!("Server refused review: {}", reason)));
                    set_submitting.set(false);
                }
                Err(_) => {
                    set_error.set(Some("No response from server".to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="add-review">
            <h3>{heading}</h3>

            <Show when=move || submitted.get()>
                <div class="success-message">"Review submitted!"</div>
            </Show>

            <form on:submit=on_submit>
                <label>"Your Name"</label>
                <input
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                />

                <label>"Your Rating"</label>
                <div class="star-rating">
                    {(1u8..=5).map(|star| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if star <= rating.get() { "star filled" } else { "star" }
                                }
                                on:click=move |_| set_rating.set(star)
                            >
                                {move || if star <= rating.get() { "★" } else { "☆" }}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <label>"Your Comments (optional)"</label>
                <textarea
                    rows="4"
                    prop:value=move || comment.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_comment.set(input.value());
                    }
                ></textarea>

                {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting…" } else { "Submit Review" }}
                </button>
            </form>
        </div>
    }
}
