//! Auto-Scraper Banner
//!
//! One-shot trigger for the backend's automatic scrape. A latch keeps
//! repeat clicks from double-requesting; failure offers a retry that
//! resets the latch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

#[component]
pub fn AutoScraper(#[prop(into)] on_scraping_complete: Callback<()>) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let has_scraped = RwSignal::new(false);

    let trigger = move || {
        if has_scraped.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_message.set("Automatically scraping Native American recipes...".to_string());
        set_error.set(None);

        spawn_local(async move {
            match api::auto_scrape().await {
                Ok(resp) if resp.success => {
                    set_message.set(format!(
                        "Successfully added {} new Native American recipes!",
                        resp.new_recipes.len()
                    ));
                    on_scraping_complete.run(());
                }
                Ok(_) => set_error.set(Some("Failed to scrape recipes".to_string())),
                Err(_) => {
                    set_error.set(Some("Error connecting to server. Please try again.".to_string()))
                }
            }
            set_loading.set(false);
            has_scraped.set(true);
        });
    };

    let retry = move |_| {
        has_scraped.set(false);
        trigger();
    };

    view! {
        <div class="auto-scraper">
            <Show when=move || loading.get()>
                <div class="loading-message">
                    <div class="spinner"></div>
                    <p>{move || message.get()}</p>
                </div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_some()>
                <div class="error-message">
                    <p>{move || error.get().unwrap_or_default()}</p>
                    <button class="retry-button" on:click=retry>"Retry Scraping"</button>
                </div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none() && !message.get().is_empty()>
                <div class="success-message">
                    <p>{move || message.get()}</p>
                    <button class="scrape-again-button" on:click=retry>"Scrape Again"</button>
                </div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none() && message.get().is_empty()>
                <button class="scrape-button" on:click=move |_| trigger()>"Scrape Recipes"</button>
            </Show>
        </div>
    }
}
