//! Top-Rated Recipes Panel
//!
//! One-shot load of the best-rated recipes, ranked positionally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::stars::star_string;

#[component]
pub fn TopRatedRecipes() -> impl IntoView {
    let (top_recipes, set_top_recipes) = signal(Vec::<(String, f64)>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_top_rated().await {
            Ok(resp) if resp.success => set_top_recipes.set(resp.top_recipes),
            Ok(_) => set_error.set(Some("Failed to load top rated recipes".to_string())),
            Err(_) => {
                set_error.set(Some("Error connecting to server. Please try again.".to_string()))
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="top-rated-recipes">
            <h2>"Top Rated Native American Recipes"</h2>

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-top-recipes">
                            <div class="spinner"></div>
                            <p>"Loading top recipes..."</p>
                        </div>
                    }.into_any()
                } else if let Some(msg) = error.get() {
                    view! { <div class="error-message">{msg}</div> }.into_any()
                } else if top_recipes.get().is_empty() {
                    view! {
                        <p class="no-top-recipes">
                            "No rated recipes yet. Be the first to rate a recipe!"
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <div class="top-recipes-list">
                            {top_recipes.get().into_iter().enumerate().map(|(idx, (name, rating))| {
                                view! {
                                    <div class="top-recipe-item">
                                        <div class="top-recipe-rank">{idx + 1}</div>
                                        <div class="top-recipe-info">
                                            <div class="top-recipe-name">{name}</div>
                                            <div class="top-recipe-rating">
                                                {star_string(rating)}
                                                <span class="rating-value">
                                                    {format!("({:.1})", rating)}
                                                </span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
