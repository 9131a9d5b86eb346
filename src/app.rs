//! Root Application Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SuggestKind};
use crate::checklist::IngredientChecklist;
use crate::components::{
    AutoScraper, PantryTracker, RecipeCard, RecipeScraper, SuggestInput, TopRatedRecipes,
    TrendingPanel,
};
use crate::context::AppContext;
use crate::ingredients::unique_ingredients;
use crate::models::Recipe;
use crate::selection::Selection;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(signal(0u32), signal(0u32));
    provide_context(ctx);

    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let search_name = RwSignal::new(String::new());
    let search_ingredient = RwSignal::new(String::new());

    let selection = RwSignal::new(Selection::default());
    let checklist = RwSignal::new(IngredientChecklist::default());

    let (show_pantry, set_show_pantry) = signal(false);
    let (show_scraper, set_show_scraper) = signal(false);
    let (show_top_rated, set_show_top_rated) = signal(false);

    // Reload whenever the context trigger bumps (initial run included).
    Effect::new(move |_| {
        ctx.recipes_reload.get();
        let name = search_name.get_untracked().trim().to_string();
        let ingredient = search_ingredient.get_untracked().trim().to_string();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_recipes(&name, &ingredient).await {
                Ok(list) => {
                    if list.is_empty() {
                        set_error.set(Some("No recipes found.".to_string()));
                    }
                    set_recipes.set(list);
                    selection.set(Selection::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("recipe fetch failed: {e}").into());
                    set_error.set(Some("Backend unreachable.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    // Selection state machine plus the once-per-open view record. The
    // trending panel is nudged after the record attempt settles either way.
    let on_select = move |index: usize| {
        let name = recipes.with_untracked(|list| list.get(index).map(|r| r.name.clone()));
        let Some(name) = name else { return };
        let record = selection
            .try_update(|s| s.select(index))
            .unwrap_or(false);
        if record {
            spawn_local(async move {
                if let Err(e) = api::record_view(&name).await {
                    web_sys::console::error_1(&format!("record view failed: {e}").into());
                }
                ctx.bump_trending();
            });
        }
    };

    let pantry_ingredients = Memo::new(move |_| unique_ingredients(&recipes.get()));

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.reload_recipes();
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Great Lakes Recipes"</h1>
                <div class="header-actions">
                    <button on:click=move |_| set_show_pantry.update(|v| *v = !*v)>
                        {move || if show_pantry.get() { "Hide Pantry" } else { "Pantry" }}
                    </button>
                    <button on:click=move |_| set_show_scraper.update(|v| *v = !*v)>
                        {move || if show_scraper.get() { "Hide Scraper" } else { "Scraper" }}
                    </button>
                    <button on:click=move |_| set_show_top_rated.update(|v| *v = !*v)>
                        {move || if show_top_rated.get() { "Hide Top Rated" } else { "Top Rated" }}
                    </button>
                </div>
            </header>

            <form class="search-bar" on:submit=on_search>
                <SuggestInput
                    kind=SuggestKind::Recipe
                    placeholder="Search recipes..."
                    value=search_name
                />
                <SuggestInput
                    kind=SuggestKind::Ingredient
                    placeholder="Filter by ingredient..."
                    value=search_ingredient
                />
                <button type="submit">"Search"</button>
            </form>

            <AutoScraper on_scraping_complete=move |_: ()| ctx.reload_recipes() />

            <Show when=move || show_scraper.get()>
                <RecipeScraper />
            </Show>
            <Show when=move || show_top_rated.get()>
                <TopRatedRecipes />
            </Show>
            <Show when=move || show_pantry.get()>
                <PantryTracker
                    ingredients=pantry_ingredients
                    on_close=move |_: ()| set_show_pantry.set(false)
                />
            </Show>

            <div class="main-layout">
                <div class="recipe-list">
                    {move || {
                        if loading.get() {
                            view! { <p class="status">"Loading recipes..."</p> }.into_any()
                        } else if let Some(msg) = error.get() {
                            view! { <p class="status error">{msg}</p> }.into_any()
                        } else {
                            recipes
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, recipe)| {
                                    view! {
                                        <RecipeCard
                                            recipe=recipe
                                            index=index
                                            selection=selection
                                            checklist=checklist
                                            on_select=on_select
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <aside class="sidebar">
                    <TrendingPanel />
                </aside>
            </div>
        </div>
    }
}
