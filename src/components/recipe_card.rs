//! Recipe Card Component
//!
//! Collapsible card for one recipe. The parent owns the selection
//! state machine; the card renders its slice of it and the detail
//! panels inside an open card.

use leptos::prelude::*;

use crate::checklist::IngredientChecklist;
use crate::components::{AddReview, RecipeReviews};
use crate::models::Recipe;
use crate::selection::{DetailPanel, Selection};

/// One recipe card
///
/// Props:
/// - index: position in the loaded recipe list (drives selection)
/// - on_select: parent handler running the selection state machine and
///   the view-record side effect
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    index: usize,
    selection: RwSignal<Selection>,
    checklist: RwSignal<IngredientChecklist>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let header_name = recipe.name.clone();
    let recipe = StoredValue::new(recipe);

    let is_open = move || selection.get().is_open(index);

    view! {
        <div class="recipe-card">
            <div class="recipe-header" on:click=move |_| on_select.run(index)>
                <h2>{header_name}</h2>
                <span>{move || if is_open() { "▲" } else { "▼" }}</span>
            </div>

            <Show when=is_open>
                <div class="recipe-details">
                    <div class="recipe-actions">
                        <button on:click=move |_| {
                            selection.update(|s| s.show_panel(DetailPanel::Reviews))
                        }>
                            "Reviews"
                        </button>
                        <button on:click=move |_| {
                            selection.update(|s| s.show_panel(DetailPanel::AddReview))
                        }>
                            "Add Review"
                        </button>
                        <button on:click=move |_| on_select.run(index)>"Close"</button>
                    </div>

                    {move || match selection.get().panel() {
                        DetailPanel::Reviews => view! {
                            <RecipeReviews recipe_name=recipe.with_value(|r| r.name.clone()) />
                        }.into_any(),
                        DetailPanel::AddReview => view! {
                            <AddReview
                                recipe_name=recipe.with_value(|r| r.name.clone())
                                on_review_added=move |_: ()| {
                                    selection.update(|s| s.show_panel(DetailPanel::Reviews))
                                }
                            />
                        }.into_any(),
                        DetailPanel::Ingredients => {
                            let id = recipe.with_value(|r| r.id);
                            let ingredients = recipe.with_value(|r| r.ingredients.clone());
                            let instructions = recipe.with_value(|r| r.instructions.clone());
                            view! {
                                <div>
                                    <div class="ingredients">
                                        <h3>"Ingredients"</h3>
                                        <ul>
                                            {ingredients.into_iter().enumerate().map(|(i, ing)| {
                                                let done = move || {
                                                    checklist.get().is_checked(id, i)
                                                };
                                                view! {
                                                    <li class="ingredient-row">
                                                        <label>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=done
                                                                on:change=move |_| {
                                                                    checklist.update(|c| c.toggle(id, i))
                                                                }
                                                            />
                                                            <span class:checked-off=done>{ing}</span>
                                                        </label>
                                                    </li>
                                                }
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                    <div class="instructions">
                                        <h3>"Instructions"</h3>
                                        <ol>
                                            {instructions.into_iter()
                                                .map(|step| view! { <li>{step}</li> })
                                                .collect_view()}
                                        </ol>
                                    </div>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
