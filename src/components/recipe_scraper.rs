//! Bulk Recipe Scraper
//!
//! Two-tab form: individual recipe URLs, or search-result pages with a
//! max-recipes bound. An empty URL list is a validation error caught
//! before any request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::ScrapeResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrapeTab {
    Individual,
    Search,
}

const PREDEFINED_URLS: &[&str] = &[
    "https://www.allrecipes.com/recipe/6880/indian-fry-bread/",
    "https://www.allrecipes.com/recipe/141828/traditional-bannock/",
    "https://www.allrecipes.com/recipe/214831/native-american-wild-rice/",
    "https://www.allrecipes.com/recipe/254402/three-sisters-soup/",
    "https://www.allrecipes.com/recipe/222144/native-american-succotash/",
    "https://www.food.com/recipe/pemmican-native-american-survival-food-104815",
    "https://www.food.com/recipe/wojapi-native-american-pudding-253990",
    "https://www.tasteofhome.com/recipes/wild-rice-with-dried-blueberries/",
    "https://www.tasteofhome.com/recipes/wild-rice-mushroom-soup/",
    "https://www.tasteofhome.com/recipes/wild-rice-stuffed-squash/",
];

const PREDEFINED_SEARCH_URLS: &[&str] = &[
    "https://www.food.com/search/native+american",
    "https://www.allrecipes.com/search?q=native+american",
    "https://www.foodnetwork.com/search/native-american-",
];

/// Newline-split, trimmed, empties dropped
fn split_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[component]
pub fn RecipeScraper() -> impl IntoView {
    let (urls, set_urls) = signal(String::new());
    let (search_urls, set_search_urls) = signal(String::new());
    let (max_recipes, set_max_recipes) = signal(50u32);
    let (active_tab, set_active_tab) = signal(ScrapeTab::Individual);
    let (loading, set_loading) = signal(false);
    let (result, set_result) = signal(None::<ScrapeResponse>);
    let (error, set_error) = signal(None::<String>);

    let load_predefined = move |_| match active_tab.get() {
        ScrapeTab::Individual => set_urls.set(PREDEFINED_URLS.join("\n")),
        ScrapeTab::Search => set_search_urls.set(PREDEFINED_SEARCH_URLS.join("\n")),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_result.set(None);

        let tab = active_tab.get();
        let list = match tab {
            ScrapeTab::Individual => split_urls(&urls.get()),
            ScrapeTab::Search => split_urls(&search_urls.get()),
        };
        if list.is_empty() {
            let msg = match tab {
                ScrapeTab::Individual => "Please enter at least one URL",
                ScrapeTab::Search => "Please enter at least one search URL",
            };
            set_error.set(Some(msg.to_string()));
            return;
        }
        let max = max_recipes.get();

        set_loading.set(true);
        spawn_local(async move {
            let response = match tab {
                ScrapeTab::Individual => api::scrape_recipe_urls(&list).await,
                ScrapeTab::Search => api::scrape_search_results(&list, max).await,
            };
            match response {
                Ok(resp) if resp.success => set_result.set(Some(resp)),
                Ok(resp) => set_error.set(Some(
                    resp.error
                        .unwrap_or_else(|| "Failed to scrape recipes".to_string()),
                )),
                Err(_) => {
                    set_error.set(Some("Error connecting to server. Please try again.".to_string()))
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="recipe-scraper">
            <h2>"Bulk Recipe Scraper"</h2>
            <p>"Add URLs to scrape Native American recipes and add them to the database."</p>

            <div class="tab-buttons">
                <button
                    class=move || {
                        if active_tab.get() == ScrapeTab::Individual {
                            "tab-button active"
                        } else {
                            "tab-button"
                        }
                    }
                    on:click=move |_| set_active_tab.set(ScrapeTab::Individual)
                >
                    "Individual Recipe URLs"
                </button>
                <button
                    class=move || {
                        if active_tab.get() == ScrapeTab::Search {
                            "tab-button active"
                        } else {
                            "tab-button"
                        }
                    }
                    on:click=move |_| set_active_tab.set(ScrapeTab::Search)
                >
                    "Search Results Pages"
                </button>
            </div>

            <button class="load-predefined-button" on:click=load_predefined>
                "Load Predefined URLs"
            </button>

            <form class="scraper-form" on:submit=on_submit>
                {move || match active_tab.get() {
                    ScrapeTab::Individual => view! {
                        <textarea
                            class="urls-textarea"
                            rows="10"
                            placeholder="Enter recipe URLs, one per line"
                            prop:value=move || urls.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_urls.set(input.value());
                            }
                        ></textarea>
                    }.into_any(),
                    ScrapeTab::Search => view! {
                        <div>
                            <textarea
                                class="urls-textarea"
                                rows="5"
                                placeholder="Enter search URLs, one per line"
                                prop:value=move || search_urls.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_search_urls.set(input.value());
                                }
                            ></textarea>
                            <div class="max-recipes">
                                <label for="max-recipes">"Maximum recipes to scrape:"</label>
                                <input
                                    id="max-recipes"
                                    type="number"
                                    min="1"
                                    max="200"
                                    class="max-recipes-input"
                                    prop:value=move || max_recipes.get().to_string()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        if let Ok(v) = input.value().parse::<u32>() {
                                            set_max_recipes.set(v.clamp(1, 200));
                                        }
                                    }
                                />
                            </div>
                        </div>
                    }.into_any(),
                }}

                <button type="submit" class="scrape-button" disabled=move || loading.get()>
                    {move || if loading.get() { "Scraping..." } else { "Scrape Recipes" }}
                </button>
            </form>

            {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

            {move || {
                result.get().map(|resp| {
                    let names: Vec<String> =
                        resp.new_recipes.iter().map(|r| r.name.clone()).collect();
                    view! {
                        <div class="result-message">
                            <h3>"Scraping Complete!"</h3>
                            <p>{resp.message.clone()}</p>
                            {(!names.is_empty()).then(|| view! {
                                <div class="new-recipes">
                                    <h4>"Newly Added Recipes:"</h4>
                                    <ul>
                                        {names.into_iter()
                                            .map(|name| view! { <li>{name}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })}
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_urls_trims_and_drops_blanks() {
        let raw = "  https://a.example/one \n\n https://a.example/two\n   \n";
        assert_eq!(
            split_urls(raw),
            vec!["https://a.example/one", "https://a.example/two"]
        );
    }

    #[test]
    fn test_split_urls_empty_input() {
        assert!(split_urls("").is_empty());
        assert!(split_urls("   \n \n").is_empty());
    }
}
