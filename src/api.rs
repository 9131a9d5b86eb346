//! Backend API Bindings
//!
//! One fetch wrapper per backend endpoint, returning `Result<T, String>`.
//! Errors carry a message for the caller's error-display state; callers
//! decide visibility (banner, inline, or silent).

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::{
    AddReviewResponse, Recipe, RecipeListResponse, ReviewsResponse, ScrapeResponse,
    SuggestionsResponse, TopRatedResponse, TrendingResponse,
};

/// Which suggestion endpoint a search field talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestKind {
    Recipe,
    Ingredient,
}

impl SuggestKind {
    fn path(self) -> &'static str {
        match self {
            SuggestKind::Recipe => "/suggest-recipes",
            SuggestKind::Ingredient => "/suggest-ingredients",
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct RecordViewBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct AddReviewBody<'a> {
    recipe_name: &'a str,
    username: &'a str,
    rating: u8,
    comment: &'a str,
}

#[derive(Serialize)]
struct ScrapeUrlsBody<'a> {
    urls: &'a [String],
}

#[derive(Serialize)]
struct ScrapeSearchBody<'a> {
    search_urls: &'a [String],
    max_recipes: u32,
}

// ========================
// Endpoints
// ========================

/// List recipes, optionally filtered by name and/or ingredient.
/// Empty filters are omitted from the query string.
pub async fn fetch_recipes(name: &str, ingredient: &str) -> Result<Vec<Recipe>, String> {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if !name.is_empty() {
        params.push(("name", name));
    }
    if !ingredient.is_empty() {
        params.push(("ingredient", ingredient));
    }
    let resp = Request::get("/get-greatlakes")
        .query(params)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: RecipeListResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.recipes)
}

pub async fn suggest(kind: SuggestKind, q: &str) -> Result<Vec<String>, String> {
    let resp = Request::get(kind.path())
        .query([("q", q)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: SuggestionsResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.suggestions)
}

/// Fire-and-forget view record. The response body is ignored.
pub async fn record_view(name: &str) -> Result<(), String> {
    Request::post("/record-view")
        .json(&RecordViewBody { name })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn fetch_trending(limit: u32) -> Result<TrendingResponse, String> {
    let limit = limit.to_string();
    let resp = Request::get("/trending")
        .query([("limit", limit.as_str())])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_reviews(recipe_name: &str) -> Result<ReviewsResponse, String> {
    let escaped = utf8_percent_encode(recipe_name, NON_ALPHANUMERIC).to_string();
    let resp = Request::get(&format!("/get-reviews/{}", escaped))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn add_review(
    recipe_name: &str,
    username: &str,
    rating: u8,
    comment: &str,
) -> Result<AddReviewResponse, String> {
    let resp = Request::post("/add-review")
        .json(&AddReviewBody {
            recipe_name,
            username,
            rating,
            comment,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn auto_scrape() -> Result<ScrapeResponse, String> {
    let resp = Request::get("/auto-scrape")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn scrape_recipe_urls(urls: &[String]) -> Result<ScrapeResponse, String> {
    let resp = Request::post("/scrape-native-recipes")
        .json(&ScrapeUrlsBody { urls })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn scrape_search_results(
    search_urls: &[String],
    max_recipes: u32,
) -> Result<ScrapeResponse, String> {
    let resp = Request::post("/scrape-search-results")
        .json(&ScrapeSearchBody {
            search_urls,
            max_recipes,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_top_rated() -> Result<TopRatedResponse, String> {
    let resp = Request::get("/get-top-rated-recipes")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json().await.map_err(|e| e.to_string())
}
