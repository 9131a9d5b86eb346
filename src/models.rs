//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};

/// Recipe data structure (matches backend rows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Included in list responses; 0.0 when unrated.
    #[serde(default)]
    pub average_rating: f64,
}

/// A single recipe review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    /// 1–5, fractional on the wire
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    /// Epoch seconds
    #[serde(default)]
    pub timestamp: f64,
}

/// One row of the trending panel; rank is positional, not stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub name: String,
    pub views: u64,
}

// ========================
// Response Envelopes
// ========================

/// `/get-greatlakes` wraps its recipe list under a region key
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeListResponse {
    #[serde(rename = "Great Lakes", default)]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    pub success: bool,
    #[serde(default)]
    pub trending: Vec<TrendingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsResponse {
    pub success: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddReviewResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Shared by `/auto-scrape` and both bulk-scrape endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub new_recipes: Vec<Recipe>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopRatedResponse {
    pub success: bool,
    /// `(name, average rating)` pairs, best first
    #[serde(default)]
    pub top_recipes: Vec<(String, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_list_envelope() {
        let json = r#"{
            "Great Lakes": [
                {"id": 1, "name": "Three Sisters Soup",
                 "ingredients": ["corn", "beans", "squash"],
                 "instructions": ["Simmer."],
                 "average_rating": 4.5}
            ],
            "message": "All recipes"
        }"#;
        let resp: RecipeListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.recipes.len(), 1);
        assert_eq!(resp.recipes[0].name, "Three Sisters Soup");
        assert_eq!(resp.recipes[0].ingredients.len(), 3);
    }

    #[test]
    fn test_recipe_list_envelope_missing_key() {
        let resp: RecipeListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.recipes.is_empty());
    }

    #[test]
    fn test_top_rated_pairs() {
        let json = r#"{"success": true, "top_recipes": [["Wojapi", 4.8], ["Bannock", 4.2]]}"#;
        let resp: TopRatedResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.top_recipes[0].0, "Wojapi");
        assert!((resp.top_recipes[1].1 - 4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_review_defaults() {
        let json = r#"{"username": "kim", "rating": 5}"#;
        let rev: Review = serde_json::from_str(json).unwrap();
        assert_eq!(rev.comment, "");
        assert_eq!(rev.timestamp, 0.0);
    }
}
