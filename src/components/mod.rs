mod add_review;
mod auto_scraper;
mod pantry_tracker;
mod recipe_card;
mod recipe_reviews;
mod recipe_scraper;
mod suggest_input;
mod top_rated;
mod trending_panel;

pub use add_review::AddReview;
pub use auto_scraper::AutoScraper;
pub use pantry_tracker::PantryTracker;
pub use recipe_card::RecipeCard;
pub use recipe_reviews::RecipeReviews;
pub use recipe_scraper::RecipeScraper;
pub use suggest_input::SuggestInput;
pub use top_rated::TopRatedRecipes;
pub use trending_panel::TrendingPanel;
