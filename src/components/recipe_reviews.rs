//! Recipe Reviews Panel
//!
//! Loads reviews for one recipe, shows the average rating and a
//! highest/lowest sort toggle.

use std::cmp::Ordering;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Review;
use crate::stars::star_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    #[default]
    Highest,
    Lowest,
}

/// Sort reviews by rating; ties keep server order.
pub fn sort_reviews(mut reviews: Vec<Review>, filter: ReviewFilter) -> Vec<Review> {
    reviews.sort_by(|a, b| {
        let ord = a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal);
        match filter {
            ReviewFilter::Highest => ord.reverse(),
            ReviewFilter::Lowest => ord,
        }
    });
    reviews
}

/// Local date string for an epoch-seconds timestamp
fn format_date(epoch_seconds: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_seconds * 1000.0));
    String::from(date.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
}

#[component]
pub fn RecipeReviews(recipe_name: String) -> impl IntoView {
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (average, set_average) = signal(0.0f64);
    let (filter, set_filter) = signal(ReviewFilter::Highest);

    let heading = format!("Reviews for {}", recipe_name);

    spawn_local(async move {
        match api::fetch_reviews(&recipe_name).await {
            Ok(resp) if resp.success => {
                set_reviews.set(resp.reviews);
                set_average.set(resp.average_rating);
            }
            Ok(_) => set_error.set(Some("Failed to load reviews".to_string())),
            Err(_) => {
                set_error.set(Some("Error connecting to server. Please try again.".to_string()))
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="recipe-reviews">
            <h3>{heading}</h3>

            {move || {
                let avg = average.get();
                if avg > 0.0 {
                    Some(view! {
                        <div class="average-rating">
                            <p>{format!("Average Rating: {:.1}", avg)}</p>
                            <div class="stars">{star_string(avg)}</div>
                        </div>
                    })
                } else {
                    None
                }
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-reviews">
                            <div class="spinner"></div>
                            <p>"Loading reviews..."</p>
                        </div>
                    }.into_any()
                } else if let Some(msg) = error.get() {
                    view! { <div class="error-message">{msg}</div> }.into_any()
                } else if reviews.get().is_empty() {
                    view! {
                        <p class="no-reviews">
                            "No reviews yet. Be the first to review this recipe!"
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <div>
                            <div class="review-filter">
                                <label>"Filter by: "</label>
                                <button
                                    class=move || {
                                        if filter.get() == ReviewFilter::Highest { "active" } else { "" }
                                    }
                                    on:click=move |_| set_filter.set(ReviewFilter::Highest)
                                >
                                    "Highest"
                                </button>
                                <button
                                    class=move || {
                                        if filter.get() == ReviewFilter::Lowest { "active" } else { "" }
                                    }
                                    on:click=move |_| set_filter.set(ReviewFilter::Lowest)
                                >
                                    "Lowest"
                                </button>
                            </div>

                            <div class="reviews-list">
                                {move || {
                                    sort_reviews(reviews.get(), filter.get())
                                        .into_iter()
                                        .map(|review| {
                                            view! {
                                                <div class="review-item">
                                                    <div class="review-header">
                                                        <div class="review-user">{review.username}</div>
                                                        <div class="review-date">
                                                            {format_date(review.timestamp)}
                                                        </div>
                                                    </div>
                                                    <div class="review-rating">
                                                        {star_string(review.rating)}
                                                    </div>
                                                    {(!review.comment.is_empty()).then(|| view! {
                                                        <div class="review-comment">{review.comment.clone()}</div>
                                                    })}
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(username: &str, rating: f64) -> Review {
        Review {
            username: username.to_string(),
            rating,
            comment: String::new(),
            timestamp: 0.0,
        }
    }

    #[test]
    fn test_sort_highest_first() {
        let sorted = sort_reviews(
            vec![review("a", 2.0), review("b", 5.0), review("c", 4.0)],
            ReviewFilter::Highest,
        );
        let ratings: Vec<f64> = sorted.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5.0, 4.0, 2.0]);
    }

    #[test]
    fn test_sort_lowest_first() {
        let sorted = sort_reviews(
            vec![review("a", 3.0), review("b", 1.0)],
            ReviewFilter::Lowest,
        );
        assert_eq!(sorted[0].username, "b");
    }

    #[test]
    fn test_ties_keep_server_order() {
        let sorted = sort_reviews(
            vec![review("first", 4.0), review("second", 4.0)],
            ReviewFilter::Highest,
        );
        assert_eq!(sorted[0].username, "first");
        assert_eq!(sorted[1].username, "second");
    }
}
