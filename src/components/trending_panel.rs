//! Trending Panel Component
//!
//! Most-viewed recipes, re-polled every 10 s. Silent refreshes keep
//! stale data visible during the request; only the mount-time load
//! shows the spinner. A bump of the context's trending version forces
//! one extra silent refresh once the initial load has settled.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::TrendingEntry;

const POLL_INTERVAL_MS: u32 = 10_000;
const TRENDING_LIMIT: u32 = 10;

/// Medal colors for the top three ranks, brown below
fn rank_color(index: usize) -> &'static str {
    match index {
        0 => "#ffd700",
        1 => "#c0c0c0",
        2 => "#cd7f32",
        _ => "#8b4513",
    }
}

/// Decides whether an external version bump may fire a silent refresh.
/// Bumps arriving before the mount-time load settles are absorbed by
/// it, so the panel never runs two concurrent initial requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshGate {
    initial_done: bool,
}

impl RefreshGate {
    /// Mark the mount-time load as settled. Bumps after this refresh.
    pub fn settle_initial(&mut self) {
        self.initial_done = true;
    }

    /// True when a bump should trigger a silent refresh.
    pub fn bump(&self) -> bool {
        self.initial_done
    }
}

#[component]
pub fn TrendingPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (list, set_list) = signal(Vec::<TrendingEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let gate = RwSignal::new(RefreshGate::default());
    let cancelled = RwSignal::new(false);

    let load = move |spinner: bool| {
        spawn_local(async move {
            if spinner {
                set_loading.set(true);
            }
            set_error.set(None);
            match api::fetch_trending(TRENDING_LIMIT).await {
                Ok(resp) if resp.success => set_list.set(resp.trending),
                // The held list stays untouched on failure so the next
                // successful poll recovers without a spinner.
                Ok(_) => set_error.set(Some("Server refused request".to_string())),
                Err(_) => set_error.set(Some("Error reaching server.".to_string())),
            }
            if spinner {
                set_loading.set(false);
                gate.update(|g| g.settle_initial());
            }
        });
    };

    load(true);

    // Fixed-interval silent poll, cancelled on unmount. A forced
    // refresh does not reset this schedule.
    spawn_local(async move {
        loop {
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
            if cancelled.get_untracked() {
                break;
            }
            load(false);
        }
    });

    // Forced refresh whenever a view is recorded elsewhere.
    Effect::new(move |_| {
        let _ = ctx.trending_version.get();
        if gate.get_untracked().bump() {
            load(false);
        }
    });

    on_cleanup(move || cancelled.set(true));

    view! {
        <div class="trending-recipes">
            <h2>"Most-Viewed Native American Recipes"</h2>

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-trending">
                            <div class="spinner"></div>
                            "Loading trending recipes…"
                        </div>
                    }.into_any()
                } else if let Some(msg) = error.get() {
                    view! { <div class="error-message">{msg}</div> }.into_any()
                } else if list.get().is_empty() {
                    view! { <div class="no-trending">"No views yet."</div> }.into_any()
                } else {
                    view! {
                        <div class="trending-list">
                            {list.get().into_iter().enumerate().map(|(idx, entry)| {
                                view! {
                                    <div class="trending-item">
                                        <div
                                            class="trending-rank"
                                            style:background-color=rank_color(idx)
                                        >
                                            {idx + 1}
                                        </div>
                                        <div class="trending-info">
                                            <div class="trending-name">{entry.name}</div>
                                            <div class="trending-views">{entry.views} " views"</div>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_colors() {
        assert_eq!(rank_color(0), "#ffd700");
        assert_eq!(rank_color(2), "#cd7f32");
        assert_eq!(rank_color(3), rank_color(9));
    }

    #[test]
    fn test_bump_before_initial_load_is_absorbed() {
        // A view recorded while the mount-time request is still in
        // flight must not start a second concurrent request; the
        // in-flight load covers it.
        let gate = RefreshGate::default();
        assert!(!gate.bump());
    }

    #[test]
    fn test_bump_after_initial_load_refreshes() {
        let mut gate = RefreshGate::default();
        gate.settle_initial();
        assert!(gate.bump());
        // The gate stays open; every later bump refreshes too.
        assert!(gate.bump());
    }
}
