#![allow(warnings)]
//! Great Lakes Recipes Frontend Entry Point

mod api;
mod checklist;
mod context;
mod debounce;
mod ingredients;
mod models;
mod pantry;
mod selection;
mod stars;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
