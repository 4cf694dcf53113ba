mod app;
mod components;
mod context;
mod pages;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
