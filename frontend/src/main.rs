use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod session_store;

fn main() {
    yew::Renderer::<App>::new().render();
}
