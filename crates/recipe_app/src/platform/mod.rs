//! Terminal front end: wires the core store to the engine and renders views.
mod app;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
