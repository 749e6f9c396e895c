//! Minimal terminal runtime: a tick/render event loop that drives an [`App`].

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
