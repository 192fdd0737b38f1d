//! HTTP boundary: one JSON endpoint plus the landing page and static assets.

pub mod handlers;
pub mod server;

pub use server::{build_router, run, AppState};
