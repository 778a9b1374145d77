//! Localized event page HTTP server
//!
//! Serves a single page at `/{locale}/main`, rendered through Tera with
//! locale-aware filters backed by the preloaded catalog store. The root
//! path redirects to the fallback locale's page.

pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use render::TemplateEngine;
pub use routes::build_router;
pub use state::AppState;
