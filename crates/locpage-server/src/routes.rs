//! HTTP routes and handlers

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;
use chrono::{NaiveDate, NaiveTime};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Sample event data rendered into the page until a real data source exists
const SAMPLE_ATTENDEES: i64 = 1234;

fn sample_event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 12, 4).expect("valid literal date")
}

fn sample_event_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 30, 0).expect("valid literal time")
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_default))
        .route("/:locale/main", get(render_main))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// `GET /`: send visitors to the fallback locale's page
async fn redirect_to_default(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/{}/main", state.catalogs.fallback()))
}

/// `GET /:locale/main`: render the localized event page
///
/// An unsupported locale silently degrades to the fallback; the client never
/// sees an error for a locale we simply do not carry.
async fn render_main(
    Path(locale): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let effective = state.catalogs.resolve(&locale);
    debug!(requested = %locale, effective = %effective, "rendering main page");

    let mut context = tera::Context::new();
    context.insert("locale", effective.as_str());
    context.insert("event_attendee", &SAMPLE_ATTENDEES);
    context.insert("event_date", &sample_event_date());
    context.insert("event_time", &sample_event_time());

    let body = state.templates.render("index.html", &context)?;
    Ok(Html(body))
}
