//! Server router definition.
//!
//! The following routes are supported:
//!
//! - GET: `/ping`
//! - POST: `/slack-message`

use crate::{
    meli::api::MeliClient,
    slack::{api::SlackClient, auth::SlackBotToken, router::slack_router},
};
use axum::{routing::get, Router};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

/// Dependencies shared by routes across requests.
#[derive(Clone)]
pub struct Deps {
    pub meli_client: MeliClient,
    pub slack_client: SlackClient,
    pub slack_token: SlackBotToken,
}

/// Instantiate a new router with tracing.
pub fn new(deps: Deps) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(slack_router())
        .layer(trace_layer)
        // Exclude the health check route from tracing.
        .route("/ping", get(|| async { "Pong" }))
        .with_state(deps)
}
