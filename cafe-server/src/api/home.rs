//! Landing page

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
