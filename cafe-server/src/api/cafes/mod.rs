//! Cafe API module
//!
//! | Path | Method | Key required |
//! |------|--------|--------------|
//! | /random | GET | no |
//! | /all | GET | no |
//! | /search?loc= | GET | no |
//! | /add?api-key= | POST | yes |
//! | /update-price/{id}?new_price= | PATCH | no |
//! | /report-closed/{id}?api-key= | DELETE | yes |

pub mod form;
pub mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/random", get(handler::random))
        .route("/all", get(handler::list))
        .route("/search", get(handler::search));

    let write_routes = Router::new()
        .route("/add", post(handler::add))
        .route("/update-price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed));

    read_routes.merge(write_routes)
}
