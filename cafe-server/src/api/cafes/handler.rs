//! Cafe API Handlers

use axum::{
    Form, Json,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, PathRejection, QueryRejection},
    },
};
use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::Cafe;
use shared::{CafeListResponse, CafeResponse, NestedSuccessResponse, SuccessResponse};

use super::form::{ApiKeyQuery, LocationQuery, NewCafeForm, PriceQuery, QueryParams};
use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::utils::{AppError, AppResult};

pub const MSG_FORBIDDEN: &str = "Sorry, that's not allowed. Make sure you have the correct api_key.";
pub const MSG_NO_LOCATION_MATCH: &str = "Sorry we don't have a cafe at that location.";
pub const MSG_ID_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";
pub const MSG_EMPTY_TABLE: &str = "Sorry, there are no cafes in the database yet.";
pub const MSG_ADDED: &str = "Successfully added the new cafe.";
pub const MSG_PRICE_UPDATED: &str = "Successfully updated the price.";
pub const MSG_DELETED: &str = "Successfully deleted the cafe from the database.";

/// Uniform pick over the given cafes
pub fn pick_random<'a, R: Rng + ?Sized>(cafes: &'a [Cafe], rng: &mut R) -> Option<&'a Cafe> {
    cafes.choose(rng)
}

/// A path id that is not an integer is treated like an unknown id
fn cafe_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::not_found(MSG_ID_NOT_FOUND))
}

/// Query strings that fail to parse get the JSON 400 body like any other bad input
fn query_as<T: for<'a> From<&'a QueryParams>>(
    query: Result<Query<QueryParams>, QueryRejection>,
) -> AppResult<T> {
    query
        .map(|Query(params)| T::from(&params))
        .map_err(|e| AppError::validation(e.body_text()))
}

fn check_api_key(state: &ServerState, query: &ApiKeyQuery, route: &str) -> AppResult<()> {
    if state.api_key_matches(query.api_key.as_deref()) {
        return Ok(());
    }
    tracing::warn!(
        route = route,
        key_present = query.api_key.is_some(),
        "Rejected request with invalid api-key"
    );
    Err(AppError::forbidden(MSG_FORBIDDEN))
}

/// Rewrites a repository miss into the id-not-found message
fn id_not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::not_found(MSG_ID_NOT_FOUND),
        other => other.into(),
    }
}

/// GET /random - one cafe chosen uniformly at random
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<CafeResponse>> {
    let cafes = cafe::find_all(&state.db.pool).await?;
    let cafe = pick_random(&cafes, &mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::not_found(MSG_EMPTY_TABLE))?;
    Ok(Json(CafeResponse { cafe }))
}

/// GET /all - every cafe, ordered by id
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CafeListResponse>> {
    let cafes = cafe::find_all(&state.db.pool).await?;
    Ok(Json(CafeListResponse { cafes }))
}

/// GET /search?loc= - first cafe at an exact location
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> AppResult<Json<CafeResponse>> {
    let query: LocationQuery = query_as(query)?;
    let Some(loc) = query.loc else {
        return Err(AppError::not_found(MSG_NO_LOCATION_MATCH));
    };
    let cafe = cafe::find_by_location(&state.db.pool, &loc)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NO_LOCATION_MATCH))?;
    Ok(Json(CafeResponse { cafe }))
}

/// POST /add?api-key= - insert a cafe from the form body
pub async fn add(
    State(state): State<ServerState>,
    query: Result<Query<QueryParams>, QueryRejection>,
    form: Result<Form<NewCafeForm>, FormRejection>,
) -> AppResult<Json<NestedSuccessResponse>> {
    let query: ApiKeyQuery = query_as(query)?;
    check_api_key(&state, &query, "/add")?;

    let Form(form) = form.map_err(|e| AppError::validation(e.body_text()))?;
    let payload = form.into_create()?;

    let cafe = cafe::create(&state.db.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::conflict("A cafe with that name already exists."),
            other => other.into(),
        })?;

    tracing::info!(cafe_id = cafe.id, name = %cafe.name, location = %cafe.location, "Cafe added");

    Ok(Json(NestedSuccessResponse::new(MSG_ADDED)))
}

/// PATCH /update-price/{id}?new_price= - set the coffee price
pub async fn update_price(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let id = cafe_id(path)?;
    let query: PriceQuery = query_as(query)?;

    cafe::update_price(&state.db.pool, id, query.new_price.as_deref())
        .await
        .map_err(id_not_found)?;

    tracing::info!(cafe_id = id, new_price = ?query.new_price, "Cafe price updated");

    Ok(Json(SuccessResponse::new(MSG_PRICE_UPDATED)))
}

/// DELETE /report-closed/{id}?api-key= - remove a closed cafe
pub async fn report_closed(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let id = cafe_id(path)?;
    let query: ApiKeyQuery = query_as(query)?;
    check_api_key(&state, &query, "/report-closed")?;

    cafe::delete(&state.db.pool, id).await.map_err(id_not_found)?;

    tracing::info!(cafe_id = id, "Cafe reported closed and deleted");

    Ok(Json(SuccessResponse::new(MSG_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cafe(id: i64) -> Cafe {
        Cafe {
            id,
            name: format!("Cafe {id}"),
            map_url: String::new(),
            img_url: String::new(),
            location: "London".into(),
            seats: "0-10".into(),
            has_toilet: None,
            has_wifi: None,
            has_sockets: None,
            can_take_calls: None,
            coffee_price: None,
        }
    }

    #[test]
    fn test_pick_random_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_random_is_uniform() {
        let cafes: Vec<Cafe> = (1..=4).map(cafe).collect();
        let mut rng = StdRng::seed_from_u64(20240601);
        let mut counts = [0usize; 4];

        let trials = 40_000;
        for _ in 0..trials {
            let picked = pick_random(&cafes, &mut rng).unwrap();
            counts[(picked.id - 1) as usize] += 1;
        }

        // Expected 10_000 each; 5% tolerance is far outside sampling noise
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "counts = {counts:?}");
        }
    }

    #[test]
    fn test_cafe_id_passes_through() {
        assert_eq!(cafe_id(Ok(Path(3))).unwrap(), 3);
    }

    #[test]
    fn test_id_not_found_rewrites_message() {
        match id_not_found(RepoError::NotFound("Cafe 9 not found".into())) {
            AppError::NotFound(msg) => assert_eq!(msg, MSG_ID_NOT_FOUND),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            id_not_found(RepoError::Database("boom".into())),
            AppError::Database(_)
        ));
    }
}
