//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// First cafe (lowest id) whose location matches exactly
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {CAFE_COLUMNS} FROM cafe WHERE location = ? ORDER BY id LIMIT 1"
    ))
    .bind(location)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// Set (or clear) the coffee price. No other column is touched.
pub async fn update_price(pool: &SqlitePool, id: i64, price: Option<&str>) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(price)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    Ok(())
}
