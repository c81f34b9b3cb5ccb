//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe entity
///
/// Field order is the wire order of the JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Seating capacity as free text, e.g. "20-30"
    pub seats: String,
    pub has_toilet: Option<bool>,
    pub has_wifi: Option<bool>,
    pub has_sockets: Option<bool>,
    pub can_take_calls: Option<bool>,
    /// Free text, e.g. "£2.50"
    pub coffee_price: Option<String>,
}

/// Create cafe payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
