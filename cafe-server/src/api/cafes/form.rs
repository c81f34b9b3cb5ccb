//! Request parameter mapping
//!
//! Query strings and the urlencoded add form, and their conversion into
//! [`CafeCreate`].

use serde::Deserialize;
use shared::models::CafeCreate;

use crate::utils::{AppError, AppResult};

/// Raw query-string pairs in request order
///
/// A repeated key resolves to its first value, so `?loc=a&loc=b` reads as
/// `loc=a` instead of failing to deserialize.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// `?api-key=...`
#[derive(Debug, Default)]
pub struct ApiKeyQuery {
    pub api_key: Option<String>,
}

impl From<&QueryParams> for ApiKeyQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            api_key: params.first("api-key").map(str::to_owned),
        }
    }
}

/// `?loc=...`
#[derive(Debug, Default)]
pub struct LocationQuery {
    pub loc: Option<String>,
}

impl From<&QueryParams> for LocationQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            loc: params.first("loc").map(str::to_owned),
        }
    }
}

/// `?new_price=...`
#[derive(Debug, Default)]
pub struct PriceQuery {
    pub new_price: Option<String>,
}

impl From<&QueryParams> for PriceQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            new_price: params.first("new_price").map(str::to_owned),
        }
    }
}

/// Form body of `POST /add`
///
/// Every field is optional at the wire level; required ones are checked in
/// [`NewCafeForm::into_create`].
#[derive(Debug, Default, Deserialize)]
pub struct NewCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

/// Amenity flags are true when the field is present and non-empty.
/// The value itself is not parsed, so "false" and "0" are both true.
fn flag(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation(format!("Missing required field: {field}")))
}

impl NewCafeForm {
    pub fn into_create(self) -> AppResult<CafeCreate> {
        let has_toilet = flag(&self.has_toilet);
        let has_wifi = flag(&self.has_wifi);
        let has_sockets = flag(&self.has_sockets);
        let can_take_calls = flag(&self.can_take_calls);

        Ok(CafeCreate {
            name: required(self.name, "name")?,
            map_url: required(self.map_url, "map_url")?,
            img_url: required(self.img_url, "img_url")?,
            location: required(self.location, "location")?,
            seats: required(self.seats, "seats")?,
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price: self.coffee_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> NewCafeForm {
        NewCafeForm {
            name: Some("Test Cafe".into()),
            map_url: Some("https://maps.example.com/test".into()),
            img_url: Some("https://img.example.com/test.jpg".into()),
            location: Some("Berlin".into()),
            seats: Some("10-20".into()),
            coffee_price: Some("£3.00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_flags_are_false() {
        let create = full_form().into_create().unwrap();
        assert!(!create.has_toilet);
        assert!(!create.has_wifi);
        assert!(!create.has_sockets);
        assert!(!create.can_take_calls);
        assert_eq!(create.coffee_price.as_deref(), Some("£3.00"));
    }

    #[test]
    fn test_any_non_empty_flag_is_true() {
        let form = NewCafeForm {
            has_toilet: Some("1".into()),
            has_wifi: Some("false".into()),
            has_sockets: Some("".into()),
            can_take_calls: Some("no".into()),
            ..full_form()
        };
        let create = form.into_create().unwrap();
        assert!(create.has_toilet);
        assert!(create.has_wifi);
        assert!(!create.has_sockets);
        assert!(create.can_take_calls);
    }

    #[test]
    fn test_missing_required_field() {
        let form = NewCafeForm {
            seats: None,
            ..full_form()
        };
        match form.into_create() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("seats")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_coffee_price_is_optional() {
        let form = NewCafeForm {
            coffee_price: None,
            ..full_form()
        };
        assert!(form.into_create().unwrap().coffee_price.is_none());
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_api_key_query_uses_hyphenated_name() {
        let query = ApiKeyQuery::from(&params(&[("api_key", "x"), ("api-key", "k")]));
        assert_eq!(query.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_repeated_key_takes_first_value() {
        let query = LocationQuery::from(&params(&[("loc", "Berlin"), ("loc", "Paris")]));
        assert_eq!(query.loc.as_deref(), Some("Berlin"));

        let query = PriceQuery::from(&params(&[("new_price", "£2"), ("new_price", "£3")]));
        assert_eq!(query.new_price.as_deref(), Some("£2"));
    }

    #[test]
    fn test_query_params_keep_request_order() {
        let parsed: QueryParams = serde_json::from_value(serde_json::json!([
            ["api-key", "TopSecretAPIKey"],
            ["api-key", "x"]
        ]))
        .unwrap();
        assert_eq!(parsed.first("api-key"), Some("TopSecretAPIKey"));
        assert_eq!(parsed.first("loc"), None);
    }
}
