//! Contract models for the product service

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::error::InvalidKeyspace;

/// Longest keyspace name accepted, matching the usual column-store limit
const MAX_KEYSPACE_LEN: usize = 48;

/// Keyspace used when the configuration names none
pub const DEFAULT_KEYSPACE: &str = "demo";

/// Product as exchanged over the wire
///
/// Deliberately separate from the storage entity so that the table layout and
/// the JSON shape can change independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    /// Product identifier, also the storage key
    #[schema(example = 1)]
    pub id: i32,

    /// Free-form description
    #[schema(example = "desc_1")]
    pub description: String,
}

impl ProductDto {
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// Validated name of the logical namespace holding the product table
///
/// Names are interpolated into DDL, so only `[A-Za-z][A-Za-z0-9_]*` is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyspace(String);

impl Keyspace {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidKeyspace> {
        let name = name.into();
        let reject = |reason| {
            Err(InvalidKeyspace {
                name: name.clone(),
                reason,
            })
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return reject("name is empty"),
            Some(first) if !first.is_ascii_alphabetic() => {
                return reject("name must start with an ASCII letter")
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return reject("only ASCII letters, digits and '_' are allowed");
        }
        if name.len() > MAX_KEYSPACE_LEN {
            return reject("name is longer than 48 characters");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Keyspace {
    fn default() -> Self {
        Self(DEFAULT_KEYSPACE.to_owned())
    }
}

impl TryFrom<String> for Keyspace {
    type Error = InvalidKeyspace;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Keyspace> for String {
    fn from(keyspace: Keyspace) -> Self {
        keyspace.0
    }
}

impl fmt::Display for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert_eq!(Keyspace::new("demo").unwrap().as_str(), "demo");
        assert!(Keyspace::new("inventory_v2").is_ok());
        assert_eq!(Keyspace::new(DEFAULT_KEYSPACE).unwrap(), Keyspace::default());
    }

    #[test]
    fn rejects_names_unsafe_for_ddl() {
        assert!(Keyspace::new("").is_err());
        assert!(Keyspace::new("1demo").is_err());
        assert!(Keyspace::new("demo; DROP TABLE product").is_err());
        assert!(Keyspace::new("\"quoted\"").is_err());
        assert!(Keyspace::new("a".repeat(49)).is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let ks: Keyspace = serde_json::from_str("\"shop\"").unwrap();
        assert_eq!(ks.to_string(), "shop");
        assert!(serde_json::from_str::<Keyspace>("\"bad-name\"").is_err());
    }

    #[test]
    fn dto_json_shape() {
        let json = serde_json::to_value(ProductDto::new(1, "desc_1")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "description": "desc_1" }));
    }
}
