//! Tri-state operation arguments

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

/// A GraphQL argument that can be left out, sent as `null`, or sent with a value.
///
/// `Unset` and `Null` mean different things to the server ("no filter" versus
/// "filter on null"), so they are kept apart instead of folding both into
/// [`Option::None`].
///
/// Struct fields of this type must carry
/// `#[serde(default, skip_serializing_if = "Maybe::is_unset")]`.
/// Serializing an `Unset` any other way is an error rather than a silent `null`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Leave the argument out of the request entirely
    Unset,
    /// Send an explicit `null`
    Null,
    /// Send a concrete value
    Value(T),
}

impl<T> Maybe<T> {
    /// Whether the argument should be omitted from the request
    pub const fn is_unset(&self) -> bool {
        matches!(self, Maybe::Unset)
    }

    /// Whether the argument is an explicit `null`
    pub const fn is_null(&self) -> bool {
        matches!(self, Maybe::Null)
    }

    /// Borrows the contained value, if there is one
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Maybe::Value(value) => Some(value),
            _ => None,
        }
    }

    /// `None` becomes an explicit `null`; use [`Maybe::Unset`] to omit the argument
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Value(value),
            None => Maybe::Null,
        }
    }

    /// Maps the contained value, keeping `Unset` and `Null` as they are
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Unset => Maybe::Unset,
            Maybe::Null => Maybe::Null,
            Maybe::Value(value) => Maybe::Value(f(value)),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Unset
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Value(value)
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Unset => Err(S::Error::custom(
                "an unset argument must be skipped, not serialized",
            )),
            Maybe::Null => serializer.serialize_none(),
            Maybe::Value(value) => serializer.serialize_some(value),
        }
    }
}

/// A missing field deserializes to `Unset` only when the field is marked `#[serde(default)]`;
/// a present `null` always deserializes to `Null`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_option)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::Maybe;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Filter {
        #[serde(default, skip_serializing_if = "Maybe::is_unset")]
        team_id: Maybe<String>,
        #[serde(default, skip_serializing_if = "Maybe::is_unset")]
        limit: Maybe<i64>,
    }

    #[test]
    fn unset_fields_are_omitted_and_null_fields_are_sent() {
        let filter = Filter {
            team_id: Maybe::Null,
            limit: Maybe::Unset,
        };
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({ "team_id": null }));

        let filter = Filter {
            team_id: Maybe::Value("team-1".to_string()),
            limit: Maybe::Value(10),
        };
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "team_id": "team-1", "limit": 10 })
        );
    }

    #[test]
    fn serializing_unset_without_skipping_is_an_error() {
        #[derive(Serialize)]
        struct Careless {
            id: Maybe<String>,
        }
        let careless = Careless { id: Maybe::Unset };
        assert!(serde_json::to_value(&careless).is_err());
    }

    #[test]
    fn missing_and_null_fields_stay_distinct_when_read_back() {
        let filter: Filter = serde_json::from_value(json!({ "team_id": null })).unwrap();
        assert_eq!(
            filter,
            Filter {
                team_id: Maybe::Null,
                limit: Maybe::Unset,
            }
        );
    }

    #[test]
    fn option_converts_to_null_or_value() {
        assert_eq!(Maybe::from_option(None::<i64>), Maybe::Null);
        assert_eq!(Maybe::from_option(Some(3)), Maybe::Value(3));
        assert_eq!(Maybe::from(3), Maybe::Value(3));
        assert_eq!(Maybe::Value(3).map(|n| n * 2), Maybe::Value(6));
    }
}
