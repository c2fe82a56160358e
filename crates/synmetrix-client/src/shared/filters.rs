use serde::Serialize;
use synmetrix_graphql::Maybe;

use super::Uuid;

/// `uuid_comparison_exp`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct UuidComparisonExp {
    #[serde(rename = "_eq", skip_serializing_if = "Maybe::is_unset")]
    pub eq: Maybe<Uuid>,
    #[serde(rename = "_neq", skip_serializing_if = "Maybe::is_unset")]
    pub neq: Maybe<Uuid>,
    #[serde(rename = "_in", skip_serializing_if = "Maybe::is_unset")]
    pub is_in: Maybe<Vec<Uuid>>,
    #[serde(rename = "_nin", skip_serializing_if = "Maybe::is_unset")]
    pub not_in: Maybe<Vec<Uuid>>,
    #[serde(rename = "_is_null", skip_serializing_if = "Maybe::is_unset")]
    pub is_null: Maybe<bool>,
}

impl UuidComparisonExp {
    /// Matches exactly `id`
    pub fn equals(id: impl Into<Uuid>) -> UuidComparisonExp {
        UuidComparisonExp {
            eq: Maybe::Value(id.into()),
            ..Default::default()
        }
    }
}

/// `String_comparison_exp`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct StringComparisonExp {
    #[serde(rename = "_eq", skip_serializing_if = "Maybe::is_unset")]
    pub eq: Maybe<String>,
    #[serde(rename = "_neq", skip_serializing_if = "Maybe::is_unset")]
    pub neq: Maybe<String>,
    #[serde(rename = "_in", skip_serializing_if = "Maybe::is_unset")]
    pub is_in: Maybe<Vec<String>>,
    #[serde(rename = "_nin", skip_serializing_if = "Maybe::is_unset")]
    pub not_in: Maybe<Vec<String>>,
    #[serde(rename = "_like", skip_serializing_if = "Maybe::is_unset")]
    pub like: Maybe<String>,
    #[serde(rename = "_ilike", skip_serializing_if = "Maybe::is_unset")]
    pub ilike: Maybe<String>,
    #[serde(rename = "_is_null", skip_serializing_if = "Maybe::is_unset")]
    pub is_null: Maybe<bool>,
}

impl StringComparisonExp {
    /// Matches exactly `value`
    pub fn equals(value: impl Into<String>) -> StringComparisonExp {
        StringComparisonExp {
            eq: Maybe::Value(value.into()),
            ..Default::default()
        }
    }
}

/// `datasources_bool_exp`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DatasourcesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Maybe::is_unset")]
    pub and: Maybe<Vec<DatasourcesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Maybe::is_unset")]
    pub or: Maybe<Vec<DatasourcesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Maybe::is_unset")]
    pub not: Maybe<Box<DatasourcesBoolExp>>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<StringComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub db_type: Maybe<StringComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub team_id: Maybe<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub branches: Maybe<BranchesBoolExp>,
}

/// `branches_bool_exp`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct BranchesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Maybe::is_unset")]
    pub and: Maybe<Vec<BranchesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Maybe::is_unset")]
    pub or: Maybe<Vec<BranchesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Maybe::is_unset")]
    pub not: Maybe<Box<BranchesBoolExp>>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<StringComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub status: Maybe<StringComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub datasource_id: Maybe<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub user_id: Maybe<UuidComparisonExp>,
}

/// `order_by`
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    Asc,
    AscNullsFirst,
    AscNullsLast,
    Desc,
    DescNullsFirst,
    DescNullsLast,
}

/// `datasources_order_by`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct DatasourcesOrderBy {
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<OrderBy>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<OrderBy>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub created_at: Maybe<OrderBy>,
    #[serde(skip_serializing_if = "Maybe::is_unset")]
    pub updated_at: Maybe<OrderBy>,
}
