//! # Query Parameter Parser
//!
//! Turns raw query-string maps into typed list and search requests.
//! Parsing never fails: unknown keys are ignored and bad values fall back
//! to defaults.

use std::collections::HashMap;

use crate::query::{Pagination, RecipeQuery};

pub const PAGE_PARAM: &str = "page";
pub const LIMIT_PARAM: &str = "limit";

fn pagination(params: &HashMap<String, String>) -> Pagination {
    Pagination::from_params(
        params.get(PAGE_PARAM).map(String::as_str),
        params.get(LIMIT_PARAM).map(String::as_str),
    )
}

/// Parameters of the unfiltered listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub pagination: Pagination,
}

impl ListParams {
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            pagination: pagination(params),
        }
    }
}

/// Parameters of the filtered search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub query: RecipeQuery,
    pub pagination: Pagination,
}

impl SearchParams {
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            query: RecipeQuery::from_params(params),
            pagination: pagination(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CompareOp, Comparison, NumericField, MAX_LIMIT};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_params() {
        let parsed = ListParams::parse(&params(&[("page", "3"), ("limit", "20"), ("x", "y")]));
        assert_eq!(parsed.pagination, Pagination { page: 3, limit: 20 });
    }

    #[test]
    fn test_list_and_search_clamp_alike() {
        for limit in ["0", "-5", "999", "abc", "7"] {
            let raw = params(&[("limit", limit)]);
            assert_eq!(
                ListParams::parse(&raw).pagination,
                SearchParams::parse(&raw).pagination,
                "limit {limit:?}"
            );
        }
        assert_eq!(ListParams::parse(&params(&[("limit", "999")])).pagination.limit, MAX_LIMIT);
    }

    #[test]
    fn test_full_search_params() {
        let parsed = SearchParams::parse(&params(&[
            ("title", "pie"),
            ("cuisine", "American"),
            ("calories", "<400"),
            ("rating", ">=4.5"),
            ("total_time", "junk"),
            ("page", "2"),
            ("limit", "5"),
        ]));

        let expected = RecipeQuery::new()
            .title_contains("pie")
            .cuisine_eq("American")
            .numeric(NumericField::Calories, Comparison::new(CompareOp::Lt, 400.0))
            .numeric(NumericField::Rating, Comparison::new(CompareOp::Gte, 4.5));

        assert_eq!(parsed.query, expected);
        assert_eq!(parsed.pagination, Pagination { page: 2, limit: 5 });
    }
}
