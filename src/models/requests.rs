use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::LocationFilter;

/// Query string for `GET /api/businesses`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BusinessQuery {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(min = 1, max = 10000))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl BusinessQuery {
    pub fn location(&self) -> LocationFilter {
        LocationFilter::new(self.state.as_deref(), self.city.as_deref())
    }

    /// Category slug, if one was given and is not blank
    pub fn category_slug(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Query string for the use-case page endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UseCaseQuery {
    #[serde(default)]
    pub city: Option<String>,
    #[validate(range(min = 1, max = 10000))]
    #[serde(default)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_validation() {
        let query = BusinessQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = BusinessQuery {
            limit: Some(25),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_blank_category_is_ignored() {
        let query = BusinessQuery {
            category: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.category_slug(), None);
    }
}
