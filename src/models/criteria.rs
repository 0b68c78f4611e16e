//! Filter criteria applied to the roster.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Three-valued availability filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Unset,
    True,
    False,
}

impl Availability {
    /// Parse a control-surface token. Empty and `all` both mean unset.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(Availability::Unset),
            "true" => Some(Availability::True),
            "false" => Some(Availability::False),
            _ => None,
        }
    }

    pub fn accepts(&self, available: bool) -> bool {
        match self {
            Availability::Unset => true,
            Availability::True => available,
            Availability::False => !available,
        }
    }
}

/// Field addressed by a single filter update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Domain,
    Gender,
    Available,
}

impl FilterField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "domain" => Some(FilterField::Domain),
            "gender" => Some(FilterField::Gender),
            "available" => Some(FilterField::Available),
            _ => None,
        }
    }
}

/// Everything the filter engine matches against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub name_query: String,
    /// Empty means any domain.
    pub domain: String,
    /// Empty means any gender.
    pub gender: String,
    pub available: Availability,
}

impl FilterCriteria {
    /// Apply a single field update.
    pub fn set_filter(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Domain(domain) => self.domain = domain,
            FilterUpdate::Gender(gender) => self.gender = gender,
            FilterUpdate::Available(available) => self.available = available,
        }
    }
}

/// A change to one field filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Domain(String),
    Gender(String),
    Available(Availability),
}

impl FilterUpdate {
    /// Build an update from a field name and the raw control value.
    /// `all` (or nothing) clears a categorical filter.
    pub fn parse(field: FilterField, value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let categorical = if value.eq_ignore_ascii_case("all") {
            String::new()
        } else {
            value.to_string()
        };

        match field {
            FilterField::Domain => Ok(FilterUpdate::Domain(categorical)),
            FilterField::Gender => Ok(FilterUpdate::Gender(categorical)),
            FilterField::Available => Availability::parse(value)
                .map(FilterUpdate::Available)
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Availability must be one of all, true, false (got '{}')",
                        value
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_tokens() {
        assert_eq!(Availability::parse(""), Some(Availability::Unset));
        assert_eq!(Availability::parse("All"), Some(Availability::Unset));
        assert_eq!(Availability::parse("TRUE"), Some(Availability::True));
        assert_eq!(Availability::parse("false"), Some(Availability::False));
        assert_eq!(Availability::parse("maybe"), None);
    }

    #[test]
    fn test_availability_accepts() {
        assert!(Availability::Unset.accepts(true));
        assert!(Availability::Unset.accepts(false));
        assert!(Availability::True.accepts(true));
        assert!(!Availability::True.accepts(false));
        assert!(Availability::False.accepts(false));
        assert!(!Availability::False.accepts(true));
    }

    #[test]
    fn test_set_filter_by_field() {
        let mut criteria = FilterCriteria::default();

        for (field, value) in [
            (FilterField::Domain, "IT"),
            (FilterField::Gender, "Female"),
            (FilterField::Available, "true"),
        ] {
            criteria.set_filter(FilterUpdate::parse(field, value).unwrap());
        }
        assert_eq!(criteria.domain, "IT");
        assert_eq!(criteria.gender, "Female");
        assert_eq!(criteria.available, Availability::True);

        criteria.set_filter(FilterUpdate::parse(FilterField::Domain, "all").unwrap());
        assert_eq!(criteria.domain, "");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FilterField::parse("Domain"), Some(FilterField::Domain));
        assert_eq!(FilterField::parse("available"), Some(FilterField::Available));
        assert_eq!(FilterField::parse("email"), None);
    }

    #[test]
    fn test_bad_availability_is_rejected() {
        let err = FilterUpdate::parse(FilterField::Available, "sometimes").unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_domain_is_kept_verbatim() {
        let update = FilterUpdate::parse(FilterField::Domain, "Astrology").unwrap();
        assert_eq!(update, FilterUpdate::Domain("Astrology".to_string()));
    }
}
