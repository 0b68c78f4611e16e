//! Filter engine.
//!
//! Conjunctive predicate matching over the in-memory roster. Every filter
//! left empty (or `Unset`) matches everything.

use crate::models::{FilterCriteria, Person};

/// Whether `person` satisfies all four predicates of `criteria`.
pub fn matches(person: &Person, criteria: &FilterCriteria) -> bool {
    let name_matches = person
        .full_name()
        .to_lowercase()
        .contains(&criteria.name_query.to_lowercase());
    let domain_matches = criteria.domain.is_empty() || person.domain == criteria.domain;
    let gender_matches = criteria.gender.is_empty() || person.gender == criteria.gender;
    let availability_matches = criteria.available.accepts(person.available);

    name_matches && domain_matches && gender_matches && availability_matches
}

/// The people matching `criteria`, in roster order.
pub fn filter(people: &[Person], criteria: &FilterCriteria) -> Vec<Person> {
    people
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_test_person(id: u64, first: &str, last: &str, domain: &str, available: bool) -> Person {
        Person {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            gender: if id % 2 == 0 { "Male" } else { "Female" }.to_string(),
            avatar: String::new(),
            domain: domain.to_string(),
            available,
        }
    }

    fn sample() -> Vec<Person> {
        vec![
            create_test_person(1, "Ann", "Lee", "Sales", true),
            create_test_person(2, "Bo", "Ray", "IT", false),
            create_test_person(3, "Cara", "Stone", "IT", true),
            create_test_person(4, "Dan", "Marsh", "Finance", true),
        ]
    }

    fn ids(people: &[Person]) -> Vec<u64> {
        people.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let people = sample();
        assert_eq!(filter(&people, &FilterCriteria::default()), people);
    }

    #[test]
    fn test_name_query_is_case_insensitive_substring() {
        let people = sample();
        let criteria = FilterCriteria {
            name_query: "A".to_string(),
            ..Default::default()
        };
        // "Bo Ray" contains an "a" too
        assert_eq!(ids(&filter(&people, &criteria)), vec![1, 2, 3, 4]);

        let criteria = FilterCriteria {
            name_query: "n l".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&people, &criteria)), vec![1]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let people = sample();
        let criteria = FilterCriteria {
            domain: "IT".to_string(),
            available: Availability::True,
            ..Default::default()
        };
        assert_eq!(ids(&filter(&people, &criteria)), vec![3]);

        let criteria = FilterCriteria {
            gender: "Male".to_string(),
            available: Availability::False,
            ..Default::default()
        };
        assert_eq!(ids(&filter(&people, &criteria)), vec![2]);
    }

    #[test]
    fn test_unknown_domain_matches_nothing() {
        let criteria = FilterCriteria {
            domain: "Astrology".to_string(),
            ..Default::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_domain_match_is_exact() {
        let criteria = FilterCriteria {
            domain: "it".to_string(),
            ..Default::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let people = sample();
        let criteria = FilterCriteria {
            name_query: "a".to_string(),
            available: Availability::True,
            ..Default::default()
        };
        let once = filter(&people, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![1, 3, 4]);
        assert!(once.iter().all(|p| matches(p, &criteria)));
    }

    #[test]
    fn test_empty_roster_yields_empty() {
        assert!(filter(&[], &FilterCriteria::default()).is_empty());
    }
}
