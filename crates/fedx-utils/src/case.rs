//! Identifier casing used when deriving field and connection names.
//!
//! Thin wrappers over `convert_case` so every crate in the workspace agrees
//! on word boundaries (acronyms split as `IPAddress` -> `ip_address`).

use convert_case::{Case, Casing};

/// `LoadBalancer` -> `load_balancer`
#[must_use]
pub fn snake(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// `load_balancer` -> `loadBalancer`
#[must_use]
pub fn camel(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// `load_balancer` -> `LoadBalancer`
#[must_use]
pub fn pascal(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// Whether `s` already reads as a conventional GraphQL type name.
#[must_use]
pub fn is_pascal(s: &str) -> bool {
    !s.is_empty() && s == pascal(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snake_splits_words_and_acronyms() {
        assert_eq!(snake("LoadBalancer"), "load_balancer");
        assert_eq!(snake("Tenant"), "tenant");
        assert_eq!(snake("IPAddress"), "ip_address");
        assert_eq!(snake("already_snake"), "already_snake");
    }

    #[test]
    fn camel_of_snake() {
        assert_eq!(camel("load_balancers"), "loadBalancers");
        assert_eq!(camel("widgets"), "widgets");
        assert_eq!(camel(&snake("LoadBalancer")), "loadBalancer");
    }

    #[test]
    fn pascal_check() {
        assert!(is_pascal("LoadBalancer"));
        assert!(is_pascal("Widget"));
        assert!(!is_pascal("loadBalancer"));
        assert!(!is_pascal("load_balancer"));
        assert!(!is_pascal(""));
    }

    proptest! {
        #[test]
        fn snake_is_idempotent(word in "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,3}") {
            let once = snake(&word);
            prop_assert_eq!(snake(&once), once.clone());
            prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }

        #[test]
        fn pascal_round_trips_through_snake(word in "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,3}") {
            prop_assert_eq!(pascal(&snake(&word)), word);
        }
    }
}
