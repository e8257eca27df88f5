use lightbnb_db::{property_search, BindValue, Limit, SearchFilter};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

// Strategy to generate arbitrary filter values (numbers or raw form text)
fn arb_bind_value() -> impl Strategy<Value = BindValue> {
    prop_oneof![
        any::<i64>().prop_map(BindValue::Integer),
        any::<f64>()
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(BindValue::Float),
        "[a-zA-Z0-9 .]{1,12}".prop_map(BindValue::Text),
    ]
}

fn arb_filter() -> impl Strategy<Value = SearchFilter> {
    (
        proptest::option::of("[a-zA-Z ]{1,20}"),
        proptest::option::of(arb_bind_value()),
        proptest::option::of(arb_bind_value()),
        proptest::option::of(arb_bind_value()),
    )
        .prop_map(|(city, min, max, rating)| SearchFilter {
            city,
            minimum_price_per_night: min,
            maximum_price_per_night: max,
            minimum_rating: rating,
        })
}

fn placeholders(sql: &str) -> Vec<usize> {
    PLACEHOLDER_RE
        .captures_iter(sql)
        .map(|c| c[1].parse().unwrap())
        .collect()
}

proptest! {
    /// Property: placeholders are $1..$N in text order, one per parameter
    #[test]
    fn prop_placeholders_match_params(filter in arb_filter(), limit in 1i64..=i64::MAX) {
        let plan = property_search(&filter, Limit::new(limit).unwrap());

        let expected: Vec<usize> = (1..=plan.params().len()).collect();
        prop_assert_eq!(placeholders(plan.sql()), expected);
    }

    /// Property: the limit is always the final parameter
    #[test]
    fn prop_limit_is_last(filter in arb_filter(), limit in 1i64..=i64::MAX) {
        let plan = property_search(&filter, Limit::new(limit).unwrap());

        prop_assert_eq!(plan.params().last(), Some(&BindValue::Integer(limit)));
        let limit_clause = format!("LIMIT ${};", plan.params().len());
        prop_assert!(plan.sql().ends_with(&limit_clause));
    }

    /// Property: one parameter per present filter, plus the limit
    #[test]
    fn prop_param_count(filter in arb_filter()) {
        let plan = property_search(&filter, Limit::default());

        let present = [
            filter.city.is_some(),
            filter.minimum_price_per_night.is_some(),
            filter.maximum_price_per_night.is_some(),
            filter.minimum_rating.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();

        prop_assert_eq!(plan.params().len(), present + 1);
        prop_assert_eq!(plan.sql().contains("HAVING"), filter.minimum_rating.is_some());
    }

    /// Property: zero and negative limits are rejected
    #[test]
    fn prop_non_positive_limit_rejected(limit in i64::MIN..=0) {
        prop_assert!(Limit::new(limit).is_err());
    }

    /// Property: building is deterministic
    #[test]
    fn prop_idempotent(filter in arb_filter()) {
        let first = property_search(&filter, Limit::default());
        let second = property_search(&filter, Limit::default());
        prop_assert_eq!(first, second);
    }
}
