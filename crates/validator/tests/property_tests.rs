//! Property-based laws for the combinators and the error tree.

use proptest::prelude::*;
use sieve_validator::message::{ArgValue, substitute};
use sieve_validator::prelude::*;

fn non_negative() -> impl Validate<Input = i64> + Clone + Send + Sync + 'static {
    min(0i64)
}

proptest! {
    #[test]
    fn length_rules_agree_with_char_count(s in "\\PC{0,30}", lo in 0usize..15, span in 0usize..15) {
        let hi = lo + span;
        let n = s.chars().count();
        let ctx = Context::new();
        prop_assert_eq!(min_length(lo).validate(&ctx, &s).is_ok(), n >= lo);
        prop_assert_eq!(max_length(hi).validate(&ctx, &s).is_ok(), n <= hi);
        prop_assert_eq!(length(lo, hi).validate(&ctx, &s).is_ok(), lo <= n && n <= hi);
    }

    #[test]
    fn slice_reports_exactly_the_failing_indices(values in prop::collection::vec(-50i64..50, 0..40)) {
        let result = each(non_negative()).validate(&Context::new(), &values);
        let expected: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v < 0)
            .map(|(i, _)| i)
            .collect();

        match result {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(ValidationError::Slice(err)) => {
                prop_assert_eq!(err.indices().collect::<Vec<_>>(), expected);
                prop_assert_eq!(err.input_len(), values.len());
            }
            Err(other) => prop_assert!(false, "unexpected error shape: {other:?}"),
        }
    }

    #[test]
    fn join_failure_count_is_sum_of_children(n in -100i64..100) {
        let v = join![min(0i64), max(10i64), in_range(-5i64, 5)];
        let ctx = Context::new();
        let expected = usize::from(n < 0) + usize::from(n > 10) + usize::from(!(-5..=5).contains(&n));
        match v.validate(&ctx, &n) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(err) => {
                prop_assert!(matches!(err, ValidationError::Join(_)));
                prop_assert_eq!(err.flatten().len(), expected);
            }
        }
    }

    #[test]
    fn flatten_keeps_every_leaf_in_order(values in prop::collection::vec(-3i64..3, 0..20)) {
        let v = each(non_negative().and(max(1i64)));
        if let Err(err) = v.validate(&Context::new(), &values) {
            let borrowed: Vec<String> = err.flatten().iter().map(ToString::to_string).collect();
            let owned: Vec<String> = err.clone().into_leaves().iter().map(ToString::to_string).collect();
            prop_assert_eq!(&borrowed, &owned);
            prop_assert_eq!(err.to_string(), borrowed.join("\n"));
        }
    }

    #[test]
    fn optional_none_always_passes(floor in any::<i64>()) {
        prop_assert!(optional(min(floor)).validate(&Context::new(), &None::<i64>).is_ok());
    }

    #[test]
    fn substitute_without_placeholders_is_identity(text in "[a-zA-Z0-9 .,:;!?-]{0,40}") {
        prop_assert_eq!(substitute(&text, &[ArgValue::Int(1)]), text);
    }

    #[test]
    fn substitute_positional_slots(a in any::<i32>(), b in "[a-z]{1,8}") {
        let out = substitute("{1}/{0}", &[ArgValue::Int(a.into()), ArgValue::Text(b.clone())]);
        prop_assert_eq!(out, format!("{b}/{a}"));
    }
}
