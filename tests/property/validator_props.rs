//! Property-based tests for the accepted input set

use proptest::prelude::*;
use roll_cli::{parse_args, RollError, RollRequest, EXIT_USAGE};

proptest! {
    #[test]
    fn prop_in_range_pairs_accepted(count in 1i64..=255, sides in 2i64..=255) {
        let args = ["roll-dice".to_string(), count.to_string(), sides.to_string()];
        let request = parse_args(args).unwrap();

        prop_assert_eq!(i64::from(request.count()), count);
        prop_assert_eq!(i64::from(request.sides()), sides);
        prop_assert_eq!(request.to_string(), format!("{count}d{sides}"));
    }

    #[test]
    fn prop_count_out_of_range_rejected(
        count in prop_oneof![i64::MIN / 2..=0, 256i64..=i64::MAX / 2],
        sides in 2i64..=255,
    ) {
        let err = RollRequest::new(count, sides).unwrap_err();
        prop_assert_eq!(RollError::from(err).exit_code(), EXIT_USAGE);
    }

    #[test]
    fn prop_sides_out_of_range_rejected(
        count in 1i64..=255,
        sides in prop_oneof![i64::MIN / 2..=1, 256i64..=i64::MAX / 2],
    ) {
        let err = RollRequest::new(count, sides).unwrap_err();
        prop_assert_eq!(RollError::from(err).exit_code(), EXIT_USAGE);
    }

    #[test]
    fn prop_non_numeric_tokens_rejected(token in "[a-zA-Z][a-zA-Z0-9]{0,8}") {
        prop_assert!(RollRequest::parse(&token, "6").is_err());
        prop_assert!(RollRequest::parse("3", &token).is_err());
    }

    #[test]
    fn prop_parse_agrees_with_new(count in any::<i32>(), sides in any::<i32>()) {
        let parsed = RollRequest::parse(&count.to_string(), &sides.to_string()).ok();
        let built = RollRequest::new(i64::from(count), i64::from(sides)).ok();
        prop_assert_eq!(parsed, built);
    }
}
