// tests/property_test.rs

//! Property-based tests for the frame builders.
//!
//! These verify invariants that must hold for every input, not just the
//! handful of cases the unit tests pin down.

use beryl::BerylError;
use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::{BLPop, LPos};
use bytes::Bytes;
use proptest::prelude::*;

proptest! {
    /// The emitted optional groups are always RANK, COUNT, MAXLEN among
    /// whichever are present, for all 8 presence combinations and any
    /// values.
    #[test]
    fn lpos_optional_groups_keep_fixed_order(
        rank in proptest::option::of(any::<i64>()),
        count in proptest::option::of(any::<i64>()),
        max_len in proptest::option::of(any::<i64>()),
    ) {
        let cmd = LPos {
            key: Bytes::from_static(b"k"),
            element: Bytes::from_static(b"v"),
            rank,
            count,
            max_len,
        };
        let args = cmd.to_resp_args();

        prop_assert_eq!(&args[0], &Bytes::from_static(b"k"));
        prop_assert_eq!(&args[1], &Bytes::from_static(b"v"));

        let mut expected_tags: Vec<&[u8]> = Vec::new();
        if rank.is_some() {
            expected_tags.push(b"RANK");
        }
        if count.is_some() {
            expected_tags.push(b"COUNT");
        }
        if max_len.is_some() {
            expected_tags.push(b"MAXLEN");
        }

        let tags: Vec<&[u8]> = args[2..].chunks(2).map(|group| group[0].as_ref()).collect();
        prop_assert_eq!(tags, expected_tags.clone());
        // Every present group carries exactly one value token.
        prop_assert_eq!(args.len(), 2 + 2 * expected_tags.len());
    }

    /// Any negative timeout is rejected before a frame exists; any
    /// non-negative timeout builds a frame with the timeout as the final
    /// token.
    #[test]
    fn blocking_pop_timeout_law(timeout in any::<i64>()) {
        let built = BLPop::new(Bytes::from_static(b"k"), vec![], timeout);
        if timeout < 0 {
            let err = built.unwrap_err();
            prop_assert!(matches!(err, BerylError::InvalidArgument(_)));
        } else {
            let args = built.unwrap().to_resp_args();
            prop_assert_eq!(
                args.last().unwrap(),
                &Bytes::copy_from_slice(timeout.to_string().as_bytes())
            );
        }
    }

    /// Variadic pushes keep values in call order, whatever they are.
    #[test]
    fn push_preserves_value_order(values in proptest::collection::vec(any::<Vec<u8>>(), 1..8)) {
        let cmd = beryl::core::commands::list::RPush {
            key: Bytes::from_static(b"k"),
            values: values.iter().cloned().map(Bytes::from).collect(),
        };
        let args = cmd.to_resp_args();
        prop_assert_eq!(args.len(), 1 + values.len());
        for (arg, value) in args[1..].iter().zip(&values) {
            prop_assert_eq!(arg.as_ref(), value.as_slice());
        }
    }
}
