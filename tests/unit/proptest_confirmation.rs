//! Property-based tests for the confirmation policy
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::{DateTime, TimeZone, Utc};
use confirmable::adapters::memory::MemoryRecord;
use confirmable::core::models::UserId;
use confirmable::core::ports::FieldStore;
use proptest::prelude::*;

use super::common::fixtures::{RegistryBuilder, multiple, single};

fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn record_with(at: Option<i64>, by: Option<i64>) -> MemoryRecord {
    let mut record = MemoryRecord::new();
    record.set_timestamp("recorded_confirmed_at", at.map(timestamp));
    record.set_user_id("recorded_confirmed_by", by.map(UserId));
    record
}

proptest! {
    /// Confirmed exactly when both fields are present
    #[test]
    fn confirmed_iff_both_present(
        at in proptest::option::of(0i64..4_000_000_000),
        by in proptest::option::of(any::<i64>())
    ) {
        let confirmable = single();
        let record = record_with(at, by);
        prop_assert_eq!(
            confirmable.is_confirmed(&record, "recorded").unwrap(),
            at.is_some() && by.is_some()
        );
    }

    /// False always clears, whatever the prior state
    #[test]
    fn false_always_clears(
        at in proptest::option::of(0i64..4_000_000_000),
        by in proptest::option::of(any::<i64>())
    ) {
        let confirmable = single();
        let mut record = record_with(at, by);
        confirmable.set_confirmed_flag(&mut record, "recorded", false, &UserId(3)).unwrap();
        prop_assert_eq!(record.timestamp("recorded_confirmed_at"), None);
        prop_assert_eq!(record.user_id("recorded_confirmed_by"), None);
    }

    /// Re-confirming never changes an existing confirmation
    #[test]
    fn reconfirm_is_noop(at in 0i64..4_000_000_000, by in any::<i64>(), actor in any::<i64>()) {
        let confirmable = single();
        let mut record = record_with(Some(at), Some(by));
        confirmable.set_confirmed_flag(&mut record, "recorded", true, &UserId(actor)).unwrap();
        prop_assert_eq!(record.timestamp("recorded_confirmed_at"), Some(timestamp(at)));
        prop_assert_eq!(record.user_id("recorded_confirmed_by"), Some(UserId(by)));
    }

    /// Confirming without an actor records the fallback id
    #[test]
    fn fallback_is_recorded(fallback in any::<i64>()) {
        let confirmable = RegistryBuilder::new().names(&["recorded"]).fallback(fallback).build();
        let mut record = MemoryRecord::new();
        confirmable.set_confirmed_flag(&mut record, "recorded", "1", &None::<UserId>).unwrap();
        prop_assert_eq!(record.user_id("recorded_confirmed_by"), Some(UserId(fallback)));
    }

    /// Changing one attribute never changes another's derived state
    #[test]
    fn attributes_are_independent(target in 0usize..3, confirm in any::<bool>()) {
        let names = ["recorded", "produced", "edited"];
        let confirmable = multiple();
        let mut record = MemoryRecord::new();
        confirmable.set_confirmed_flag(&mut record, names[(target + 1) % 3], true, &UserId(1)).unwrap();
        let before: Vec<_> = names
            .iter()
            .filter(|n| **n != names[target])
            .map(|n| confirmable.status(&record, n).unwrap())
            .collect();

        confirmable.set_confirmed_flag(&mut record, names[target], confirm, &UserId(2)).unwrap();

        let after: Vec<_> = names
            .iter()
            .filter(|n| **n != names[target])
            .map(|n| confirmable.status(&record, n).unwrap())
            .collect();
        prop_assert_eq!(before, after);
    }
}
