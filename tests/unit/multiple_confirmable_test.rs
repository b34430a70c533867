//! Tests for a record type with several confirmable attributes

use confirmable::adapters::memory::{MemoryRecord, MemoryUsers};
use confirmable::core::models::UserId;
use confirmable::core::ports::FieldStore;

use super::common::fixtures::{multiple, now};

#[test]
fn attributes_are_listed_in_attach_order() {
    let confirmable = multiple();
    let names: Vec<&str> = confirmable.attributes().map(|a| a.name()).collect();
    assert_eq!(names, ["recorded", "produced", "edited"]);
}

#[test]
fn date_and_confirmer_confirm_only_that_attribute() {
    let confirmable = multiple();
    let mut record = MemoryRecord::new();
    record.set_timestamp("recorded_confirmed_at", Some(now()));
    record.set_user_id("recorded_confirmed_by", Some(UserId(1)));

    assert!(confirmable.is_confirmed(&record, "recorded").unwrap());
    assert!(!confirmable.is_confirmed(&record, "produced").unwrap());
    assert!(!confirmable.is_confirmed(&record, "edited").unwrap());
}

#[test]
fn confirming_one_leaves_others_untouched() {
    let confirmable = multiple();
    let mut record = MemoryRecord::new();

    confirmable
        .set_confirmed_flag(&mut record, "produced", true, &UserId(5))
        .unwrap();

    assert!(confirmable.is_confirmed(&record, "produced").unwrap());
    assert_eq!(record.timestamp("recorded_confirmed_at"), None);
    assert_eq!(record.user_id("edited_confirmed_by"), None);
}

#[test]
fn clearing_one_leaves_others_confirmed() {
    let confirmable = multiple();
    let mut record = MemoryRecord::new();
    for name in ["recorded", "produced", "edited"] {
        confirmable
            .set_confirmed_flag(&mut record, name, true, &UserId(5))
            .unwrap();
    }

    confirmable
        .set_confirmed_flag(&mut record, "produced", "0", &UserId(5))
        .unwrap();

    let confirmed: Vec<bool> = confirmable
        .statuses(&record)
        .into_iter()
        .map(|s| s.confirmed)
        .collect();
    assert_eq!(confirmed, [true, false, true]);
}

#[test]
fn confirmers_are_independent() {
    let confirmable = multiple();
    let mut users = MemoryUsers::new();
    let ada = users.create("Ada");
    let grace = users.create("Grace");
    let mut record = MemoryRecord::new();

    confirmable.set_confirmer(&mut record, "recorded", &ada).unwrap();
    confirmable.set_confirmer(&mut record, "edited", &grace).unwrap();

    assert_eq!(confirmable.confirmer(&record, "recorded", &users).unwrap(), Some(ada));
    assert_eq!(confirmable.confirmer(&record, "produced", &users).unwrap(), None);
    assert_eq!(confirmable.confirmer(&record, "edited", &users).unwrap(), Some(grace));
}

#[test]
fn aliases_resolve_to_their_own_attribute() {
    let confirmable = multiple();
    let mut record = MemoryRecord::new();
    record.set_timestamp("edited_confirmed_at", Some(now()));

    assert_eq!(confirmable.read_timestamp_field(&record, "edited_at").unwrap(), Some(now()));
    assert_eq!(confirmable.read_timestamp_field(&record, "recorded_at").unwrap(), None);
}
