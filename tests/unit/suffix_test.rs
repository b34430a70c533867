//! Tests for custom and empty suffixes

use confirmable::adapters::memory::MemoryRecord;
use confirmable::core::models::UserId;
use confirmable::core::ports::FieldStore;
use confirmable::{AttachArg, AttachOptions, Confirmable, ConfirmableError};

use super::common::fixtures::{RegistryBuilder, now};

#[test]
fn custom_suffix_names_backing_fields() {
    let confirmable = RegistryBuilder::new()
        .names(&["recorded"])
        .suffix("_approved")
        .build();
    let mut record = MemoryRecord::new();

    confirmable
        .set_confirmed_flag(&mut record, "recorded", true, &UserId(3))
        .unwrap();

    assert_eq!(record.timestamp("recorded_approved_at"), Some(now()));
    assert_eq!(record.user_id("recorded_approved_by"), Some(UserId(3)));
    assert_eq!(record.timestamp("recorded_confirmed_at"), None);
}

#[test]
fn empty_suffix_uses_bare_fields() {
    let confirmable = RegistryBuilder::new().names(&["recorded"]).suffix("").build();
    let mut record = MemoryRecord::new();
    record.set_timestamp("recorded_at", Some(now()));
    record.set_user_id("recorded_by", Some(UserId(1)));

    assert!(confirmable.is_confirmed(&record, "recorded").unwrap());
    assert_eq!(confirmable.attribute("recorded").unwrap().at_alias(), None);
    // The bare `_at` name is the backing field itself
    assert_eq!(confirmable.read_timestamp_field(&record, "recorded_at").unwrap(), Some(now()));
}

#[test]
fn trailing_options_argument_is_configuration() {
    let mut confirmable = Confirmable::new();
    confirmable
        .attach([
            AttachArg::from("recorded"),
            AttachArg::from(AttachOptions::with_suffix("_ok")),
        ])
        .unwrap();

    assert_eq!(confirmable.attributes().count(), 1);
    assert_eq!(confirmable.attribute("recorded").unwrap().at_field(), "recorded_ok_at");
}

#[test]
fn separate_calls_keep_their_own_suffix() {
    let mut confirmable = Confirmable::new();
    confirmable.attach(["recorded"]).unwrap();
    confirmable
        .attach_with(["edited"], &AttachOptions::with_suffix("_checked"))
        .unwrap();

    assert_eq!(confirmable.attribute("recorded").unwrap().by_field(), "recorded_confirmed_by");
    assert_eq!(confirmable.attribute("edited").unwrap().by_field(), "edited_checked_by");
}

#[test]
fn blank_name_is_rejected() {
    let mut confirmable = Confirmable::new();
    assert!(matches!(
        confirmable.attach([" "]),
        Err(ConfirmableError::InvalidName(_))
    ));
}

#[test]
fn custom_fallback_user() {
    let confirmable = RegistryBuilder::new().names(&["recorded"]).fallback(11).build();
    let mut record = MemoryRecord::new();

    confirmable
        .set_confirmed_flag(&mut record, "recorded", true, &None::<UserId>)
        .unwrap();

    assert_eq!(record.user_id("recorded_confirmed_by"), Some(UserId(11)));
}
