//! Parameterized tests using test-case

use chrono::{TimeZone, Utc};
use confirmable::adapters::memory::MemoryRecord;
use confirmable::core::models::{FlagAction, FlagValue, UserId, parse_timestamp};
use confirmable::core::ports::FieldStore;
use test_case::test_case;

use super::common::fixtures::{now, single};

// =============================================================================
// Flag value classification
// =============================================================================

#[test_case(FlagValue::Bool(false), true ; "false clears")]
#[test_case(FlagValue::from("0"), true ; "zero string clears")]
#[test_case(FlagValue::from(""), true ; "blank clears")]
#[test_case(FlagValue::Bool(true), false ; "true confirms")]
#[test_case(FlagValue::from("1"), false ; "one string confirms")]
#[test_case(FlagValue::from("on"), false ; "on confirms")]
#[test_case(FlagValue::from("false"), false ; "false string is truthy text")]
#[test_case(FlagValue::from("2024-01-01"), false ; "date confirms")]
fn test_is_falsy(value: FlagValue, expected: bool) {
    assert_eq!(value.is_falsy(), expected);
}

#[test_case("2024-01-01", Some((2024, 1, 1, 0, 0, 0)) ; "bare date")]
#[test_case("2024-01-01 13:45:10", Some((2024, 1, 1, 13, 45, 10)) ; "space separated")]
#[test_case("2024-01-01T13:45:10", Some((2024, 1, 1, 13, 45, 10)) ; "t separated")]
#[test_case("2024-01-01 13:45", Some((2024, 1, 1, 13, 45, 0)) ; "minutes only")]
#[test_case("2024-01-01T13:45:10Z", Some((2024, 1, 1, 13, 45, 10)) ; "rfc3339 utc")]
#[test_case("2024-01-01T13:45:10-05:00", Some((2024, 1, 1, 18, 45, 10)) ; "rfc3339 offset")]
#[test_case("1", None ; "one is not a date")]
#[test_case("yesterday", None ; "words are not dates")]
fn test_parse_timestamp(input: &str, expected: Option<(i32, u32, u32, u32, u32, u32)>) {
    let expected = expected.map(|(y, mo, d, h, mi, s)| Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap());
    assert_eq!(parse_timestamp(input), expected);
}

#[test]
fn test_truthy_text_confirms_now() {
    assert_eq!(FlagValue::from("yes").action(), FlagAction::Confirm(None));
}

// =============================================================================
// Setter outcomes on a fresh record
// =============================================================================

#[test_case(FlagValue::Bool(true), true ; "true")]
#[test_case(FlagValue::from("1"), true ; "one")]
#[test_case(FlagValue::from("2023-12-31"), true ; "date")]
#[test_case(FlagValue::Bool(false), false ; "false")]
#[test_case(FlagValue::from("0"), false ; "zero")]
fn test_fresh_record_after_setter(value: FlagValue, confirmed: bool) {
    let confirmable = single();
    let mut record = MemoryRecord::new();

    confirmable
        .set_confirmed_flag(&mut record, "recorded", value, &UserId(7))
        .unwrap();

    assert_eq!(confirmable.is_confirmed(&record, "recorded").unwrap(), confirmed);
    assert_eq!(record.user_id("recorded_confirmed_by").is_some(), confirmed);
}

#[test_case(Some(7), 7 ; "current user")]
#[test_case(None, 1 ; "fallback")]
fn test_confirmer_identity(actor: Option<i64>, expected: i64) {
    let confirmable = single();
    let mut record = MemoryRecord::new();
    let actor = actor.map(UserId);

    confirmable
        .set_confirmed_flag(&mut record, "recorded", true, &actor)
        .unwrap();

    assert_eq!(record.user_id("recorded_confirmed_by"), Some(UserId(expected)));
    assert_eq!(record.timestamp("recorded_confirmed_at"), Some(now()));
}
