use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use super::entry::WakeLogEntry;
use super::streak::StreakEngine;
use super::value_objects::CutoffHour;
use crate::shared::{UserId, WakeLogId};

fn tz() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Entry whose local wall-clock time in `tz` is `date` at `hour:minute`.
fn entry_at(tz: &FixedOffset, date: NaiveDate, hour: u32, minute: u32) -> WakeLogEntry {
    let local = tz
        .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .single()
        .unwrap();
    WakeLogEntry::restore(
        WakeLogId::new(),
        UserId::from_string("user-1"),
        local.with_timezone(&Utc),
    )
}

fn local_now(tz: &FixedOffset, date: NaiveDate, hour: u32) -> DateTime<FixedOffset> {
    tz.from_local_datetime(&date.and_hms_opt(hour, 30, 0).unwrap())
        .single()
        .unwrap()
}

fn cutoff(hour: u8) -> CutoffHour {
    CutoffHour::new(hour).unwrap()
}

#[test]
fn test_empty_log_yields_zero_streak() {
    let tz = tz();
    assert_eq!(
        StreakEngine::current_streak(&[], day(2025, 6, 10), cutoff(8), &tz),
        0
    );
}

#[test]
fn test_three_consecutive_days() {
    let tz = tz();
    let logs = vec![
        entry_at(&tz, day(2025, 6, 10), 7, 0),
        entry_at(&tz, day(2025, 6, 9), 6, 45),
        entry_at(&tz, day(2025, 6, 8), 7, 15),
    ];
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &tz),
        3
    );
}

#[test]
fn test_gap_breaks_streak() {
    let tz = tz();
    // Entries on D and D-2, nothing on D-1.
    let logs = vec![
        entry_at(&tz, day(2025, 6, 10), 7, 0),
        entry_at(&tz, day(2025, 6, 8), 7, 0),
    ];
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &tz),
        1
    );
}

#[test]
fn test_no_entry_on_reference_day_yields_zero() {
    let tz = tz();
    let logs = vec![
        entry_at(&tz, day(2025, 6, 9), 7, 0),
        entry_at(&tz, day(2025, 6, 8), 7, 0),
    ];
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &tz),
        0
    );
}

#[test]
fn test_at_or_after_cutoff_never_counts() {
    let tz = tz();
    let now = local_now(&tz, day(2025, 6, 10), 9);

    // Exactly at the cutoff hour: strictly-less-than comparison excludes it.
    let at_cutoff = vec![entry_at(&tz, day(2025, 6, 10), 8, 0)];
    assert!(!StreakEngine::is_valid_today(&at_cutoff, &now, cutoff(8)));
    assert_eq!(
        StreakEngine::current_streak(&at_cutoff, day(2025, 6, 10), cutoff(8), &tz),
        0
    );

    let after = vec![entry_at(&tz, day(2025, 6, 10), 9, 0)];
    assert!(!StreakEngine::is_valid_today(&after, &now, cutoff(8)));
    assert_eq!(
        StreakEngine::current_streak(&after, day(2025, 6, 10), cutoff(8), &tz),
        0
    );
}

#[test]
fn test_seven_oclock_wake_with_eight_cutoff() {
    let tz = tz();
    let logs = vec![entry_at(&tz, day(2025, 6, 10), 7, 0)];
    let now = local_now(&tz, day(2025, 6, 10), 7);

    assert!(StreakEngine::is_valid_today(&logs, &now, cutoff(8)));
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &tz),
        1
    );
}

#[test]
fn test_duplicate_entries_on_one_day_count_once() {
    let tz = tz();
    let logs = vec![
        entry_at(&tz, day(2025, 6, 10), 6, 0),
        entry_at(&tz, day(2025, 6, 10), 7, 30),
        entry_at(&tz, day(2025, 6, 9), 7, 0),
    ];
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &tz),
        2
    );
}

#[test]
fn test_any_valid_entry_satisfies_is_valid_today() {
    let tz = tz();
    let now = local_now(&tz, day(2025, 6, 10), 10);
    // One late (invalid) entry plus one valid entry on the same day.
    let logs = vec![
        entry_at(&tz, day(2025, 6, 10), 9, 0),
        entry_at(&tz, day(2025, 6, 10), 7, 0),
    ];
    assert!(StreakEngine::is_valid_today(&logs, &now, cutoff(8)));
}

#[test]
fn test_last_valid_wake_skips_invalid_entries() {
    let tz = tz();
    // Descending order with an after-cutoff entry interleaved first.
    let late = entry_at(&tz, day(2025, 6, 10), 9, 0);
    let valid_recent = entry_at(&tz, day(2025, 6, 10), 7, 0);
    let valid_old = entry_at(&tz, day(2025, 6, 9), 6, 30);
    let logs = vec![late, valid_recent.clone(), valid_old];

    assert_eq!(
        StreakEngine::last_valid_wake(&logs, cutoff(8), &tz),
        Some(valid_recent.created_at())
    );
}

#[test]
fn test_results_do_not_depend_on_input_order() {
    let tz = tz();
    let a = entry_at(&tz, day(2025, 6, 10), 7, 0);
    let b = entry_at(&tz, day(2025, 6, 9), 6, 0);
    let c = entry_at(&tz, day(2025, 6, 8), 7, 45);

    let descending = vec![a.clone(), b.clone(), c.clone()];
    let scrambled = vec![b, c, a.clone()];

    assert_eq!(
        StreakEngine::current_streak(&descending, day(2025, 6, 10), cutoff(8), &tz),
        StreakEngine::current_streak(&scrambled, day(2025, 6, 10), cutoff(8), &tz),
    );
    assert_eq!(
        StreakEngine::last_valid_wake(&scrambled, cutoff(8), &tz),
        Some(a.created_at())
    );
}

#[test]
fn test_empty_log_has_no_last_wake() {
    let tz = tz();
    assert_eq!(StreakEngine::last_valid_wake(&[], cutoff(8), &tz), None);
}

#[test]
fn test_calendar_day_follows_the_given_timezone() {
    // 23:30 UTC on June 9 is 07:30 on June 10 in UTC+8.
    let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
    let created = Utc.with_ymd_and_hms(2025, 6, 9, 23, 30, 0).unwrap();
    let logs = vec![WakeLogEntry::restore(
        WakeLogId::new(),
        UserId::from_string("user-1"),
        created,
    )];

    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 10), cutoff(8), &east8),
        1
    );
    // In UTC the same instant is a 23:30 entry on June 9: after the cutoff.
    assert_eq!(
        StreakEngine::current_streak(&logs, day(2025, 6, 9), cutoff(8), &Utc),
        0
    );
}
