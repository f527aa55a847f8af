use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};

use super::entry::WakeLogEntry;
use super::value_objects::CutoffHour;

/// Streak computations over a snapshot of one user's wake log.
///
/// Pure functions: no I/O, no clock reads, no shared state. Callers supply the
/// current instant (or reference date) and the timezone in which calendar days
/// are compared; every instant is converted into that timezone before its
/// calendar date or hour is inspected. Safe to call concurrently on
/// independent inputs.
///
/// None of the functions assume the input is sorted.
pub struct StreakEngine;

impl StreakEngine {
    /// True iff at least one entry falls on the same calendar date as `now`
    /// (in `now`'s timezone) with a local hour strictly below the cutoff.
    ///
    /// Duplicate entries for the same day are allowed; any one valid entry
    /// satisfies the predicate.
    pub fn is_valid_today<Tz: TimeZone>(
        logs: &[WakeLogEntry],
        now: &DateTime<Tz>,
        cutoff: CutoffHour,
    ) -> bool {
        let tz = now.timezone();
        let today = now.date_naive();

        logs.iter().any(|entry| {
            let local = entry.created_at().with_timezone(&tz);
            local.date_naive() == today && Self::before_cutoff(&local, cutoff)
        })
    }

    /// The most recent valid (before-cutoff) wake-up, if any.
    ///
    /// Computed as the maximum `created_at` over valid entries, so the result
    /// does not depend on the order the store returned them in.
    pub fn last_valid_wake<Tz: TimeZone>(
        logs: &[WakeLogEntry],
        cutoff: CutoffHour,
        tz: &Tz,
    ) -> Option<DateTime<Utc>> {
        logs.iter()
            .filter(|entry| Self::before_cutoff(&entry.created_at().with_timezone(tz), cutoff))
            .map(|entry| entry.created_at())
            .max()
    }

    /// Count of consecutive calendar days ending at `reference` (walking
    /// backward) that each have at least one valid entry. Stops at the first
    /// day without one. Multiple valid entries on the same day count once.
    ///
    /// An empty log yields 0. A reference day without a valid entry yields 0
    /// even when earlier days have entries.
    pub fn current_streak<Tz: TimeZone>(
        logs: &[WakeLogEntry],
        reference: NaiveDate,
        cutoff: CutoffHour,
        tz: &Tz,
    ) -> u32 {
        let valid_days: HashSet<NaiveDate> = logs
            .iter()
            .map(|entry| entry.created_at().with_timezone(tz))
            .filter(|local| Self::before_cutoff(local, cutoff))
            .map(|local| local.date_naive())
            .collect();

        let mut streak = 0;
        let mut day = reference;
        while valid_days.contains(&day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    fn before_cutoff<Tz: TimeZone>(local: &DateTime<Tz>, cutoff: CutoffHour) -> bool {
        local.hour() < cutoff.get() as u32
    }
}
