/// Streak engine: pure statistics over a habit's completion dates
///
/// Every function here is side-effect free and parameterized by a
/// reference `today`, so results are reproducible in tests. All streak
/// arithmetic runs on integer day-ids (days since the common era) rather
/// than timestamp differences - calendar-day identity is what matters, and
/// integer ids are immune to DST and time-of-day drift.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Integer calendar-day identifier for streak arithmetic
///
/// Consecutive calendar days always differ by exactly 1.
pub fn day_id(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

/// Completed day-ids at or before `today`
///
/// Future-dated completions must never contribute to a streak or a count,
/// so every statistic starts from this filtered set.
fn day_ids_up_to(dates: &[NaiveDate], today: NaiveDate) -> BTreeSet<i32> {
    let today_id = day_id(today);
    dates
        .iter()
        .map(|d| day_id(*d))
        .filter(|id| *id <= today_id)
        .collect()
}

/// Check whether the habit was completed on the given calendar day
pub fn is_day_completed(dates: &[NaiveDate], year: i32, month: u32, day: u32) -> bool {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => dates.iter().any(|d| *d == date),
        None => false,
    }
}

/// Current consecutive-day streak ending at today or yesterday
///
/// If today is completed the count starts there; otherwise, if yesterday
/// is completed the streak is still alive and counts backward from
/// yesterday. Anything else is a broken streak and reads 0.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let ids = day_ids_up_to(dates, today);
    let today_id = day_id(today);

    let start = if ids.contains(&today_id) {
        today_id
    } else if ids.contains(&(today_id - 1)) {
        today_id - 1
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut cursor = start;
    while ids.contains(&cursor) {
        streak += 1;
        cursor -= 1;
    }
    streak
}

/// Longest run of consecutive completed days ever achieved
///
/// Walks forward from each run start (an id whose predecessor is not in
/// the set), so disjoint runs are measured independently.
pub fn longest_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let ids = day_ids_up_to(dates, today);

    let mut longest = 0;
    for &id in &ids {
        if ids.contains(&(id - 1)) {
            continue; // not a run start
        }

        let mut length = 0;
        let mut cursor = id;
        while ids.contains(&cursor) {
            length += 1;
            cursor += 1;
        }
        longest = longest.max(length);
    }
    longest
}

/// Count of completions falling within the given month
///
/// Days after `today` never count, so a month still in progress only
/// reflects days up to and including today.
pub fn completions_in_month(dates: &[NaiveDate], year: i32, month: u32, today: NaiveDate) -> u32 {
    let today_id = day_id(today);
    dates
        .iter()
        .filter(|d| d.year() == year && d.month() == month && day_id(**d) <= today_id)
        .count() as u32
}

/// Calculated statistics summary for one habit
///
/// This bundles the individual streak functions into the shape the
/// presentation layer renders on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    /// Current consecutive days completed
    pub current_streak: u32,
    /// Best streak ever achieved
    pub longest_streak: u32,
    /// Total completions at or before today
    pub total_completions: u32,
    /// Most recent completed day (None if never completed)
    pub last_completed: Option<NaiveDate>,
    /// Completions within today's month
    pub completions_this_month: u32,
}

impl HabitStats {
    /// Compute the full summary from a habit's completion dates
    pub fn calculate(dates: &[NaiveDate], today: NaiveDate) -> Self {
        let past = day_ids_up_to(dates, today);

        Self {
            current_streak: current_streak(dates, today),
            longest_streak: longest_streak(dates, today),
            total_completions: past.len() as u32,
            last_completed: dates
                .iter()
                .filter(|d| day_id(**d) <= day_id(today))
                .max()
                .copied(),
            completions_this_month: completions_in_month(
                dates,
                today.year(),
                today.month(),
                today,
            ),
        }
    }
}
