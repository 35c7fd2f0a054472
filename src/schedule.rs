use crate::{
    pattern::{Pattern, PatternType, PatternValueType},
    utils, CronError, Result,
};
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike};
use std::{fmt::Display, str::FromStr};

/// Maximum year to look for upcoming events in.
pub const MAX_YEAR: i32 = 2099;

/// Represents a five-field cron schedule with its methods.
///
/// Day of month and day of week restrictions are combined: an event happens on days that satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    minute: Pattern,
    hour: Pattern,
    dom: Pattern,
    month: Pattern,
    dow: Pattern,
}

impl Schedule {
    /// Parses and validates provided `pattern` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError::InvalidFieldsCount`] if the pattern doesn't have exactly five fields,
    /// or another [`CronError`] if one of the fields is unparsable.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let elements: Vec<&str> = pattern.split_whitespace().collect();

        if elements.len() != 5 {
            return Err(CronError::InvalidFieldsCount(pattern));
        }

        Ok(Self {
            minute: Pattern::parse(PatternType::Minutes, elements[0])?,
            hour: Pattern::parse(PatternType::Hours, elements[1])?,
            dom: Pattern::parse(PatternType::Doms, elements[2])?,
            month: Pattern::parse(PatternType::Months, elements[3])?,
            dow: Pattern::parse(PatternType::Dows, elements[4])?,
        })
    }

    /// Returns time of the upcoming cron event, starting from the provided `current` value (inclusively).
    ///
    /// Events have minute resolution, so `current` with non-zero seconds is rounded up to the next minute.
    /// Schedule fields are matched against the local time of `current`'s timezone:
    /// - local times skipped by a DST transition never fire;
    /// - local times repeated by a DST transition fire at each of their instants.
    ///
    /// Returns `None` if there is no event until the end of [`MAX_YEAR`].
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let start = ceil_to_minute(current)?;
        let local = start.naive_local();
        let next = self.search(&start, Cursor::at(&local));

        // Before the clocks go back, later instants repeat local times which are already passed.
        let Some(shift) = repeated_shift(&start) else {
            return next;
        };
        let repeated = self.search(&start, Cursor::at(&local.checked_sub_signed(shift)?));

        match (next, repeated) {
            (Some(next), Some(repeated)) => Some(next.min(repeated)),
            (next, repeated) => next.or(repeated),
        }
    }

    /// Returns time of the first cron event strictly after `current`.
    pub fn after<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let next_minute = trunc_to_minute(current)?.checked_add_signed(TimeDelta::minutes(1))?;
        self.upcoming(&next_minute)
    }

    /// Returns iterator of events starting from `current` (inclusively).
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.upcoming(current),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of events starting from `current` (inclusively).
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, current: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        let next = self.upcoming(current);
        ScheduleIterator { schedule: self, next }
    }

    /// Walks local calendar from `cursor` and returns the first matching instant not before `start`.
    fn search<Tz: TimeZone>(&self, start: &DateTime<Tz>, mut cursor: Cursor) -> Option<DateTime<Tz>> {
        let tz = start.timezone();

        while cursor.year <= MAX_YEAR {
            let Some(month) = self.month.first_from(cursor.month, 12) else {
                cursor.inc_year();
                continue;
            };
            if month != cursor.month {
                cursor.set_month(month);
            }

            let Some(day) = self.first_day_from(&cursor) else {
                cursor.inc_month();
                continue;
            };
            if day != cursor.day {
                cursor.set_day(day);
            }

            let Some(hour) = self.hour.first_from(cursor.hour, 23) else {
                cursor.inc_day();
                continue;
            };
            if hour != cursor.hour {
                cursor.set_hour(hour);
            }

            let Some(minute) = self.minute.first_from(cursor.minute, 59) else {
                cursor.inc_hour();
                continue;
            };
            cursor.minute = minute;

            let local = tz.with_ymd_and_hms(cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute, 0);
            let candidates = match local {
                LocalResult::Single(time) => [Some(time), None],
                LocalResult::Ambiguous(earliest, latest) => [Some(earliest), Some(latest)],
                LocalResult::None => [None, None],
            };

            match candidates.into_iter().flatten().find(|time| time >= start) {
                Some(time) => return Some(time),
                None => cursor.inc_minute(),
            }
        }

        None
    }

    /// First day within the cursor's month, starting from the cursor's day, allowed by both day patterns.
    fn first_day_from(&self, cursor: &Cursor) -> Option<PatternValueType> {
        let last_day = utils::days_in_month(cursor.year, cursor.month);

        (cursor.day..=last_day).find(|day| {
            self.dom.matches(*day)
                && NaiveDate::from_ymd_opt(cursor.year, cursor.month, *day)
                    .is_some_and(|date| self.dow.matches(date.weekday().num_days_from_sunday()))
        })
    }
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScheduleIterator<Tz: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.after(&current);
        Some(current)
    }
}

/// Calendar position of the search, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    year: i32,
    month: PatternValueType,
    day: PatternValueType,
    hour: PatternValueType,
    minute: PatternValueType,
}

impl Cursor {
    /// Positions cursor at the local `time`, seconds are ignored.
    fn at(time: &NaiveDateTime) -> Self {
        Self {
            year: time.year(),
            month: time.month(),
            day: time.day(),
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    fn set_month(&mut self, month: PatternValueType) {
        self.month = month;
        self.set_day(1);
    }

    fn set_day(&mut self, day: PatternValueType) {
        self.day = day;
        self.set_hour(0);
    }

    fn set_hour(&mut self, hour: PatternValueType) {
        self.hour = hour;
        self.minute = 0;
    }

    /// Moves to the beginning of the next year.
    fn inc_year(&mut self) {
        self.year += 1;
        self.set_month(1);
    }

    /// Moves to the beginning of the next month.
    fn inc_month(&mut self) {
        if self.month < 12 {
            self.set_month(self.month + 1);
        } else {
            self.inc_year();
        }
    }

    /// Moves to the beginning of the next day.
    fn inc_day(&mut self) {
        if self.day < utils::days_in_month(self.year, self.month) {
            self.set_day(self.day + 1);
        } else {
            self.inc_month();
        }
    }

    /// Moves to the beginning of the next hour.
    fn inc_hour(&mut self) {
        if self.hour < 23 {
            self.set_hour(self.hour + 1);
        } else {
            self.inc_day();
        }
    }

    fn inc_minute(&mut self) {
        if self.minute < 59 {
            self.minute += 1;
        } else {
            self.inc_hour();
        }
    }
}

/// Drops seconds of `time`, moving the instant itself rather than its local fields.
fn trunc_to_minute<Tz: TimeZone>(time: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let excess = TimeDelta::seconds(i64::from(time.second())) + TimeDelta::nanoseconds(i64::from(time.nanosecond()));
    time.clone().checked_sub_signed(excess)
}

/// Rounds `time` up to the whole minute.
fn ceil_to_minute<Tz: TimeZone>(time: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let truncated = trunc_to_minute(time)?;
    if truncated < *time {
        truncated.checked_add_signed(TimeDelta::minutes(1))
    } else {
        Some(truncated)
    }
}

/// Returns how far the clocks go back if `time` is the first occurrence of a repeated local time.
fn repeated_shift<Tz: TimeZone>(time: &DateTime<Tz>) -> Option<TimeDelta> {
    match time.timezone().from_local_datetime(&time.naive_local()) {
        LocalResult::Ambiguous(earliest, latest) if earliest == *time => {
            let shift = earliest.offset().fix().local_minus_utc() - latest.offset().fix().local_minus_utc();
            Some(TimeDelta::seconds(i64::from(shift))).filter(|shift| *shift > TimeDelta::zero())
        }
        _ => None,
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {} {}", self.minute, self.hour, self.dom, self.month, self.dow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use chrono_tz::America::New_York;
    use rstest::rstest;
    use rstest_reuse::{apply, template};
    use std::time::Duration;

    fn at(time: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(time).unwrap()
    }

    fn new_york(time: &str) -> DateTime<chrono_tz::Tz> {
        at(time).with_timezone(&New_York)
    }

    #[rstest]
    #[case("*/5 * * * *", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00+00:00")]
    #[case("*/5 * * * *", "2024-01-01T00:00:01Z", "2024-01-01T00:05:00+00:00")]
    #[case("*/15 * * * *", "2024-01-01T00:01:00Z", "2024-01-01T00:15:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:30Z", "2024-01-01T00:01:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:00.001Z", "2024-01-01T00:01:00+00:00")]
    #[case("0 2 * * 1-5", "2024-01-01T00:00:00Z", "2024-01-01T02:00:00+00:00")]
    #[case("0 2 * * 1-5", "2024-01-05T02:00:01Z", "2024-01-08T02:00:00+00:00")]
    #[case("0 2 * * MON-FRI", "2024-01-06T00:00:00Z", "2024-01-08T02:00:00+00:00")]
    #[case("0 0 1 */2 *", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00+00:00")]
    #[case("0 0 1 */2 *", "2024-02-01T00:00:00Z", "2024-03-01T00:00:00+00:00")]
    #[case("30 3 15 * *", "2024-01-01T00:00:00Z", "2024-01-15T03:30:00+00:00")]
    #[case("30 3 15 * *", "2024-01-15T03:30:01Z", "2024-02-15T03:30:00+00:00")]
    #[case("0 12 * * 1,3,5", "2024-01-01T12:00:01Z", "2024-01-03T12:00:00+00:00")]
    #[case("0 12 * * 1,3,5", "2024-01-05T12:00:01Z", "2024-01-08T12:00:00+00:00")]
    #[case("0 0 * * 0", "2024-01-01T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 * * 7", "2024-01-01T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 * * SUN", "2024-01-01T00:00:00Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 * * 6,0", "2024-01-06T00:00:01Z", "2024-01-07T00:00:00+00:00")]
    #[case("0 0 1 JAN *", "2024-01-01T00:00:01Z", "2025-01-01T00:00:00+00:00")]
    #[case("0 0 1 1 *", "2024-12-31T23:59:59Z", "2025-01-01T00:00:00+00:00")]
    #[case("59 23 31 12 *", "2024-12-31T23:59:00Z", "2024-12-31T23:59:00+00:00")]
    #[case("0 0 31 * *", "2024-02-01T00:00:00Z", "2024-03-31T00:00:00+00:00")]
    #[case("0 0 31 */2 *", "2024-02-01T00:00:00Z", "2024-03-31T00:00:00+00:00")]
    #[case("0 0 28-31 2 *", "2025-02-28T00:00:01Z", "2026-02-28T00:00:00+00:00")]
    #[case("0 0 29 2 *", "2024-01-01T00:00:00Z", "2024-02-29T00:00:00+00:00")]
    #[case("0 0 29 2 *", "2024-03-01T00:00:00Z", "2028-02-29T00:00:00+00:00")]
    #[case("0 0 13 * 5", "2024-01-01T00:00:00Z", "2024-09-13T00:00:00+00:00")]
    #[case("0 9-17 * * 1-5", "2024-01-01T17:00:01Z", "2024-01-02T09:00:00+00:00")]
    #[case("15,45 9-17 * * 1-5", "2024-01-01T09:15:01Z", "2024-01-01T09:45:00+00:00")]
    #[case("0-30/10 * * * *", "2024-01-01T00:31:00Z", "2024-01-01T01:00:00+00:00")]
    #[case("0 12 * * *", "2024-01-01T13:00:00+02:00", "2024-01-02T12:00:00+02:00")]
    #[case("0 12 * * *", "2024-01-01T11:59:59-05:00", "2024-01-01T12:00:00-05:00")]
    #[case("0 0 30 2 *", "2024-01-01T00:00:00Z", "None")]
    #[case("0 0 1 1 *", "2099-01-01T00:00:01Z", "None")]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_upcoming(#[case] pattern: &str, #[case] current: &str, #[case] expected: &str) {
        let schedule = Schedule::new(pattern).unwrap();
        let current = at(current);
        let next = schedule.upcoming(&current);

        if expected == "None" {
            assert!(
                next.is_none(),
                "pattern = {pattern}, schedule = {schedule:?}, current = {current}, next = {next:?}"
            );
        } else {
            assert!(
                next.is_some(),
                "pattern = {pattern}, schedule = {schedule:?}, current = {current}, next = {next:?}"
            );

            assert_eq!(
                next.unwrap().to_rfc3339(),
                expected,
                "pattern = {pattern}, schedule = {schedule:?}, current = {current}, next = {next:?}"
            );
        }
    }

    #[rstest]
    #[case("*/5 * * * *", "2024-01-01T00:00:00Z", "2024-01-01T00:05:00+00:00")]
    #[case("*/5 * * * *", "2024-01-01T00:04:59.999Z", "2024-01-01T00:05:00+00:00")]
    #[case("* * * * *", "2024-01-01T00:00:00Z", "2024-01-01T00:01:00+00:00")]
    #[case("0 0 1 1 *", "2024-01-01T00:00:00Z", "2025-01-01T00:00:00+00:00")]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_after(#[case] pattern: &str, #[case] current: &str, #[case] expected: &str) {
        let schedule = Schedule::new(pattern).unwrap();
        assert_eq!(schedule.after(&at(current)).unwrap().to_rfc3339(), expected);
    }

    #[rstest]
    #[case("2024-12-31T23:59:30Z", "2024-12-31T23:59:00+00:00", "2025-01-01T00:00:00+00:00")]
    #[case("2024-02-29T10:15:00+03:00", "2024-02-29T10:15:00+03:00", "2024-02-29T10:15:00+03:00")]
    #[case("2024-02-29T10:15:00.000001+03:00", "2024-02-29T10:15:00+03:00", "2024-02-29T10:16:00+03:00")]
    fn test_minute_rounding(#[case] time: &str, #[case] truncated: &str, #[case] rounded_up: &str) {
        let time = at(time);
        assert_eq!(trunc_to_minute(&time).unwrap().to_rfc3339(), truncated);
        assert_eq!(ceil_to_minute(&time).unwrap().to_rfc3339(), rounded_up);
    }

    #[test]
    fn test_minute_rounding_in_repeated_hour() {
        // 01:20:30 EDT, the first pass of 01:xx on the fall back day
        let time = new_york("2024-11-03T05:20:30Z");
        assert_eq!(trunc_to_minute(&time).unwrap().to_rfc3339(), "2024-11-03T01:20:00-04:00");
        assert_eq!(ceil_to_minute(&time).unwrap().to_rfc3339(), "2024-11-03T01:21:00-04:00");

        // 01:20:30 EST, the second pass
        let time = new_york("2024-11-03T06:20:30Z");
        assert_eq!(trunc_to_minute(&time).unwrap().to_rfc3339(), "2024-11-03T01:20:00-05:00");
        assert_eq!(ceil_to_minute(&time).unwrap().to_rfc3339(), "2024-11-03T01:21:00-05:00");
    }

    #[test]
    fn test_repeated_shift() {
        assert_eq!(repeated_shift(&new_york("2024-11-03T05:20:00Z")), Some(TimeDelta::hours(1)));
        assert_eq!(repeated_shift(&new_york("2024-11-03T06:20:00Z")), None);
        assert_eq!(repeated_shift(&new_york("2024-11-03T04:59:00Z")), None);
        assert_eq!(repeated_shift(&new_york("2024-03-10T07:00:00Z")), None);
        assert_eq!(repeated_shift(&at("2024-11-03T05:20:00Z")), None);
    }

    #[test]
    fn test_cursor_at() {
        let local = at("2024-02-29T10:15:59+03:00").naive_local();
        assert_eq!(
            Cursor::at(&local),
            Cursor {
                year: 2024,
                month: 2,
                day: 29,
                hour: 10,
                minute: 15
            }
        );
    }

    #[rstest]
    // clocks jump from 02:00 EST to 03:00 EDT
    #[case("30 2 * * *", "2024-03-10T05:00:00Z", "2024-03-11T02:30:00-04:00")]
    #[case("* * * * *", "2024-03-10T06:59:30Z", "2024-03-10T03:00:00-04:00")]
    #[case("0 2,3 10 3 *", "2024-03-10T05:00:00Z", "2024-03-10T03:00:00-04:00")]
    // clocks go back from 02:00 EDT to 01:00 EST
    #[case("0 * * * *", "2024-11-03T05:20:00Z", "2024-11-03T01:00:00-05:00")]
    #[case("0 * * * *", "2024-11-03T04:30:00Z", "2024-11-03T01:00:00-04:00")]
    #[case("0 * * * *", "2024-11-03T06:20:00Z", "2024-11-03T02:00:00-05:00")]
    #[case("30 1 * * *", "2024-11-03T06:10:00Z", "2024-11-03T01:30:00-05:00")]
    #[case("30 1 * * *", "2024-11-03T05:40:00Z", "2024-11-03T01:30:00-05:00")]
    #[case("30 1 * * *", "2024-11-03T05:10:00Z", "2024-11-03T01:30:00-04:00")]
    #[case("30 1 * * *", "2024-11-03T06:40:00Z", "2024-11-04T01:30:00-05:00")]
    #[case("* * * * *", "2024-11-03T05:59:30Z", "2024-11-03T01:00:00-05:00")]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_upcoming_across_dst(#[case] pattern: &str, #[case] current: &str, #[case] expected: &str) {
        let schedule = Schedule::new(pattern).unwrap();
        let current = new_york(current);
        let next = schedule.upcoming(&current);

        assert_eq!(
            next.map(|t| t.to_rfc3339()),
            Some(expected.to_string()),
            "pattern = {pattern}, current = {current}"
        );
    }

    #[rstest]
    #[case(
        "0 * * * *",
        "2024-11-03T03:30:00Z",
        &[
            "2024-11-03T00:00:00-04:00",
            "2024-11-03T01:00:00-04:00",
            "2024-11-03T01:00:00-05:00",
            "2024-11-03T02:00:00-05:00",
            "2024-11-03T03:00:00-05:00",
        ]
    )]
    #[case(
        "* * * * *",
        "2024-11-03T05:58:00Z",
        &[
            "2024-11-03T01:58:00-04:00",
            "2024-11-03T01:59:00-04:00",
            "2024-11-03T01:00:00-05:00",
            "2024-11-03T01:01:00-05:00",
        ]
    )]
    #[case(
        "30 1,2 * * *",
        "2024-11-03T05:00:00Z",
        &[
            "2024-11-03T01:30:00-04:00",
            "2024-11-03T01:30:00-05:00",
            "2024-11-03T02:30:00-05:00",
            "2024-11-04T01:30:00-05:00",
        ]
    )]
    #[case(
        "*/30 1-3 * * *",
        "2024-03-10T05:00:00Z",
        &[
            "2024-03-10T01:00:00-05:00",
            "2024-03-10T01:30:00-05:00",
            "2024-03-10T03:00:00-04:00",
            "2024-03-10T03:30:00-04:00",
            "2024-03-11T01:00:00-04:00",
        ]
    )]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter_across_dst(#[case] pattern: &str, #[case] current: &str, #[case] expected: &[&str]) {
        let schedule = Schedule::new(pattern).unwrap();
        let times = schedule
            .iter(&new_york(current))
            .take(expected.len())
            .map(|t| t.to_rfc3339())
            .collect::<Vec<_>>();

        assert_eq!(times, expected, "pattern = {pattern}, current = {current}");
    }

    #[test]
    fn test_cursor_increments() {
        let mut cursor = Cursor {
            year: 2024,
            month: 2,
            day: 28,
            hour: 23,
            minute: 59,
        };

        cursor.inc_minute();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2024, 2, 29, 0, 0));

        cursor.inc_day();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2024, 3, 1, 0, 0));

        cursor.set_hour(23);
        cursor.inc_hour();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2024, 3, 2, 0, 0));

        cursor.set_month(12);
        cursor.set_day(31);
        cursor.inc_day();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2025, 1, 1, 0, 0));

        cursor.set_month(2);
        cursor.set_day(28);
        cursor.inc_day();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2025, 3, 1, 0, 0));

        cursor.set_hour(5);
        cursor.minute = 30;
        cursor.inc_month();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2025, 4, 1, 0, 0));

        cursor.inc_year();
        assert_eq!((cursor.year, cursor.month, cursor.day, cursor.hour, cursor.minute), (2026, 1, 1, 0, 0));
    }

    #[template]
    #[rstest]
    #[case("* * * * *", "* * * * *")]
    #[case("*/5 * * * *", "0/5 * * * *")]
    #[case("0 */6 1/2 */3 *", "0 0/6 1/2 1/3 *")]
    #[case("0 0 * * SUN", "0 0 * * 0")]
    #[case("0 0 * * 7", "0 0 * * 7")]
    #[case("0 12 * JAN-MAR MON,WED,FRI", "0 12 * 1-3 1,3,5")]
    #[case("15,45 9-17 * * 1-5", "15,45 9-17 * * 1-5")]
    #[case("0-30/5 0 1 1 *", "0-30/5 0 1 1 *")]
    #[case("  1   2  3 4 5 ", "1 2 3 4 5")]
    #[case("0 0 1 dec sat", "0 0 1 12 6")]
    fn valid_schedules_to_test(#[case] input: &str, #[case] expected: &str) {}

    #[apply(valid_schedules_to_test)]
    fn test_schedule_display_and_new(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Schedule::new(input).unwrap().to_string(), expected);
    }

    #[apply(valid_schedules_to_test)]
    fn test_try_from_string(#[case] input: &str, #[case] _expected: &str) {
        // &str
        let schedule1 = Schedule::new(input).unwrap();
        let schedule2 = Schedule::try_from(input).unwrap();
        assert_eq!(schedule1, schedule2);

        // &String
        let tst_string = String::from(input);
        let schedule2 = Schedule::try_from(&tst_string).unwrap();
        assert_eq!(schedule1, schedule2);

        // String
        let schedule2 = Schedule::try_from(tst_string).unwrap();
        assert_eq!(schedule1, schedule2);

        // from_str
        let schedule2 = Schedule::from_str(input).unwrap();
        assert_eq!(schedule1, schedule2);
    }

    #[apply(valid_schedules_to_test)]
    fn test_schedule_to_string(#[case] input: &str, #[case] expected: &str) {
        let schedule = Schedule::new(input).unwrap();

        let string: String = (&schedule).into();
        assert_eq!(string, expected);

        let string: String = schedule.into();
        assert_eq!(string, expected);
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter() {
        let schedule = Schedule::new("0 12 * 1 MON").unwrap();
        let mut iter = schedule.iter(&at("2024-01-01T00:00:00+00:00"));

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-08T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-15T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-22T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-29T12:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2025-01-06T12:00:00+00:00");
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter_every_minute() {
        let schedule = Schedule::new("* * * * *").unwrap();
        let mut iter = schedule.iter(&at("2024-01-01T23:58:00+00:00"));

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T23:58:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T23:59:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-02T00:00:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-02T00:01:00+00:00");
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter_every_weekday() {
        let schedule = Schedule::new("0 0 * * 1-5").unwrap();
        let iter = schedule.iter(&at("2024-01-04T00:00:00+00:00"));

        assert_eq!(
            iter.take(4).map(|t| t.to_rfc3339()).collect::<Vec<_>>(),
            [
                "2024-01-04T00:00:00+00:00",
                "2024-01-05T00:00:00+00:00",
                "2024-01-08T00:00:00+00:00",
                "2024-01-09T00:00:00+00:00",
            ]
        );
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_iter_until_max_year() {
        let schedule = Schedule::new("0 0 1 1 *").unwrap();
        let mut iter = schedule.iter(&at("2098-06-01T00:00:00+00:00"));

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2099-01-01T00:00:00+00:00");
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    #[timeout(Duration::from_secs(1))]
    fn test_schedule_into_iter() {
        let schedule = Schedule::new("30 */12 * * *").unwrap();
        let mut iter = schedule.into_iter(&at("2024-01-01T00:00:00+00:00"));

        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T00:30:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-01T12:30:00+00:00");
        assert_eq!(iter.next().unwrap().to_rfc3339(), "2024-01-02T00:30:00+00:00");
    }

    #[template]
    #[rstest]
    #[case("* * * *")]
    #[case("* * * * * *")]
    #[case("0 0 0 1 1 ? 2024")]
    #[case("@hourly")]
    #[case("")]
    fn wrong_fields_count_to_test(#[case] input: &str) {}

    #[apply(wrong_fields_count_to_test)]
    fn test_wrong_fields_count(#[case] input: &str) {
        assert_eq!(Schedule::new(input), Err(CronError::InvalidFieldsCount(input.to_string())));
    }

    #[template]
    #[rstest]
    #[case("* * ? * *")]
    #[case("0 0 L * *")]
    #[case("0 0 15W * *")]
    #[case("0 0 * * 1#1")]
    #[case("0 0 * * 5L")]
    #[case("60 * * * *")]
    #[case("* 24 * * *")]
    #[case("* * 0 * *")]
    #[case("* * 32 * *")]
    #[case("* * * 0 *")]
    #[case("* * * 13 *")]
    #[case("* * * * 8")]
    #[case("5-1 * * * *")]
    #[case("*/0 * * * *")]
    #[case("*/60 * * * *")]
    #[case("*,5 * * * *")]
    #[case("1,,2 * * * *")]
    #[case("a * * * *")]
    #[case("* * * FOO *")]
    fn invalid_schedules_to_test(#[case] input: &str) {}

    #[apply(invalid_schedules_to_test)]
    fn test_invalid_schedule_constructor(#[case] input: &str) {
        let result = Schedule::new(input);
        assert!(result.is_err(), "input = {input}");
        assert!(
            !matches!(result, Err(CronError::InvalidFieldsCount(_))),
            "input = {input}"
        );
    }

    #[apply(invalid_schedules_to_test)]
    fn test_try_from_invalid_string(#[case] input: &str) {
        assert!(Schedule::try_from(input).is_err(), "input = {input}");
        assert!(Schedule::from_str(input).is_err(), "input = {input}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let schedule = Schedule::new("*/5 * * * MON").unwrap();

        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, "\"0/5 * * * 1\"");

        let restored: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, schedule);

        assert!(serde_json::from_str::<Schedule>("\"* * *\"").is_err());
    }
}
