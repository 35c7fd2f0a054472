/// Common utility functions.
use crate::pattern::PatternValueType;

/// Converts string into unsigned number within `min..=max`.
pub(crate) fn parse_number(input: &str, min: PatternValueType, max: PatternValueType) -> Option<PatternValueType> {
    input
        .parse::<PatternValueType>()
        .ok()
        .filter(|value| (min..=max).contains(value))
}

/// Returns position of case-insensitive mnemonic `input` in `values`.
pub(crate) fn parse_mnemonic(input: &str, values: &[&str]) -> Option<PatternValueType> {
    values
        .iter()
        .position(|value| value.eq_ignore_ascii_case(input))
        .map(|index| index as PatternValueType)
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in the month, `month` is expected to be within `1..=12`.
pub(crate) fn days_in_month(year: i32, month: PatternValueType) -> PatternValueType {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
