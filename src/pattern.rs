use crate::{utils, CronError, Result};
use std::fmt::Display;

pub(crate) type PatternValueType = u32;

/// Parsed single field of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Pattern {
    type_: PatternType,
    pattern: PatternItem,
}

impl Pattern {
    pub(crate) fn parse(type_: PatternType, input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(CronError::InvalidCronPattern(input.to_owned()));
        }

        let mut items = input
            .split(',')
            .map(|value| PatternItem::parse(type_, value))
            .collect::<Result<Vec<_>>>()?;

        if items.len() > 1 && items.contains(&PatternItem::All) {
            return Err(CronError::InvalidCronPattern(input.to_owned()));
        }

        let pattern = if items.len() > 1 {
            PatternItem::List(items)
        } else {
            items.remove(0)
        };

        Ok(Self { type_, pattern })
    }

    /// Returns `true` if `value` is allowed by the pattern.
    pub(crate) fn matches(&self, value: PatternValueType) -> bool {
        // Sunday may be written both as 0 and 7.
        self.pattern.matches(value) || (self.type_ == PatternType::Dows && value == 0 && self.pattern.matches(7))
    }

    /// Returns the first allowed value within `start..=max`.
    pub(crate) fn first_from(&self, start: PatternValueType, max: PatternValueType) -> Option<PatternValueType> {
        (start..=max).find(|value| self.matches(*value))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum PatternType {
    Minutes,
    Hours,
    Doms,
    Months,
    Dows,
}

impl PatternType {
    const DAYS_OF_WEEK: [&'static str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&'static str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    fn min_max(&self) -> (PatternValueType, PatternValueType) {
        match self {
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
            Self::Dows => (0, 7),
        }
    }

    fn parse(&self, input: &str) -> Result<PatternValueType> {
        let (min, max) = self.min_max();

        if let Some(value) = utils::parse_number(input, min, max) {
            return Ok(value);
        }

        let mnemonic = match self {
            Self::Months => utils::parse_mnemonic(input, &Self::MONTHS).map(|value| value + 1),
            Self::Dows => utils::parse_mnemonic(input, &Self::DAYS_OF_WEEK),
            Self::Minutes | Self::Hours | Self::Doms => return Err(CronError::InvalidDigitalValue(input.to_owned())),
        };

        mnemonic.ok_or_else(|| CronError::InvalidMnemonicValue(input.to_owned()))
    }

    fn parse_range(&self, value: &str, start: &str, end: &str) -> Result<(PatternValueType, PatternValueType)> {
        let start = self.parse(start)?;
        let end = self.parse(end)?;
        if start >= end {
            return Err(CronError::InvalidRangeValue(value.to_owned()));
        }
        Ok((start, end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PatternItem {
    All,
    Particular(PatternValueType),
    List(Vec<PatternItem>),
    // start-finish
    Range(PatternValueType, PatternValueType),
    // start/step
    RepeatingValue(PatternValueType, PatternValueType),
    // start-finish/step
    RepeatingRange(PatternValueType, PatternValueType, PatternValueType),
}

impl PatternItem {
    fn parse(type_: PatternType, value: &str) -> Result<Self> {
        if value == "*" {
            return Ok(Self::All);
        }

        if let Some((base, repeater)) = value.split_once('/') {
            let (min, max) = type_.min_max();
            let repeater = utils::parse_number(repeater, 1, max)
                .ok_or_else(|| CronError::InvalidRepeatingPattern(value.to_owned()))?;

            return if base == "*" {
                Ok(Self::RepeatingValue(min, repeater))
            } else if let Some((start, end)) = base.split_once('-') {
                let (start, end) = type_.parse_range(value, start, end)?;
                Ok(Self::RepeatingRange(start, end, repeater))
            } else {
                Ok(Self::RepeatingValue(type_.parse(base)?, repeater))
            };
        }

        if let Some((start, end)) = value.split_once('-') {
            let (start, end) = type_.parse_range(value, start, end)?;
            return Ok(Self::Range(start, end));
        }

        Ok(Self::Particular(type_.parse(value)?))
    }

    fn matches(&self, value: PatternValueType) -> bool {
        match self {
            Self::All => true,
            Self::Particular(particular) => value == *particular,
            Self::List(items) => items.iter().any(|item| item.matches(value)),
            Self::Range(start, end) => (*start..=*end).contains(&value),
            Self::RepeatingValue(start, step) => value >= *start && (value - start) % step == 0,
            Self::RepeatingRange(start, end, step) => (*start..=*end).contains(&value) && (value - start) % step == 0,
        }
    }
}

impl Display for PatternItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternItem::All => write!(f, "*"),
            PatternItem::Particular(value) => write!(f, "{value}"),
            PatternItem::Range(start, end) => write!(f, "{start}-{end}"),
            PatternItem::RepeatingValue(value, repeater) => write!(f, "{value}/{repeater}"),
            PatternItem::RepeatingRange(start, end, repeater) => write!(f, "{start}-{end}/{repeater}"),
            PatternItem::List(items) => {
                let values = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
        }
    }
}
