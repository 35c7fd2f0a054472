use crate::{
    names::{NameTable, MONTHS, WEEKDAYS},
    CronError, Result,
};
use std::fmt::Display;

const WILDCARD: &str = "*";
const LIST_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = '-';
const STEP_SEPARATOR: char = '/';

/// Position of a field in a five-field cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    /// First field.
    Minute,
    /// Second field.
    Hour,
    /// Third field.
    DayOfMonth,
    /// Fourth field, translated with [`MONTHS`].
    Month,
    /// Fifth field, translated with [`WEEKDAYS`].
    Weekday,
}

impl FieldKind {
    /// All kinds in the order they appear in an expression.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::Weekday,
    ];

    /// Noun used in phrases about this field.
    pub const fn noun(&self) -> &'static str {
        match self {
            FieldKind::Minute => "minuto",
            FieldKind::Hour => "hora",
            FieldKind::DayOfMonth => "día del mes",
            FieldKind::Month => "mes",
            FieldKind::Weekday => "día",
        }
    }

    /// Name table used to translate values of this field, if any.
    pub const fn names(&self) -> Option<&'static NameTable> {
        match self {
            FieldKind::Month => Some(&MONTHS),
            FieldKind::Weekday => Some(&WEEKDAYS),
            FieldKind::Minute | FieldKind::Hour | FieldKind::DayOfMonth => None,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

/// Single element of a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListItem<'a> {
    /// Text as written in the expression.
    pub raw: &'a str,
    /// Parsed index.
    pub value: usize,
}

/// Syntactic shape of a single field token.
///
/// Shapes are tried in a fixed order: wildcard, list, range, step and, if nothing matched, literal.
/// So `1-5,7` is a list and `0-30/5` is a range, whatever the other markers are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldForm<'a> {
    /// `*`
    Wildcard,
    /// `a,b,c`
    List(Vec<ListItem<'a>>),
    /// `start-end`
    Range(usize, usize),
    /// `base/interval`, only the interval text is kept.
    Step(&'a str),
    /// Anything else, kept as is.
    Literal(&'a str),
}

impl<'a> FieldForm<'a> {
    /// Classifies raw `token` of the `kind` field.
    ///
    /// Returns [`CronError::MalformedNumericField`] if a list element, a range bound
    /// or a step interval isn't an integer.
    pub fn classify(kind: FieldKind, token: &'a str) -> Result<Self> {
        if token == WILDCARD {
            return Ok(Self::Wildcard);
        }

        if token.contains(LIST_SEPARATOR) {
            let items = token
                .split(LIST_SEPARATOR)
                .map(|raw| {
                    Ok(ListItem {
                        raw,
                        value: parse_index(kind, token, raw)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            return Ok(Self::List(items));
        }

        if let Some((start, end)) = token.split_once(RANGE_SEPARATOR) {
            return Ok(Self::Range(
                parse_index(kind, token, start)?,
                parse_index(kind, token, end)?,
            ));
        }

        if let Some((_base, interval)) = token.split_once(STEP_SEPARATOR) {
            parse_index(kind, token, interval)?;
            return Ok(Self::Step(interval));
        }

        Ok(Self::Literal(token))
    }

    /// Renders the form as a phrase about the `kind` field.
    pub fn render(&self, kind: FieldKind) -> String {
        let noun = kind.noun();

        match (self, kind.names()) {
            (Self::Wildcard, _) => format!("cada {noun}"),
            (Self::List(items), Some(names)) => {
                // Indices outside of the table are dropped.
                let names = items
                    .iter()
                    .filter_map(|item| names.get(item.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("los {names}")
            }
            (Self::List(items), None) => {
                let values = items.iter().map(|item| item.raw).collect::<Vec<_>>().join(", ");
                format!("{noun}s: {values}")
            }
            (Self::Range(start, end), Some(names)) => {
                format!("de {} a {}", name_or_index(names, *start), name_or_index(names, *end))
            }
            (Self::Range(start, end), None) => format!("{noun}s del {start} al {end}"),
            (Self::Step(interval), _) => format!("cada {interval} {noun}s"),
            (Self::Literal(token), _) => token.to_string(),
        }
    }
}

fn parse_index(kind: FieldKind, token: &str, part: &str) -> Result<usize> {
    part.parse().map_err(|_| CronError::MalformedNumericField {
        field: kind,
        token: token.to_owned(),
    })
}

fn name_or_index(names: &NameTable, index: usize) -> String {
    names.get(index).map_or_else(|| index.to_string(), str::to_owned)
}
