use crate::field::FieldKind;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Schedule doesn't consist of exactly five fields.
    #[error("invalid number of schedule fields, five expected: {0}")]
    InvalidFieldsCount(String),
    /// Error parsing cron schedule pattern.
    #[error("invalid schedule pattern: {0}")]
    InvalidCronPattern(String),
    /// Numeric value is out of bounds or isn't a number.
    #[error("invalid digital value: {0}")]
    InvalidDigitalValue(String),
    /// Unknown month or day of week name.
    #[error("invalid mnemonic value: {0}")]
    InvalidMnemonicValue(String),
    /// Invalid range value specified.
    #[error("invalid range value: {0}")]
    InvalidRangeValue(String),
    /// Invalid repeating pattern specified.
    #[error("invalid repeating pattern: {0}")]
    InvalidRepeatingPattern(String),
    /// Expression was rejected by the schedule parser.
    #[error("invalid cron expression `{expression}`: {reason}")]
    InvalidExpressionSyntax {
        /// Rejected expression.
        expression: String,
        /// Parser's explanation.
        reason: String,
    },
    /// Expression doesn't split into exactly five whitespace-separated fields.
    #[error("invalid cron expression format, five fields expected: `{0}`")]
    InvalidExpressionFormat(String),
    /// List, range or step field contains a part which isn't an integer.
    #[error("malformed numeric value in {field} field: `{token}`")]
    MalformedNumericField {
        /// Kind of the field being translated.
        field: FieldKind,
        /// Whole field token.
        token: String,
    },
}
