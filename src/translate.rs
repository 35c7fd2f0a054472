use crate::{
    field::{FieldForm, FieldKind},
    query, CronError, Result,
};
use std::{fmt::Display, str::FromStr};

const FIELDS_SEPARATOR: &str = " ";

/// Phrase describing one field of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TranslatedField {
    kind: FieldKind,
    phrase: String,
}

impl TranslatedField {
    /// Classifies and renders a single field token.
    pub fn new(kind: FieldKind, token: &str) -> Result<Self> {
        let phrase = FieldForm::classify(kind, token)?.render(kind);
        Ok(Self { kind, phrase })
    }

    /// Kind of the described field.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Rendered phrase.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl Display for TranslatedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase)
    }
}

/// Spanish description of a whole cron expression.
///
/// Holds one [`TranslatedField`] per field, always in minute, hour, day of month, month, weekday order.
/// `Display` joins the phrases with a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TranslatedExpression {
    fields: Vec<TranslatedField>,
}

impl TranslatedExpression {
    /// Phrases in expression order.
    #[inline]
    pub fn fields(&self) -> &[TranslatedField] {
        &self.fields
    }

    /// Phrase of the particular field.
    pub fn field(&self, kind: FieldKind) -> &TranslatedField {
        // Fields are stored in `FieldKind::ALL` order.
        &self.fields[kind as usize]
    }
}

impl Display for TranslatedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(FIELDS_SEPARATOR)?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl From<TranslatedExpression> for String {
    fn from(value: TranslatedExpression) -> Self {
        value.to_string()
    }
}

impl TryFrom<&str> for TranslatedExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        translate(value)
    }
}

impl FromStr for TranslatedExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        translate(s)
    }
}

/// Translates five-field cron `expression` into Spanish.
///
/// The expression is checked by the [`Schedule`](crate::Schedule) parser first:
/// - [`CronError::InvalidExpressionFormat`] is returned if it doesn't have exactly five fields;
/// - [`CronError::InvalidExpressionSyntax`] is returned for any other rejection.
///
/// A valid expression may still fail with [`CronError::MalformedNumericField`]
/// if one of its list, range or step fields mixes in non-numeric parts, like `MON-FRI`.
///
/// ```rust
/// use cron_es::translate;
///
/// let description = translate("0 12 * * 1,3,5").unwrap();
/// assert_eq!(description.to_string(), "0 12 cada día del mes cada mes los lunes, miércoles, viernes");
/// ```
pub fn translate(expression: &str) -> Result<TranslatedExpression> {
    query::validate(expression)?;

    let tokens: [&str; 5] = expression
        .split_whitespace()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| CronError::InvalidExpressionFormat(expression.to_owned()))?;

    let fields = FieldKind::ALL
        .into_iter()
        .zip(tokens)
        .map(|(kind, token)| TranslatedField::new(kind, token))
        .collect::<Result<Vec<_>>>()?;

    let translated = TranslatedExpression { fields };
    tracing::debug!(expression, description = %translated, "cron expression translated");

    Ok(translated)
}
