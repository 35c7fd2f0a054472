use crate::{CronError, Result, Schedule};
use chrono::{DateTime, Local, TimeZone};
use tracing::Dispatch;

/// Returns `true` if `expression` is a valid five-field cron schedule.
///
/// ```rust
/// assert!(cron_es::is_valid("*/5 * * * *"));
/// assert!(!cron_es::is_valid("*/5 * * *"));
/// ```
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

/// Checks `expression` with the schedule parser and tells a wrong number of fields apart from other syntax errors.
pub(crate) fn validate(expression: &str) -> Result<()> {
    match Schedule::new(expression) {
        Ok(_) => Ok(()),
        Err(CronError::InvalidFieldsCount(_)) => Err(CronError::InvalidExpressionFormat(expression.to_owned())),
        Err(e) => Err(CronError::InvalidExpressionSyntax {
            expression: expression.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// Calculates upcoming fire times of cron expressions.
///
/// Any failure, an invalid expression or a schedule without enough fire times,
/// is logged to the dispatcher provided at construction and yields an empty list.
/// So an empty result means "can't be calculated", not "never fires".
#[derive(Debug, Clone)]
pub struct FireTimeQuery {
    dispatch: Dispatch,
}

impl Default for FireTimeQuery {
    /// Uses the dispatcher which is the default one at the moment of construction.
    fn default() -> Self {
        Self::new(tracing::dispatcher::get_default(Dispatch::clone))
    }
}

impl FireTimeQuery {
    /// Constructs query which logs to `dispatch`.
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Returns `count` fire times of `expression` strictly after the current local time.
    pub fn next_fire_times(&self, expression: &str, count: usize) -> Vec<DateTime<Local>> {
        self.next_fire_times_after(expression, count, &Local::now())
    }

    /// Returns `count` fire times of `expression` strictly after `after`, in the timezone of `after`.
    pub fn next_fire_times_after<Tz: TimeZone>(
        &self,
        expression: &str,
        count: usize,
        after: &DateTime<Tz>,
    ) -> Vec<DateTime<Tz>> {
        let schedule = match Schedule::new(expression) {
            Ok(schedule) => schedule,
            Err(e) => {
                self.log_failure(expression, count, &e);
                return Vec::new();
            }
        };

        let times = match schedule.after(after) {
            Some(first) => schedule.into_iter(&first).take(count).collect::<Vec<_>>(),
            None => Vec::new(),
        };

        if times.len() < count {
            self.log_failure(expression, count, &format!("only {} fire times are available", times.len()));
            return Vec::new();
        }

        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::debug!(expression, count, "fire times calculated");
        });

        times
    }

    fn log_failure(&self, expression: &str, count: usize, error: &dyn std::fmt::Display) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::error!(expression, count, error = %error, "unable to calculate next fire times");
        });
    }
}
