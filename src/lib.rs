//! Spanish descriptions and upcoming fire times of five-field cron expressions.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a small crate, intended to:
//! - translate a cron expression into a short, field by field, Spanish description;
//! - check whether an expression is a valid schedule;
//! - list upcoming fire times of a schedule.
//!
//! ## Cron expression format
//!
//! Expression consists of exactly five whitespace-separated fields: minutes, hours, days of month, months and days of week.
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - /                    |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 0-7 or SUN-SAT  | * , - /                    |
//!
//! Both `0` and `7` mean Sunday. Event happens on days which satisfy day of month _and_ day of week fields.
//!
//! ## Description format
//!
//! Every field is described on its own and the phrases are joined with a single space.
//! Month and weekday values are used as zero-based indices into the [`MONTHS`] and [`WEEKDAYS`] tables,
//! so `1` in the month field is rendered as `febrero`:
//!
//! | Field shape | Rendering                   | Example               |
//! |-------------|-----------------------------|-----------------------|
//! | `*`         | `cada {noun}`               | `cada mes`            |
//! | `a,b`       | `los {name}, {name}`        | `los lunes, viernes`  |
//! | `a,b`       | `{noun}s: a, b`             | `minutos: 15, 45`     |
//! | `a-b`       | `de {name} a {name}`        | `de lunes a viernes`  |
//! | `a-b`       | `{noun}s del a al b`        | `horas del 9 al 17`   |
//! | `x/n`       | `cada n {noun}s`            | `cada 5 minutos`      |
//! | other       | the field as is             | `30`                  |
//!
//! ## How to use
//!
//! ### Translate an expression
//! ```rust
//! use cron_es::{translate, Result};
//!
//! fn describe() -> Result<()> {
//!     let description = translate("0 2 * * 1-5")?;
//!     assert_eq!(description.to_string(), "0 2 cada día del mes cada mes de lunes a viernes");
//!
//!     Ok(())
//! }
//! # describe().unwrap();
//! ```
//!
//! ### Get upcoming fire times
//! ```rust
//! use cron_es::FireTimeQuery;
//!
//! let query = FireTimeQuery::default();
//! let times = query.next_fire_times("*/5 * * * *", 5);
//! assert_eq!(times.len(), 5);
//!
//! // Invalid expression is logged and yields nothing
//! assert!(query.next_fire_times("*/5 * * *", 5).is_empty());
//! ```
//!
//! ### Iterate over a schedule
//! ```rust
//! use chrono::Utc;
//! use cron_es::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 12 * * MON-FRI")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 timestamps starting from now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`],
//!   and `Serialize` for translation results.
//! * `cli`: builds the `cron-es` command line tool.

/// Crate specific Error implementation.
pub mod error;
/// Classification and rendering of single expression fields.
pub mod field;
/// Spanish month and weekday names.
pub mod names;
mod pattern;
/// Validation and upcoming fire times queries.
pub mod query;
/// Cron schedule pattern parser and upcoming event generator.
pub mod schedule;
/// Translation of whole expressions.
pub mod translate;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use field::{FieldForm, FieldKind, ListItem};
pub use names::{NameTable, MONTHS, WEEKDAYS};
pub use query::{is_valid, FireTimeQuery};
pub use schedule::Schedule;
pub use translate::{translate, TranslatedExpression, TranslatedField};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
