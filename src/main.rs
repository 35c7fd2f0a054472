use clap::Parser;
use cron_es::{translate, FireTimeQuery};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Expressions shown when nothing is provided in the command line.
const DEMO_EXPRESSIONS: &[&str] = &["*/5 * * * *", "0 2 * * 1-5", "0 0 1 */2 *", "30 3 15 * *", "0 12 * * 1,3,5"];

/// Prints Spanish descriptions and upcoming fire times of cron expressions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Five-field cron expressions, quoted; demo expressions are used if empty.
    #[arg(value_name = "EXPRESSIONS")]
    expressions: Vec<String>,

    /// Number of upcoming fire times to show.
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Log filter directive, like `debug` or `cron_es=trace`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints translation and upcoming fire times of a single expression, or the reason it can't be translated.
fn report(out: &mut impl Write, query: &FireTimeQuery, expression: &str, count: usize) -> io::Result<()> {
    writeln!(out, "\nExpresión: {expression}")?;

    match translate(expression) {
        Ok(description) => {
            writeln!(out, "Traducción: {description}")?;
            writeln!(out, "Próximas ejecuciones:")?;
            for time in query.next_fire_times(expression, count) {
                writeln!(out, "  - {}", time.format("%Y-%m-%d %H:%M:%S"))?;
            }
        }
        Err(e) => writeln!(out, "Error procesando {expression}: {e}")?,
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let expressions: Vec<String> = if cli.expressions.is_empty() {
        DEMO_EXPRESSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        cli.expressions
    };

    let query = FireTimeQuery::default();
    let mut out = io::stdout().lock();

    for expression in &expressions {
        report(&mut out, &query, expression, cli.count)?;
    }

    Ok(())
}
