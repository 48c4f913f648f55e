#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # trackgrades
//!
//! Command line front end: compute a grade from flags, print the grading
//! bands, or open the interactive form.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use tracing::{debug, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use trackgrades::{
    Category, GradeCalculator, GradeReport, ScoreEntry,
    config::{self, OutputFormat},
    report::render_legend,
    tui::TuiRunner,
};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Compute a grade from the given scores
    Calc {
        /// Raw permanentes scores, in slot order
        permanentes: Vec<String>,
        /// Raw parciales scores, in slot order
        parciales:   Vec<String>,
        /// Single-slot assignments, applied after the flags above
        entries:     Vec<ScoreEntry>,
        /// Print JSON instead of a table
        json:        bool,
    },
    /// Print the grading system and bands
    Bands,
    /// Open the interactive form
    Form,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses repeated `FLAG NOTA` pairs; the value is taken as-is even when
    /// it starts with a dash, so `-p -5` is a score and not a flag
    fn scores(
        short_name: &'static str,
        long_name: &'static str,
        help: &'static str,
    ) -> impl Parser<Vec<String>> {
        let tag = short(short_name.chars().nth(1).unwrap())
            .long(&long_name[2..])
            .req_flag(());
        let value = any::<String, _, _>("NOTA", Some).help(help);
        construct!(tag, value)
            .adjacent()
            .map(|((), value)| value)
            .many()
    }

    /// parses single-slot assignments
    fn entries() -> impl Parser<Vec<ScoreEntry>> {
        short('s')
            .long("score")
            .help("Set one slot, eg. `parcial:2=15.5`; slots count from 1")
            .argument::<ScoreEntry>("CATEGORIA:N=NOTA")
            .many()
    }

    /// parses the JSON switch
    fn json() -> impl Parser<bool> {
        long("json").help("Print the result as JSON").switch()
    }

    let permanentes = scores("-p", "--permanente", "Permanente score, repeat up to 4 times");
    let parciales = scores("-x", "--parcial", "Parcial score, repeat up to 2 times");
    let entries = entries();
    let json = json();
    let calc = construct!(Cmd::Calc {
        permanentes,
        parciales,
        entries,
        json
    })
    .to_options()
    .command("calc")
    .help("Compute the final grade from the given scores");

    let bands = pure(Cmd::Bands)
        .to_options()
        .command("bands")
        .help("Print the grading system and grade bands");

    let form = pure(Cmd::Form)
        .to_options()
        .command("form")
        .help("Enter scores in an interactive form");

    let cmd = construct!([calc, bands, form]);

    cmd.to_options()
        .descr("Track permanentes and parciales scores and compute the final grade")
        .run()
}

/// Builds a calculator from raw flag values
fn calculator(
    permanentes: &[String],
    parciales: &[String],
    entries: &[ScoreEntry],
) -> Result<GradeCalculator> {
    let mut calc = GradeCalculator::new();
    calc.fill(Category::Permanentes, permanentes)
        .context("Invalid permanentes scores")?;
    calc.fill(Category::Parciales, parciales)
        .context("Invalid parciales scores")?;
    for entry in entries {
        calc.apply(entry)
            .with_context(|| format!("Invalid score for {}", entry.category))?;
    }
    Ok(calc)
}

/// Prints a report in the requested format
fn print_report(report: &GradeReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", report.render_table());
            println!("{}", report.render_summary());
        }
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cfg = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();
    debug!(?cmd, "parsed command");

    match cmd {
        Cmd::Calc {
            permanentes,
            parciales,
            entries,
            json,
        } => {
            let calc = calculator(&permanentes, &parciales, &entries)?;
            let format = if json { OutputFormat::Json } else { cfg.format() };
            print_report(&GradeReport::from(&calc), format)?;
        }
        Cmd::Bands => println!("{}", render_legend()),
        Cmd::Form => {
            let app = TuiRunner::new(cfg.tick_rate())?
                .run()
                .await
                .context("The form stopped unexpectedly")?;
            let report = GradeReport::from(*app.grades());
            print_report(&report, cfg.format())?;
        }
    };

    Ok(())
}
