use bill_splitter::application::session::{BillSession, on_selection_changed};
use bill_splitter::domain::attendee::parse_attendees;
use bill_splitter::domain::ports::BillSourceBox;
use bill_splitter::infrastructure::file::FileBillSource;
use bill_splitter::interfaces::csv::report_writer::ReportWriter;
use bill_splitter::interfaces::csv::selection_reader::SelectionReader;
use bill_splitter::interfaces::json::report::JsonReport;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    Attendees,
    Items,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Saved extraction response holding the bill JSON
    bill: PathBuf,

    /// Comma separated attendee names, in column order
    #[arg(short, long, env = "BILL_SPLITTER_ATTENDEES")]
    attendees: String,

    /// CSV of selection toggles with an `item,attendee,selected` header
    #[arg(short, long, env = "BILL_SPLITTER_SELECTIONS")]
    selections: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv, env = "BILL_SPLITTER_FORMAT")]
    format: Format,

    /// Which table to print in CSV format
    #[arg(long, value_enum, default_value_t = View::Attendees, env = "BILL_SPLITTER_VIEW")]
    view: View,

    /// Symbol prefixed to currency cells in CSV output
    #[arg(long, default_value = "", env = "BILL_SPLITTER_CURRENCY")]
    currency: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source: BillSourceBox = Box::new(FileBillSource::new(cli.bill));
    let bill = source.load().into_diagnostic()?;
    let attendees = parse_attendees(&cli.attendees).into_diagnostic()?;
    let mut session = BillSession::new(bill, attendees).into_diagnostic()?;

    let mut totals = session.totals();
    if let Some(path) = cli.selections {
        let file = File::open(path).into_diagnostic()?;
        let reader = SelectionReader::new(file);
        for event in reader.events() {
            match event {
                Ok(event) => {
                    match on_selection_changed(&mut session, event.item, event.attendee, event.is_selected()) {
                        Ok(updated) => totals = updated,
                        Err(e) => warn!("Error applying selection: {}", e),
                    }
                }
                Err(e) => warn!("Error reading selection: {}", e),
            }
        }
    }

    if !totals.unclaimed.is_zero() {
        info!(unclaimed = %totals.unclaimed.to_display(), "some items are not selected by anyone");
    }
    info!(
        grand_total = %totals.grand_total.to_display(),
        drift = %totals.drift.to_display(),
        "computed grand total"
    );

    let stdout = io::stdout();
    match cli.format {
        Format::Json => JsonReport::new(&session, &totals)
            .write(stdout.lock())
            .into_diagnostic()?,
        Format::Csv => {
            let mut writer = ReportWriter::new(stdout.lock(), cli.currency);
            let written = match cli.view {
                View::Attendees => writer.write_attendees(&session, &totals),
                View::Items => writer.write_items(&session, &totals),
            };
            written.into_diagnostic()?
        }
    }

    Ok(())
}
