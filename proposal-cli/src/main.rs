use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use proposal_cli::{csv_loader, input, store};
use proposal_core::ProposalDocument;
use proposal_export::locale::format_amount;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Floor-heating proposal composer.
///
/// Keeps one proposal per TOML file, fills its materials list from CSV price
/// lists, and renders the printable offer document.
#[derive(Debug, Parser)]
#[command(name = "proposal", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a starter proposal file carrying the standard notes.
    Init {
        /// Path of the proposal file to create.
        file: PathBuf,

        /// Project name to record in the header.
        #[arg(long, default_value = "")]
        project: String,

        /// Proposal date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print a summary of the proposal and its totals.
    Show {
        /// Path of the proposal file.
        file: PathBuf,
    },

    /// Assign header fields or the manual grand total.
    Set {
        /// Path of the proposal file.
        file: PathBuf,

        #[arg(long)]
        project_name: Option<String>,

        #[arg(long)]
        attention_to: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        /// Proposal date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Currency code shown next to amounts (e.g. EUR).
        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        product_title: Option<String>,

        #[arg(long)]
        page1_title: Option<String>,

        #[arg(long)]
        page2_title: Option<String>,

        /// Manual grand total. Pass an empty string to clear the override.
        #[arg(long)]
        manual_total: Option<String>,
    },

    /// Append material lines from a CSV price list.
    ImportMaterials {
        /// Path of the proposal file.
        file: PathBuf,

        /// Path to the CSV price list.
        #[arg(short, long)]
        csv: PathBuf,
    },

    /// Render the printable proposal document.
    Export {
        /// Path of the proposal file.
        file: PathBuf,

        /// Output path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Init {
            file,
            project,
            date,
            force,
        } => init(&file, project, date, force),
        Command::Show { file } => show(&file),
        Command::Set {
            file,
            project_name,
            attention_to,
            subject,
            date,
            currency,
            product_title,
            page1_title,
            page2_title,
            manual_total,
        } => set(
            &file,
            SetArgs {
                project_name,
                attention_to,
                subject,
                date,
                currency,
                product_title,
                page1_title,
                page2_title,
                manual_total,
            },
        ),
        Command::ImportMaterials { file, csv } => import_materials(&file, &csv),
        Command::Export { file, output } => export(&file, output.as_deref()),
    }
}

// ─── command handlers ────────────────────────────────────────────────────────

fn init(
    file: &Path,
    project: String,
    date: Option<NaiveDate>,
    force: bool,
) -> Result<()> {
    if file.exists() && !force {
        bail!(
            "proposal file '{}' already exists (pass --force to overwrite)",
            file.display()
        );
    }

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut doc = ProposalDocument::with_standard_notes(date);
    doc.project_name = project;

    store::save(file, &doc)
        .with_context(|| format!("failed to create proposal: {}", file.display()))?;

    println!("Created {}", file.display());
    Ok(())
}

fn show(file: &Path) -> Result<()> {
    let doc = load(file)?;

    println!("Proje       : {}", doc.project_name);
    println!("Sayın       : {}", doc.attention_to);
    println!("Konu        : {}", doc.subject);
    println!("Tarih       : {}", doc.date.format("%d.%m.%Y"));
    println!("Para Birimi : {}", doc.currency);
    println!();
    println!(
        "{} malzeme satırı, {} mahal, {} not, {} yetkili",
        doc.materials.len(),
        doc.discovery.len(),
        doc.notes.len(),
        doc.signatories.len()
    );
    println!();
    println!(
        "Hesaplanan toplam : {} {}",
        format_amount(doc.calculated_total()),
        doc.currency
    );
    println!(
        "Manuel toplam     : {}",
        input::opt_decimal_display(&doc.manual_total)
    );
    println!(
        "Genel toplam      : {} {}",
        format_amount(doc.display_total()),
        doc.currency
    );
    Ok(())
}

/// Header fields to assign; `None` leaves the field untouched.
#[derive(Debug, Default)]
struct SetArgs {
    project_name: Option<String>,
    attention_to: Option<String>,
    subject: Option<String>,
    date: Option<NaiveDate>,
    currency: Option<String>,
    product_title: Option<String>,
    page1_title: Option<String>,
    page2_title: Option<String>,
    manual_total: Option<String>,
}

fn set(
    file: &Path,
    args: SetArgs,
) -> Result<()> {
    let mut doc = load(file)?;

    if let Some(value) = args.project_name {
        doc.project_name = value;
    }
    if let Some(value) = args.attention_to {
        doc.attention_to = value;
    }
    if let Some(value) = args.subject {
        doc.subject = value;
    }
    if let Some(value) = args.date {
        doc.date = value;
    }
    if let Some(value) = args.currency {
        doc.currency = value;
    }
    if let Some(value) = args.product_title {
        doc.product_title = value;
    }
    if let Some(value) = args.page1_title {
        doc.page1_title = value;
    }
    if let Some(value) = args.page2_title {
        doc.page2_title = value;
    }
    if let Some(raw) = args.manual_total {
        // Empty input clears the override; the computed sum takes over again.
        doc.manual_total = input::parse_optional_decimal(&raw);
    }

    store::save(file, &doc)
        .with_context(|| format!("failed to save proposal: {}", file.display()))?;

    println!(
        "Updated {} (genel toplam: {} {})",
        file.display(),
        format_amount(doc.display_total()),
        doc.currency
    );
    Ok(())
}

fn import_materials(
    file: &Path,
    csv: &Path,
) -> Result<()> {
    let mut doc = load(file)?;

    let records = csv_loader::load_from_file(csv)
        .with_context(|| format!("failed to parse price list: {}", csv.display()))?;
    let appended = csv_loader::append_to(&mut doc, &records);

    store::save(file, &doc)
        .with_context(|| format!("failed to save proposal: {}", file.display()))?;

    println!(
        "Appended {} material line(s); calculated total is now {} {}",
        appended,
        format_amount(doc.calculated_total()),
        doc.currency
    );
    Ok(())
}

fn export(
    file: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let doc = load(file)?;

    match output {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?;
            proposal_export::write_document(&doc, &mut out)
                .with_context(|| format!("failed to export proposal to {}", path.display()))?;
            println!("Exported {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            proposal_export::write_document(&doc, &mut stdout)
                .context("failed to export proposal to stdout")?;
        }
    }
    Ok(())
}

// ─── shared helpers ──────────────────────────────────────────────────────────

fn load(file: &Path) -> Result<ProposalDocument> {
    store::load(file).with_context(|| format!("failed to load proposal: {}", file.display()))
}
