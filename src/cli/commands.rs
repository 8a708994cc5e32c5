//! CLI commands
//!
//! Bridges clap argument parsing with the service layer. The CLI plays the
//! collaborator role: it validates form input against the configured
//! rosters, feeds the ledger, and renders whatever the ledger returns.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::{AuditPaths, Settings};
use crate::display::{format_history_table, format_result_alert};
use crate::error::{AuditError, AuditResult};
use crate::export::export_records_csv;
use crate::models::Money;
use crate::services::{CreateAuditInput, LedgerFilter, LedgerService};
use crate::storage::Storage;

/// till-audit subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Register a new audit
    Add {
        /// Terminal number (must belong to the configured roster)
        #[arg(short, long)]
        terminal: String,
        /// Register operator on shift
        #[arg(short, long)]
        operator: String,
        /// Supervisor witnessing the count
        #[arg(short, long)]
        supervisor: String,
        /// Loss-prevention auditor running the count
        #[arg(short, long)]
        auditor: String,
        /// Cash counted in the drawer (e.g. "150.00" or "1.234,56")
        #[arg(long)]
        cash: String,
        /// Total reported by the TEF/card channel
        #[arg(long)]
        tef: String,
    },
    /// List registered audits
    List {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
    },
    /// Export the filtered audits to a CSV spreadsheet
    Export {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Output file, defaults to audits_<start>_<end>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a single audit by id
    Delete {
        /// Audit id
        id: u64,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete ALL audits (requires the admin secret; irreversible)
    Purge {
        /// Admin secret; prompted for when omitted
        #[arg(long)]
        secret: Option<String>,
    },
    /// Show recent ledger operations from the journal
    Journal {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Write the default configuration file
    Init,
    /// Show current configuration and paths
    Config,
}

/// Handle a parsed command
pub fn handle_command(storage: &Storage, settings: &Settings, cmd: Commands) -> AuditResult<()> {
    match cmd {
        Commands::Add {
            terminal,
            operator,
            supervisor,
            auditor,
            cash,
            tef,
        } => handle_add(storage, settings, terminal, operator, supervisor, auditor, cash, tef),
        Commands::List { from, to } => handle_list(storage, settings, from, to),
        Commands::Export { from, to, output } => handle_export(storage, settings, from, to, output),
        Commands::Delete { id, force } => handle_delete(storage, settings, id, force),
        Commands::Purge { secret } => handle_purge(storage, settings, secret),
        Commands::Journal { limit } => handle_journal(storage, limit),
        Commands::Init => handle_init(storage.paths(), settings),
        Commands::Config => handle_config(storage.paths(), settings),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    storage: &Storage,
    settings: &Settings,
    terminal: String,
    operator: String,
    supervisor: String,
    auditor: String,
    cash: String,
    tef: String,
) -> AuditResult<()> {
    if !settings.is_known_terminal(&terminal) {
        return Err(AuditError::Validation(format!(
            "Terminal '{}' is not in the configured roster",
            terminal
        )));
    }
    check_roster("Operator", &operator, &settings.operators)?;
    check_roster("Supervisor", &supervisor, &settings.supervisors)?;
    check_roster("Auditor", &auditor, &settings.auditors)?;

    let counted_cash = parse_amount("cash", &cash)?;
    let counted_electronic = parse_amount("tef", &tef)?;

    let service = LedgerService::new(storage, settings);
    let created = service.create(CreateAuditInput {
        terminal_id: terminal,
        operator_name: operator,
        supervisor_name: supervisor,
        auditor_name: auditor,
        counted_cash,
        counted_electronic,
    })?;

    println!("Registered audit #{}.", created.record.id);
    println!("{}", format_result_alert(&created, &settings.currency_symbol));
    Ok(())
}

fn handle_list(
    storage: &Storage,
    settings: &Settings,
    from: Option<String>,
    to: Option<String>,
) -> AuditResult<()> {
    let service = LedgerService::new(storage, settings);
    let records = service.query(build_filter(from, to)?)?;
    print!("{}", format_history_table(&records, &settings.currency_symbol));
    Ok(())
}

fn handle_export(
    storage: &Storage,
    settings: &Settings,
    from: Option<String>,
    to: Option<String>,
    output: Option<PathBuf>,
) -> AuditResult<()> {
    let filter = build_filter(from, to)?;
    let service = LedgerService::new(storage, settings);
    let records = service.query(filter)?;

    let path = output.unwrap_or_else(|| default_export_name(&filter));
    let bytes = export_records_csv(&records, &settings.currency_symbol)?;
    std::fs::write(&path, bytes)
        .map_err(|e| AuditError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    println!("Exported {} audit(s) to {}.", records.len(), path.display());
    Ok(())
}

fn handle_delete(storage: &Storage, settings: &Settings, id: u64, force: bool) -> AuditResult<()> {
    let service = LedgerService::new(storage, settings);

    if !force {
        match storage.ledger.get(id)? {
            Some(record) => {
                println!(
                    "Audit #{}: terminal {} on {}, difference {}.",
                    record.id,
                    record.terminal_id,
                    record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                    record.difference.format_grouped(&settings.currency_symbol)
                );
                if !confirm(&format!("Delete audit #{}?", id))? {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            None => {
                println!("Audit #{} not found; nothing to delete.", id);
                return Ok(());
            }
        }
    }

    let deleted = service.delete_one(id)?;
    if deleted > 0 {
        println!("Audit #{} deleted.", id);
    } else {
        println!("Audit #{} not found; nothing to delete.", id);
    }
    Ok(())
}

fn handle_purge(storage: &Storage, settings: &Settings, secret: Option<String>) -> AuditResult<()> {
    let secret = match secret {
        Some(s) => s,
        None => rpassword::prompt_password("Admin secret: ")
            .map_err(|e| AuditError::Io(format!("Failed to read secret: {}", e)))?,
    };

    let service = LedgerService::new(storage, settings);
    let deleted = service.delete_all(&secret)?;
    println!("{} audit(s) deleted. The ledger is now empty.", deleted);
    Ok(())
}

fn handle_journal(storage: &Storage, limit: usize) -> AuditResult<()> {
    let entries = storage.recent_journal(limit)?;
    if entries.is_empty() {
        println!("The journal is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.summary());
    }
    Ok(())
}

fn handle_init(paths: &AuditPaths, settings: &Settings) -> AuditResult<()> {
    if paths.is_initialized() {
        println!(
            "Already initialized; edit {} to change the configuration.",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Wrote {}.", paths.settings_file().display());
    Ok(())
}

fn handle_config(paths: &AuditPaths, settings: &Settings) -> AuditResult<()> {
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Ledger file:     {}", paths.ledger_file().display());
    println!("Journal file:    {}", paths.journal_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Civil timezone:  UTC offset {} minutes", settings.utc_offset_minutes);
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Admin secret:    {}", if settings.admin_secret.is_empty() { "(empty)" } else { "(set)" });
    println!("Terminals:       {}", settings.terminals.join(", "));
    println!("Operators:       {}", roster_display(&settings.operators));
    println!("Supervisors:     {}", roster_display(&settings.supervisors));
    println!("Auditors:        {}", roster_display(&settings.auditors));
    Ok(())
}

fn roster_display(roster: &[String]) -> String {
    if roster.is_empty() {
        "(unrestricted)".to_string()
    } else {
        roster.join(", ")
    }
}

fn check_roster(label: &str, value: &str, roster: &[String]) -> AuditResult<()> {
    if roster.is_empty() || roster.iter().any(|entry| entry == value) {
        Ok(())
    } else {
        Err(AuditError::Validation(format!(
            "{} '{}' is not in the configured roster",
            label, value
        )))
    }
}

fn parse_amount(label: &str, value: &str) -> AuditResult<Money> {
    Money::parse_grouped(value).map_err(|e| {
        AuditError::Validation(format!(
            "Invalid {} amount '{}': {}. Use a format like '150.00' or '1.234,56'",
            label, value, e
        ))
    })
}

fn parse_date(label: &str, value: &str) -> AuditResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AuditError::Validation(format!(
            "Invalid {} date '{}'. Use YYYY-MM-DD",
            label, value
        ))
    })
}

fn build_filter(from: Option<String>, to: Option<String>) -> AuditResult<LedgerFilter> {
    let mut filter = LedgerFilter::new();
    if let Some(from) = from {
        filter = filter.from(parse_date("start", &from)?);
    }
    if let Some(to) = to {
        filter = filter.to(parse_date("end", &to)?);
    }
    Ok(filter)
}

fn default_export_name(filter: &LedgerFilter) -> PathBuf {
    let part = |date: Option<NaiveDate>| {
        date.map(|d| d.format("%Y%m%d").to_string())
            .unwrap_or_else(|| "all".to_string())
    };
    PathBuf::from(format!("audits_{}_{}.csv", part(filter.start), part(filter.end)))
}

fn confirm(prompt: &str) -> AuditResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
