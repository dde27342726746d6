//! Clients CLI
//!
//! Command-line access to the `clients` table:
//! `clients [--db PATH] get|create|update|delete ...`

use clap::{Parser, Subcommand};
use clients_core::{
    core_version, default_log_level, init_logging, ClientRepository, SqliteClientRepository,
    DEFAULT_DB_FILE,
};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

mod commands;

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "clients", version)]
#[command(about = "Read and write rows of the clients table", long_about = None)]
struct Cli {
    /// SQLite database file; the `clients` table must already exist
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when absent
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); needs `--log-dir`
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    /// Print records as JSON instead of the one-line rendering
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one client by id
    Get(commands::IdArgs),
    /// Insert a client and print the generated id
    Create(commands::FieldArgs),
    /// Overwrite every field of a client
    Update(commands::UpdateArgs),
    /// Delete a client by id
    Delete(commands::IdArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
        info!(
            "event=cli_start module=cli status=ok core_version={}",
            core_version()
        );
    }

    let repo = match SqliteClientRepository::open_at(&cli.db) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let event = cli.command.event_name();
    let started_at = Instant::now();
    let result = cli.command.run(&repo, cli.json);

    let code = match result {
        Ok(output) => {
            info!(
                "event={} module=cli status=ok duration_ms={}",
                event,
                started_at.elapsed().as_millis()
            );
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "event={} module=cli status=error duration_ms={} error_code={}",
                event,
                started_at.elapsed().as_millis(),
                commands::error_code(&*err)
            );
            eprintln!("Error: {err}");
            if commands::is_not_found(&*err) {
                ExitCode::from(EXIT_NOT_FOUND)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    };

    if let Err(err) = repo.close() {
        eprintln!("Error: {err}");
        return ExitCode::from(EXIT_FAILURE);
    }
    code
}

impl Commands {
    fn event_name(&self) -> &'static str {
        match self {
            Self::Get(_) => "client_get",
            Self::Create(_) => "client_create",
            Self::Update(_) => "client_update",
            Self::Delete(_) => "client_delete",
        }
    }

    fn run<R: ClientRepository>(
        self,
        repo: &R,
        json: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Self::Get(args) => commands::get(repo, args, json),
            Self::Create(args) => commands::create(repo, args),
            Self::Update(args) => commands::update(repo, args),
            Self::Delete(args) => commands::delete(repo, args),
        }
    }
}
