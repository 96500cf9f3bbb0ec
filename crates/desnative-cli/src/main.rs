// desnative — terminal front end over desnative-core.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use desnative_core::atoms::constants::APP_VERSION;
use desnative_core::history::parse_history_timestamp;
use desnative_core::{
    AppPaths, CoreError, CoreResult, HistoryFile, HistoryManager, Settings, UpdateChecker,
};
use log::info;

#[derive(Parser)]
#[command(name = "desnative", version, about = "Desnative calculator history and update tools")]
struct Cli {
    /// History directory (defaults to ~/.desnative/history).
    #[arg(long, global = true, env = "DESNATIVE_HISTORY_DIR")]
    history_dir: Option<PathBuf>,

    /// Log at info level instead of warn.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save a history payload (FILE, or stdin when omitted) and rotate old files.
    Save { file: Option<PathBuf> },
    /// List retained history files, newest first.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the newest history payload.
    Latest,
    /// Print this build's version.
    Version,
    /// Check the update descriptor for a newer build.
    CheckUpdate {
        #[arg(long)]
        url: Option<String>,
    },
    /// Persist the update descriptor URL in settings.json (clears it when omitted).
    SetUpdateUrl { url: Option<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    let Cli { history_dir: explicit_dir, command, .. } = cli;
    let history_dir = move || resolve_history_dir(explicit_dir, AppPaths::resolve);

    match command {
        Command::Save { file } => {
            let content = read_payload(file)?;
            let outcome = HistoryManager::new(history_dir()?).save(&content)?;
            for w in &outcome.warnings {
                eprintln!("warning: {}: {}", w.path.display(), w.message);
            }
            info!("[cli] Saved {} bytes, {} old file(s) removed", content.len(), outcome.removed.len());
            println!("{}", outcome.path.display());
        }
        Command::List { json } => {
            let files = HistoryManager::new(history_dir()?).list()?;
            info!("[cli] {} history file(s)", files.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                for f in &files {
                    println!("{}", list_line(f));
                }
            }
        }
        Command::Latest => {
            if let Some(content) = HistoryManager::new(history_dir()?).load_latest()? {
                std::io::stdout()
                    .write_all(&content)
                    .map_err(|e| CoreError::io("Failed to write", "<stdout>", e))?;
            }
        }
        Command::Version => println!("{}", APP_VERSION),
        Command::CheckUpdate { url } => {
            let settings = Settings::load(&AppPaths::resolve()?);
            let url = settings.resolve_update_url(url.as_deref());
            let runtime = tokio::runtime::Runtime::new()
                .map_err(|e| CoreError::Other(format!("Failed to start runtime: {}", e)))?;
            let info = runtime.block_on(async { UpdateChecker::new()?.check(&url).await })?;
            if info.available {
                println!("Update available: {} -> {}", APP_VERSION, info.version);
                if !info.download_url.is_empty() {
                    println!("Download: {}", info.download_url);
                }
                if !info.release_notes.is_empty() {
                    println!("\n{}", info.release_notes);
                }
            } else {
                println!("Up to date ({})", APP_VERSION);
            }
        }
        Command::SetUpdateUrl { url } => {
            let paths = AppPaths::resolve()?;
            let settings = update_url_settings(&paths, url);
            settings.save(&paths)?;
            info!("[cli] Wrote {}", paths.settings_path().display());
            println!("{}", settings.resolve_update_url(None));
        }
    }
    Ok(())
}

/// `--history-dir` wins. The app root is only looked up when it is absent, so
/// an explicit directory works without a home directory.
fn resolve_history_dir(
    explicit: Option<PathBuf>,
    resolve_paths: impl FnOnce() -> CoreResult<AppPaths>,
) -> CoreResult<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => Ok(resolve_paths()?.history_dir()),
    }
}

/// Tab-separated listing row. The save time comes from the file name, and is
/// `-` for files this app did not name.
fn list_line(f: &HistoryFile) -> String {
    let saved = parse_history_timestamp(&f.name)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}\t{}\t{}\t{}", saved, f.modified, f.size, f.name)
}

/// Stored settings with the update URL replaced. Environment overrides are
/// not folded in, so they never get persisted.
fn update_url_settings(paths: &AppPaths, url: Option<String>) -> Settings {
    let mut settings = Settings::load_from(&paths.settings_path());
    settings.update_url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
    settings
}

fn read_payload(file: Option<PathBuf>) -> CoreResult<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(&path).map_err(|e| CoreError::io("Failed to read", &path, e)),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| CoreError::io("Failed to read", "<stdin>", e))?;
            Ok(buf)
        }
    }
}
