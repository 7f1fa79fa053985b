use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use repfix::config::EXAMPLE_CONFIG;
use repfix::{fix_folder, report, Config, RepairError, ReportFormat};

/// Repair workout program files whose reps field holds the exercise name
#[derive(Parser, Debug)]
#[command(name = "repfix", version, about, long_about = None)]
struct Cli {
    /// Folder containing the program files
    #[arg(required_unless_present = "print_config")]
    folder: Option<PathBuf>,

    /// Report fixes without writing backups or files
    #[arg(long)]
    dry_run: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Also strip " - <program>" qualifiers from workout titles
    #[arg(long)]
    strip_program_name: bool,

    /// Suffix appended to a file name to form its backup
    #[arg(long, value_name = "SUFFIX")]
    backup_suffix: Option<String>,

    /// Extension of the program files to scan
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Config file (defaults to <config dir>/repfix/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print an example config file and exit
    #[arg(long)]
    print_config: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Config file settings with command-line flags layered on top
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load(),
        };

        if self.strip_program_name {
            config.strip_program_name = true;
        }
        if let Some(format) = self.format {
            config.report_format = format;
        }
        if let Some(suffix) = &self.backup_suffix {
            config.backup_suffix = suffix.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }

        Ok(config.with_dry_run(self.dry_run))
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(cli.log_level().into());

    match &cli.log_file {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(log_file)
                .with_ansi(false) // Disable ANSI colors in log file
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}

fn run(folder: &Path, config: &Config) -> Result<()> {
    if !folder.is_dir() {
        return Err(RepairError::NotAFolder(folder.to_path_buf()).into());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match config.report_format {
        ReportFormat::Text => {
            // Print each file as soon as it is fixed; a later failure
            // should not hide what was already written.
            let mut print_error = None;
            let summary = fix_folder(folder, config, |file| {
                if let Err(e) = report::write_file_text(&mut out, file) {
                    if print_error.is_none() {
                        print_error = Some(e);
                    }
                }
            })?;
            if let Some(e) = print_error {
                return Err(e).context("Failed to write report");
            }
            report::write_summary_text(&mut out, &summary).context("Failed to write report")?;
            summary
        }
        ReportFormat::Json => {
            let summary = fix_folder(folder, config, |_| {})?;
            report::write_json(&mut out, &summary).context("Failed to write report")?;
            summary
        }
    };

    out.flush().context("Failed to write report")?;
    tracing::info!(
        files = summary.files.len(),
        fixes = summary.total_fixes,
        dry_run = summary.dry_run,
        "Run complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", EXAMPLE_CONFIG);
        return Ok(());
    }

    init_logging(&cli)?;
    let config = cli.resolve_config()?;

    let Some(folder) = cli.folder.as_deref() else {
        anyhow::bail!("No folder given");
    };
    // Resolve like a shell would so messages name the real folder.
    let folder = folder.canonicalize().unwrap_or_else(|_| folder.to_path_buf());

    run(&folder, &config)
}
