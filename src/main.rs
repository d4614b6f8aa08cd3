use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use project_indexer::areas::project::Project;
use project_indexer::artifacts::snapshot::DEFAULT_SNAPSHOT_NAME;
use project_indexer::commands::porcelain::check::CheckFormat;
use project_indexer::config::{IndexerConfig, RootMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "project-indexer",
    version = "0.1.0",
    about = "Detect changed project files by content hash",
    long_about = "Scans project directories, fingerprints every eligible file by content \
    and compares the result against a stored snapshot. \
    Meant for CI pipelines that want to skip work when nothing relevant changed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log scan details to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SnapshotArgs {
    #[arg(
        short,
        long,
        env = "PROJECT_INDEXER_FILE",
        default_value = DEFAULT_SNAPSHOT_NAME,
        help = "Snapshot file to read and write (a path not ending in .idx is treated as a directory)"
    )]
    filename: PathBuf,
}

#[derive(Args)]
struct ScanArgs {
    #[arg(index = 1, required = true, help = "Directories to scan")]
    paths: Vec<PathBuf>,
    #[command(flatten)]
    snapshot: SnapshotArgs,
    #[arg(short, long = "ignore", help = "Skip files whose relative path matches this regex")]
    ignore: Vec<String>,
    #[arg(long, help = "Fail instead of falling back when no project root is found")]
    strict_root: bool,
}

impl ScanArgs {
    fn config(&self) -> IndexerConfig {
        IndexerConfig {
            snapshot_location: self.snapshot.filename.clone(),
            ignore_patterns: self.ignore.clone(),
            root_mode: if self.strict_root {
                RootMode::Strict
            } else {
                RootMode::Fallback
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "index",
        about = "Scan paths and store a snapshot",
        long_about = "This command fingerprints every eligible file under the given paths \
        and writes the merged snapshot to the snapshot file."
    )]
    Index {
        #[command(flatten)]
        scan: ScanArgs,
    },
    #[command(
        name = "check",
        about = "Report files changed since the stored snapshot",
        long_about = "This command rescans the given paths and compares them against the stored snapshot. \
        It exits with status 1 when anything was added, modified or removed."
    )]
    Check {
        #[command(flatten)]
        scan: ScanArgs,
        #[arg(short, long, help = "Print one `<A|M|D> <path>` line per change")]
        short: bool,
    },
    #[command(name = "hash-file", about = "Print the fingerprint of a file")]
    HashFile {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "ls-snapshot", about = "List the entries of the stored snapshot")]
    LsSnapshot {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[arg(long, help = "Show abbreviated fingerprints")]
        abbrev: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let stdout = Box::new(std::io::stdout());

    match &cli.command {
        Commands::Index { scan } => {
            let mut project = Project::new(&scan.config(), stdout)?;
            project.index(&scan.paths)?;

            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { scan, short } => {
            let mut project = Project::new(&scan.config(), stdout)?;
            let format = if *short {
                CheckFormat::Short
            } else {
                CheckFormat::Sections
            };
            let change_set = project.check(&scan.paths, format)?;

            if change_set.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::HashFile { file } => {
            let mut project = Project::new(&IndexerConfig::default(), stdout)?;
            project.hash_file(file)?;

            Ok(ExitCode::SUCCESS)
        }
        Commands::LsSnapshot { snapshot, abbrev } => {
            let config = IndexerConfig {
                snapshot_location: snapshot.filename.clone(),
                ..Default::default()
            };
            let mut project = Project::new(&config, stdout)?;
            project.ls_snapshot(*abbrev)?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
