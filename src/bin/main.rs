use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{BufReader, stdin, stdout};
use vfsync::config::{SettingsSource, load_settings};
use vfsync::{TargetOs, Uri, Vfs, VfsHandle, VfsOptions, serve};

/// Mirror of a language client's open documents, driven over stdio
#[derive(Parser)]
#[command(name = "vfsync")]
#[command(version)]
#[command(about = "Mirror of a language client's open documents, driven over stdio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read JSON-lines events and queries from stdin, reply on stdout
    Serve {
        /// Project root searched for vfsync.toml
        #[arg(long)]
        root: Option<PathBuf>,

        /// Settings file (TOML) applied over every other layer
        #[arg(long)]
        config: Option<PathBuf>,

        /// Inline JSON settings applied over every other layer
        #[arg(long, conflicts_with = "config")]
        config_json: Option<String>,
    },
    /// Print the store key for a URI
    Normalize {
        uri: String,
        #[arg(long, value_enum, default_value_t = OsArg::Host)]
        os: OsArg,
    },
    /// Print the file path a file URI denotes
    UriToPath {
        uri: String,
        #[arg(long, value_enum, default_value_t = OsArg::Host)]
        os: OsArg,
    },
    /// Print the file URI for a path
    PathToUri {
        path: String,
        #[arg(long, value_enum, default_value_t = OsArg::Host)]
        os: OsArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OsArg {
    Host,
    Windows,
    Unix,
}

impl From<OsArg> for TargetOs {
    fn from(os: OsArg) -> Self {
        match os {
            OsArg::Host => TargetOs::host(),
            OsArg::Windows => TargetOs::Windows,
            OsArg::Unix => TargetOs::Unix,
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn override_layer(
    config: Option<PathBuf>,
    config_json: Option<String>,
) -> Result<Option<(SettingsSource, serde_json::Value)>, String> {
    if let Some(json) = config_json {
        let value = serde_json::from_str(&json)
            .map_err(|err| format!("--config-json is not valid JSON: {}", err))?;
        return Ok(Some((SettingsSource::CommandLine, value)));
    }
    if let Some(path) = config {
        let contents = std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
        let value = toml::from_str(&contents)
            .map_err(|err| format!("failed to parse {}: {}", path.display(), err))?;
        return Ok(Some((SettingsSource::ConfigFile, value)));
    }
    Ok(None)
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            root,
            config,
            config_json,
        } => {
            let override_settings =
                override_layer(config, config_json).unwrap_or_else(|e| fail(e));
            let outcome = load_settings(root.as_deref(), override_settings);
            for event in &outcome.events {
                event.log();
            }

            let options = VfsOptions::from(outcome.settings);
            let snapshot_dir = match options.snapshot_dir.as_deref() {
                Some(dir) => dir.display().to_string(),
                None => "the system temp dir".to_string(),
            };
            log::info!(
                "Serving with target OS {:?}, snapshots in {}",
                options.target_os,
                snapshot_dir
            );

            let (handle, join) = VfsHandle::spawn(Vfs::new(options));
            if let Err(e) = serve(&handle, BufReader::new(stdin()), stdout()).await {
                fail(e);
            }
            drop(handle);
            if let Ok(vfs) = join.await {
                log::info!("Input closed with {} open documents", vfs.len());
            }
        }
        Commands::Normalize { uri, os } => {
            match vfsync::normalize(&Uri::new(uri), os.into()) {
                Ok(normalized) => println!("{}", normalized),
                Err(e) => fail(e),
            }
        }
        Commands::UriToPath { uri, os } => {
            match vfsync::uri_to_file_path(&Uri::new(uri), os.into()) {
                Ok(Some(path)) => println!("{}", path),
                Ok(None) => fail("not a file URI"),
                Err(e) => fail(e),
            }
        }
        Commands::PathToUri { path, os } => {
            println!("{}", vfsync::file_path_to_uri(&path, os.into()));
        }
    }

    if let Err(e) = std::io::stdout().flush() {
        fail(e);
    }
}
