//! CLI Adapter.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::build_resolver;
use crate::app::resources;
use crate::domain::AppError;
use crate::ports::ResourceResolver;

#[derive(Parser)]
#[command(name = "reskit")]
#[command(version)]
#[command(about = "Inspect bundled resources through the reskit accessors", long_about = None)]
struct Cli {
    /// Resource root to search (repeatable, searched in the order given)
    #[arg(short, long = "root", global = true)]
    roots: Vec<PathBuf>,
    /// TOML file listing additional resource roots
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a resource decoded as UTF-8 text
    #[clap(visible_alias = "t")]
    Text {
        /// Resource identifier
        id: String,
    },
    /// Print a property resource as key=value lines
    #[clap(visible_alias = "p")]
    Props {
        /// Resource identifier
        id: String,
        /// Emit a JSON object instead
        #[arg(long)]
        json: bool,
    },
    /// Copy raw resource bytes to stdout
    Cat {
        /// Resource identifier
        id: String,
    },
    /// Print the resolved URI of a resource
    #[clap(visible_alias = "u")]
    Uri {
        /// Resource identifier
        id: String,
    },
    /// List child names from a manifest resource
    #[clap(visible_alias = "l")]
    Ls {
        /// Manifest resource identifier
        path: String,
        /// Emit a JSON array instead
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();

    let result = build_resolver(cli.roots, cli.config.as_deref())
        .and_then(|resolver| execute(&resolver, cli.command));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute<R: ResourceResolver>(resolver: &R, command: Commands) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Text { id } => {
            let text = resources::read_as_text(resolver, &id)?;
            out.write_all(text.as_bytes())?;
        }
        Commands::Props { id, json } => {
            let properties = resources::read_as_key_value_map(resolver, &id)?;
            if json {
                let rendered = serde_json::to_string_pretty(&properties).map_err(io::Error::from)?;
                writeln!(out, "{}", rendered)?;
            } else {
                for (key, value) in &properties {
                    writeln!(out, "{}={}", key, value)?;
                }
            }
        }
        Commands::Cat { id } => {
            let mut stream = resources::open_stream(resolver, &id)?;
            io::copy(&mut stream, &mut out)?;
        }
        Commands::Uri { id } => {
            let location = resources::resolve_location(resolver, &id)?;
            writeln!(out, "{}", location)?;
        }
        Commands::Ls { path, json } => {
            let names = resources::list_child_names(resolver, &path)?;
            if json {
                let rendered = serde_json::to_string_pretty(&names).map_err(io::Error::from)?;
                writeln!(out, "{}", rendered)?;
            } else {
                for name in &names {
                    writeln!(out, "{}", name)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
