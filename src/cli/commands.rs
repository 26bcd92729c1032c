use crate::discovery::{discover_routes, sort_routes, RouteRecord};
use crate::docs::load_doc_index;
use crate::hot_reload::{live_routes, watch_documentation};
use crate::registry::StaticRegistry;
use crate::runtime_config::DiscoveryConfig;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line interface for routescan
#[derive(Parser)]
#[command(name = "routescan")]
#[command(about = "Discover controller routes and their documentation", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the documentation index of an XML documentation file
    Docs {
        /// Path to the documentation XML file
        #[arg(short, long)]
        doc: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Validate a documentation file
    Check {
        /// Path to the documentation XML file
        #[arg(short, long)]
        doc: PathBuf,
    },
    /// Discover the route table of a registry manifest
    Routes {
        /// Registry manifest (YAML or JSON)
        #[arg(short, long)]
        registry: PathBuf,

        /// Documentation XML file
        #[arg(short, long, conflicts_with = "artifact")]
        doc: Option<PathBuf>,

        /// Compiled artifact; its `.xml` sibling is the documentation file
        #[arg(short, long)]
        artifact: Option<PathBuf>,

        /// Sort by controller, path and verb instead of discovery order
        #[arg(long, default_value_t = false)]
        sort: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Keep running and print the table again when the documentation changes
        #[arg(long, default_value_t = false)]
        watch: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// JSON array
    Json,
}

/// Parse the process arguments and execute the command.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Execute `cli`, writing command output to `out`.
///
/// # Errors
///
/// Returns an error if the documentation file is missing or malformed, the
/// registry manifest cannot be loaded, or the watcher cannot be started.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::Docs { doc, format } => {
            let index = load_doc_index(&doc)?;
            let entries = index.sorted_entries();
            match format {
                OutputFormat::Json => {
                    let map: serde_json::Map<String, serde_json::Value> = entries
                        .iter()
                        .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
                        .collect();
                    serde_json::to_writer_pretty(&mut *out, &map)?;
                    writeln!(out)?;
                }
                OutputFormat::Table => {
                    for (key, description) in entries {
                        writeln!(out, "{key}\t{description}")?;
                    }
                }
            }
            Ok(())
        }
        Commands::Check { doc } => {
            let index = load_doc_index(&doc)?;
            writeln!(
                out,
                "{}: {} documented method(s)",
                doc.display(),
                index.len()
            )?;
            Ok(())
        }
        Commands::Routes {
            registry,
            doc,
            artifact,
            sort,
            format,
            watch,
        } => {
            let registry = StaticRegistry::from_manifest_file(&registry)?;
            let config = match (doc, artifact) {
                (Some(doc), _) => DiscoveryConfig::for_documentation(doc),
                (None, Some(artifact)) => DiscoveryConfig::for_artifact(artifact),
                (None, None) => DiscoveryConfig::from_env()
                    .context("Failed to locate the running executable")?,
            };

            let mut routes = discover_routes(&registry, &config)?;
            if sort {
                sort_routes(&mut routes);
            }
            write_routes(out, &routes, format)?;

            if watch {
                let (tx, rx) = std::sync::mpsc::channel::<Vec<RouteRecord>>();
                let live = live_routes(routes);
                let _watcher = watch_documentation(
                    &config.doc_path,
                    registry,
                    live,
                    move |table| {
                        // Receiver is gone only when the command is exiting.
                        tx.send(table.to_vec()).ok();
                    },
                )
                .with_context(|| format!("Failed to watch {}", config.doc_path.display()))?;
                info!(path = %config.doc_path.display(), "watching documentation file");

                for mut table in rx {
                    if sort {
                        sort_routes(&mut table);
                    }
                    writeln!(out)?;
                    write_routes(out, &table, format)?;
                    out.flush()?;
                }
            }
            Ok(())
        }
    }
}

fn write_routes<W: Write>(
    out: &mut W,
    routes: &[RouteRecord],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, routes)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let verb_width = routes
                .iter()
                .map(|r| r.http_verb.as_str().len())
                .max()
                .unwrap_or(0);
            let path_width = routes.iter().map(|r| r.action_path.len()).max().unwrap_or(0);
            let controller_width = routes
                .iter()
                .map(|r| r.controller_name.len())
                .max()
                .unwrap_or(0);
            for r in routes {
                let line = format!(
                    "{:<verb_width$}  {:<path_width$}  {:<controller_width$}  {}",
                    r.http_verb.as_str(),
                    r.action_path,
                    r.controller_name,
                    r.description
                );
                writeln!(out, "{}", line.trim_end())?;
            }
        }
    }
    Ok(())
}
