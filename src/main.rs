use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use ratatui::layout::Rect;

mod app;
mod config;
mod constants;
mod domain;
mod event;
mod graph;
mod handler;
mod logging;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    app::App,
    config::{AppConfig, ConfigOverrides},
    domain::{EntityDirectory, StaticDirectory},
    graph::{AngularPartition, EntityGraph, RecordingSurface, ViewState, renderer},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// entigraph - radial relationship graphs for AML investigations
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Entity id to open at startup
    #[arg(short, long)]
    entity: Option<String>,

    /// JSON file with an array of entities, replacing the built-in directory
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Configuration file to read instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Angular spacing of accounts on the inner ring
    #[arg(long, value_enum)]
    partition: Option<AngularPartition>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entities in the directory
    List,
    /// Print the computed layout of one entity
    Layout {
        /// Entity id
        id: String,
        /// Print the draw operations of one paint pass instead
        #[arg(long)]
        trace: bool,
    },
    /// Write the effective settings, flags included, to the config file
    SaveConfig,
    /// Display version information
    Version,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        entity: cli.entity.clone(),
        fixtures: cli.fixtures.clone(),
        partition: cli.partition,
    };
    let loaded = AppConfig::load(cli.config.as_deref());
    let config = loaded
        .as_ref()
        .cloned()
        .unwrap_or_default()
        .apply_overrides(overrides);

    match logging::init(&config.log_level) {
        Ok(path) => tracing::info!("entigraph v{VERSION} logging to {}", path.display()),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }
    if let Err(err) = &loaded {
        tracing::debug!("Config unusable, using defaults: {err}");
    }

    if let Some(command) = &cli.command {
        let output = match command {
            Commands::List => list_entities(&load_directory(&config)?),
            Commands::Layout { id, trace } => describe_layout(
                &load_directory(&config)?,
                id,
                config.angular_partition,
                *trace,
            )?,
            Commands::SaveConfig => save_config(&config, cli.config.as_deref())?,
            Commands::Version => format!("entigraph v{VERSION}"),
        };
        println!("{output}");
        return Ok(());
    }

    let directory = load_directory(&config)?;
    let mut terminal = tui::init()?;
    let size = terminal.size()?;
    let mut app = App::new(
        Box::new(directory),
        &config,
        Rect::new(0, 0, size.width, size.height),
    );
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}

fn load_directory(config: &AppConfig) -> Result<StaticDirectory> {
    match &config.fixtures {
        Some(path) => Ok(StaticDirectory::from_path(path)?),
        None => Ok(StaticDirectory::builtin()),
    }
}

/// Writes `config` to `explicit` or the default location.
fn save_config(config: &AppConfig, explicit: Option<&Path>) -> Result<String> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => AppConfig::config_path()?,
    };
    config.save_to(&path)?;
    tracing::info!("Saved configuration to {}", path.display());
    Ok(format!("Saved configuration to {}", path.display()))
}

/// One line per entity: id, name, type and risk.
fn list_entities(directory: &dyn EntityDirectory) -> String {
    if directory.is_empty() {
        return "No entities in directory".to_string();
    }
    let mut out = String::new();
    for id in directory.ids() {
        if let Some(entity) = directory.lookup(id) {
            let _ = writeln!(
                out,
                "{:<12} {:<32} {:<12} risk {:>3}",
                entity.id, entity.name, entity.profile.entity_type, entity.risk_score
            );
        }
    }
    out.trim_end().to_string()
}

/// Node positions and edges, or the raw draw trace with `trace`.
fn describe_layout(
    directory: &dyn EntityDirectory,
    id: &str,
    partition: AngularPartition,
    trace: bool,
) -> Result<String> {
    let entity = directory.require(id)?;
    let graph = EntityGraph::with_partition(entity, partition);

    if trace {
        let mut surface = RecordingSurface::new();
        renderer::paint(&graph, &ViewState::new(), &mut surface);
        return Ok(surface.trace());
    }

    let mut out = String::new();
    for node in &graph.nodes {
        let _ = writeln!(
            out,
            "node {:<12} ({:>6.1}, {:>6.1}) r={:<4} {}",
            node.id,
            node.position.x,
            node.position.y,
            node.kind.radius(),
            node.label.replace('\n', " / ")
        );
    }
    for edge in &graph.edges {
        let _ = writeln!(
            out,
            "edge {} -> {} \"{}\" strength={:.2}",
            edge.source, edge.target, edge.label, edge.strength
        );
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags_and_subcommands() {
        let cli = Cli::parse_from([
            "entigraph",
            "--entity",
            "ENT-03294",
            "--partition",
            "account-span",
            "layout",
            "ENT-03294",
            "--trace",
        ]);
        assert_eq!(cli.entity.as_deref(), Some("ENT-03294"));
        assert_eq!(cli.partition, Some(AngularPartition::AccountSpan));
        assert!(matches!(
            cli.command,
            Some(Commands::Layout { ref id, trace: true }) if id == "ENT-03294"
        ));
    }

    #[test]
    fn test_list_entities() {
        let listing = list_entities(&StaticDirectory::builtin());
        assert_eq!(listing.lines().count(), 2);
        assert!(listing.contains("ENT-00451"));
        assert!(listing.contains("Zhang Wei"));
    }

    #[test]
    fn test_save_config_writes_effective_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig::default().apply_overrides(ConfigOverrides {
            partition: Some(AngularPartition::AccountSpan),
            ..ConfigOverrides::default()
        });

        let message = save_config(&config, Some(&path)).unwrap();
        assert!(message.starts_with("Saved configuration to"));
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_list_empty_directory() {
        assert_eq!(
            list_entities(&StaticDirectory::default()),
            "No entities in directory"
        );
    }

    #[test]
    fn test_describe_layout_lists_nodes_and_edges() {
        let text = describe_layout(
            &StaticDirectory::builtin(),
            "ENT-00451",
            AngularPartition::Continuous,
            false,
        )
        .unwrap();
        assert!(text.starts_with("node ENT-00451"));
        assert!(text.contains("( 400.0,  300.0)"));
        assert!(text.contains("\"owns\""));
    }

    #[test]
    fn test_describe_layout_trace_is_bracketed() {
        let text = describe_layout(
            &StaticDirectory::builtin(),
            "ENT-00451",
            AngularPartition::Continuous,
            true,
        )
        .unwrap();
        assert!(text.starts_with("clear"));
        assert!(text.ends_with("restore"));
    }

    #[test]
    fn test_describe_unknown_entity_fails() {
        let err = describe_layout(
            &StaticDirectory::builtin(),
            "ENT-404",
            AngularPartition::Continuous,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ENT-404"));
    }
}
