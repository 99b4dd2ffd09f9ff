//! CLI for the fabtex catalog tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fabtex_core::catalog::{load_catalog, resolve_project_root, Catalog, CatalogLocator};
use fabtex_core::config::{self, FabtexConfig};
use fabtex_core::paths::ProjectPaths;
use std::path::PathBuf;

use commands::{run_folders, run_materials, run_textures};

/// Top-level CLI for the fabtex catalog tool.
#[derive(Debug, Parser)]
#[command(name = "fabtex")]
#[command(about = "fabtex: derive folders, material specs, and textures from a fabric catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create the collection/subcollection folder tree.
    Folders {
        /// Path to the catalog JSON (overrides discovery).
        #[arg(long = "json", value_name = "PATH")]
        json_path: Option<PathBuf>,
    },

    /// Print material-instance specs; optionally drive the asset backend.
    Materials {
        /// Path to the catalog JSON (overrides discovery).
        #[arg(long = "json", value_name = "PATH")]
        json_path: Option<PathBuf>,

        /// Apply the specs through the asset backend after printing.
        #[arg(long)]
        apply: bool,
    },

    /// Download variation images into the texture tree.
    Textures {
        /// Path to the catalog JSON (overrides discovery).
        #[arg(long = "json", value_name = "PATH")]
        json_path: Option<PathBuf>,
    },
}

/// Locates and loads the catalog, returning it with the resolved roots.
fn load_project(
    cfg: &FabtexConfig,
    json_path: Option<PathBuf>,
) -> Result<(Catalog, ProjectPaths)> {
    let locator = CatalogLocator {
        explicit: json_path,
        env_var: "COLLECTIONS_JSON".to_string(),
        manual_candidates: cfg.catalog_candidates.clone(),
        search_dir: std::env::current_dir()?,
        scripts_dir_name: cfg.scripts_dir_name.clone(),
        filenames: cfg.catalog_filenames.clone(),
    };
    let catalog_file = locator.locate()?;
    println!("Using catalog: {}", catalog_file.display());

    let project_root = resolve_project_root(&catalog_file, &cfg.scripts_dir_name);
    let catalog = load_catalog(&catalog_file)?;
    let paths = ProjectPaths::resolve(cfg, &project_root);
    Ok((catalog, paths))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Folders { json_path } => {
                let (catalog, paths) = load_project(&cfg, json_path)?;
                run_folders(&catalog, &paths)?;
            }
            CliCommand::Materials { json_path, apply } => {
                let (catalog, paths) = load_project(&cfg, json_path)?;
                run_materials(&catalog, &paths, apply)?;
            }
            CliCommand::Textures { json_path } => {
                let (catalog, paths) = load_project(&cfg, json_path)?;
                run_textures(&catalog, &paths, &cfg)?;
            }
        }

        Ok(())
    }
}
