//! CLI command definitions and dispatch.

pub mod compose;
pub mod new;
pub mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use traitmix_common::constants::{APP_NAME, BIN_NAME, DEFAULT_CATALOG_FILE};
use traitmix_compose::SynthesisCache;
use traitmix_sdk::Composer;

use crate::catalog::Catalog;

/// traitmix — compose traits onto classes at runtime.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, bin_name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the catalog of class and trait definitions.
    #[arg(
        long,
        global = true,
        env = "TRAITMIX_CATALOG",
        default_value = DEFAULT_CATALOG_FILE
    )]
    pub catalog: PathBuf,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fully-qualified names the given traits resolve to.
    Resolve(resolve::ResolveArgs),
    /// Compose a class with traits and describe the result.
    Compose(compose::ComposeArgs),
    /// Compose a class with traits and construct an instance.
    New(new::NewArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(
        app = APP_NAME,
        version = env!("CARGO_PKG_VERSION"),
        catalog = %cli.catalog.display(),
        "starting"
    );
    let catalog = Catalog::load(&cli.catalog)?;
    let composer = Composer::with_config(
        catalog.config.clone(),
        std::sync::Arc::new(SynthesisCache::new()),
        catalog.components.clone(),
    )?;
    match cli.command {
        Command::Resolve(args) => resolve::execute(&catalog, &composer, &args),
        Command::Compose(args) => compose::execute(&catalog, &composer, &args),
        Command::New(args) => new::execute(&catalog, &composer, args),
    }
}
