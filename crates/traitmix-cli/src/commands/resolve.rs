//! `trx resolve` — Print resolved trait names.

use clap::Args;
use traitmix_sdk::Composer;

use crate::catalog::Catalog;

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Base class name.
    pub class: String,
    /// Raw trait names; prefix with `+` to bypass the namespace.
    pub traits: Vec<String>,
}

/// Executes the `resolve` command.
///
/// # Errors
///
/// Returns an error if the class is unknown or a trait name is invalid.
pub fn execute(catalog: &Catalog, composer: &Composer, args: &ResolveArgs) -> anyhow::Result<()> {
    let base = catalog.classes.get(&args.class)?;
    for id in composer.resolve(&base, args.traits.as_slice())? {
        println!("{id}");
    }
    Ok(())
}
