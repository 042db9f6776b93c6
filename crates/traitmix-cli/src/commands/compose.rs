//! `trx compose` — Describe the composite class for a base and traits.

use clap::Args;
use traitmix_sdk::Composer;

use crate::catalog::Catalog;
use crate::output;

/// Arguments for the `compose` command.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Base class name.
    pub class: String,
    /// Raw trait names, applied in order.
    pub traits: Vec<String>,
}

/// Executes the `compose` command.
///
/// # Errors
///
/// Returns an error if the class or a trait is unknown, a name is invalid,
/// or a trait's requirements are not met.
pub fn execute(catalog: &Catalog, composer: &Composer, args: &ComposeArgs) -> anyhow::Result<()> {
    let base = catalog.classes.get(&args.class)?;
    let class = composer.with_traits(&base, args.traits.as_slice())?;
    print!("{}", output::describe_class(&class));
    Ok(())
}
