//! `trx new` — Construct an instance of a class with traits.

use clap::Args;
use traitmix_compose::ConstructorArgs;
use traitmix_core::Value;
use traitmix_sdk::Composer;

use crate::catalog::Catalog;

/// Arguments for the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Base class name.
    pub class: String,

    /// Trait to apply; repeat for several, in order.
    #[arg(short = 't', long = "trait")]
    pub traits: Vec<String>,

    /// Constructor argument as `key=value`; the value is parsed as JSON
    /// and falls back to a plain string.
    #[arg(short, long = "arg", value_parser = parse_key_value)]
    pub args: Vec<(String, Value)>,

    /// Constructor arguments as one JSON object, merged before `--arg`.
    #[arg(long = "args")]
    pub bundle: Option<String>,

    /// Zero-argument method to call on the new instance.
    #[arg(long)]
    pub call: Option<String>,
}

/// Executes the `new` command.
///
/// # Errors
///
/// Returns an error if composition or construction fails, or if the
/// bundle is not a JSON object.
pub fn execute(catalog: &Catalog, composer: &Composer, args: NewArgs) -> anyhow::Result<()> {
    let base = catalog.classes.get(&args.class)?;

    let mut ctor = match &args.bundle {
        Some(json) => ConstructorArgs::from_bundle(serde_json::from_str(json)?)?,
        None => ConstructorArgs::new(),
    };
    ctor.extend(ConstructorArgs::from_pairs(args.args));

    let instance = composer
        .builder(&base)
        .traits(args.traits)
        .bundle(Value::Object(ctor.as_map().clone()))?
        .build()?;
    println!("{}", serde_json::to_string_pretty(&instance.to_value())?);

    if let Some(method) = &args.call {
        let result = instance.call(method, &[])?;
        println!("{method}: {result}");
    }
    Ok(())
}

/// Parses `key=value`, reading the value as JSON when possible.
fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {raw:?}"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
