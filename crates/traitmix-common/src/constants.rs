//! Workspace-wide constants.

/// Marker that makes a trait name absolute, bypassing namespace resolution.
pub const ABSOLUTE_ESCAPE: char = '+';

/// Separator placed between a namespace prefix and a relative trait name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Reserved constructor argument carrying the trait list for `new_with_traits`.
pub const TRAITS_KEY: &str = "traits";

/// Path segment identifying a synthesized composite class name.
pub const COMPOSITE_MARKER: &str = "__COMPOSITE__";

/// Number of hex characters of the SHA-256 digest kept in composite names.
pub const COMPOSITE_DIGEST_LEN: usize = 12;

/// Default catalog file read by the CLI.
pub const DEFAULT_CATALOG_FILE: &str = "traitmix.yaml";

/// Application name used in CLI output.
pub const APP_NAME: &str = "traitmix";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "trx";
