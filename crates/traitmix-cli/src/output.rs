//! Formatted output helpers for CLI commands.

use std::fmt::Write;

use traitmix_core::ClassDef;

/// Renders a class as an indented summary of its name, lookup order,
/// components, and visible methods.
#[must_use]
pub fn describe_class(class: &ClassDef) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", class.name());
    let _ = writeln!(out, "  isa:        {}", class.linearization().join(" -> "));
    let _ = writeln!(
        out,
        "  components: {}",
        join_or_dash(class.component_ids().iter().map(ToString::to_string))
    );
    let _ = writeln!(out, "  methods:    {}", join_or_dash(class.method_names()));
    let _ = writeln!(
        out,
        "  attributes: {}",
        join_or_dash(class.attribute_set().into_iter().map(|a| a.name))
    );
    out
}

fn join_or_dash(items: impl IntoIterator<Item = String>) -> String {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
