//! Name sanitizer.
//! Applies a fixed, ordered list of literal substring replacements to a single
//! base name. Each rule replaces every occurrence before the next rule runs.
//!
//! Notes:
//! - The ordered pass is repeated until it changes nothing, so output never
//!   contains a rule target (e.g. " vti_" -> "_vti_" -> "_").
//! - Every pass that changes the name either shortens it or removes a
//!   forbidden character, so the loop terminates.

/// Ordered (target, replacement) pairs. Order matters: later rules see the
/// output of earlier ones.
pub const RULES: &[(&str, &str)] = &[
    ("_vti_", "_"),
    (" ", "_"),
    ("/", "_"),
    ("#", "_"),
    ("%", "_"),
    ("&", "_"),
    ("*", "_"),
    (":", "_"),
    ("<", "_"),
    (">", "_"),
    ("?", "_"),
    ("|", "_"),
];

/// True if any rule target occurs in `name`.
#[inline]
pub fn needs_sanitizing(name: &str) -> bool {
    RULES.iter().any(|(target, _)| name.contains(target))
}

/// One ordered pass over the rule set.
fn apply_rules_once(name: &str) -> String {
    RULES
        .iter()
        .fold(name.to_owned(), |acc, (target, replacement)| {
            if acc.contains(target) {
                acc.replace(target, replacement)
            } else {
                acc
            }
        })
}

/// Sanitize a single base name. Total over all inputs; "" maps to "".
pub fn sanitize_name(name: &str) -> String {
    let mut current = name.to_owned();
    while needs_sanitizing(&current) {
        current = apply_rules_once(&current);
    }
    current
}
