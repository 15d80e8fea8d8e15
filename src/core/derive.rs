//! Field derivation
//!
//! Pure helpers turning raw catalog fields into presentation values.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

use super::catalog::SupportTier;

/// Alternating digit and non-digit runs
static RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+|[^0-9]+").expect("Invalid run pattern"));

/// Markdown link `[name](base/slug/)`, or `name` unchanged when either part is empty
pub fn link(name: &str, base: &str, slug: &str) -> String {
    if name.is_empty() || slug.is_empty() {
        return name.to_string();
    }
    format!("[{name}]({}/{slug}/)", base.trim_end_matches('/'))
}

/// Link a build script to its file in the repository
pub fn build_script_link(path: &str, blob_base: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!("[{path}]({}/{path})", blob_base.trim_end_matches('/'))
}

#[derive(Debug)]
enum Run<'a> {
    Digits(&'a str),
    Text(String),
}

impl PartialEq for Run<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Run<'_> {}

impl Ord for Run<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Run::Digits(a), Run::Digits(b)) => {
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Run::Text(a), Run::Text(b)) => a.cmp(b),
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Run<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn runs(s: &str) -> Vec<Run<'_>> {
    RUNS.find_iter(s)
        .map(|m| {
            let part = m.as_str();
            if part.as_bytes()[0].is_ascii_digit() {
                Run::Digits(part)
            } else {
                Run::Text(part.to_lowercase())
            }
        })
        .collect()
}

/// Human ordering: digit runs compare by value, text runs case-insensitively
///
/// Falls back to byte order when the runs tie (`"007"` vs `"7"`, `"GB"` vs
/// `"gb"`), so the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    runs(a).cmp(&runs(b)).then_with(|| a.cmp(b))
}

/// Sort in natural order
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

/// Natural-sort a list and join it with `", "`
pub fn join_natural<S: AsRef<str>>(items: &[S]) -> String {
    let mut sorted: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    natural_sort(&mut sorted);
    sorted.join(", ")
}

/// Official / community / retired marker cells
pub fn status_columns(tier: SupportTier) -> [&'static str; 3] {
    match tier {
        SupportTier::Kali => ["x", "", ""],
        SupportTier::Community => ["", "x", ""],
        SupportTier::Eol => ["", "", "x"],
        SupportTier::Unknown => ["", "", ""],
    }
}

/// Capitalize the first character (`"custom"` → `"Custom"`)
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
