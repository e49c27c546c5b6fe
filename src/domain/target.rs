//! Target qualification: the mapping between bare `:name` references and
//! fully-qualified `path/from/root:name` Pants targets.

use crate::domain::AppError;

/// Check that a user-supplied target is a bare reference (`:name`).
pub fn validate(target: &str) -> Result<(), AppError> {
    if target.starts_with(':') {
        Ok(())
    } else {
        Err(AppError::MalformedTarget(target.to_string()))
    }
}

/// Assemble fully-qualified targets, space-delimited.
///
/// Each bare target already carries its leading `:`, so qualification is
/// plain concatenation with the relative path. Order is preserved; an empty
/// input yields an empty string.
pub fn qualify(rel_path: &str, bare_targets: &[String]) -> String {
    bare_targets
        .iter()
        .map(|target| format!("{rel_path}{target}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate every bare target, then qualify the whole set.
pub fn qualify_checked(rel_path: &str, bare_targets: &[String]) -> Result<String, AppError> {
    for target in bare_targets {
        validate(target)?;
    }
    Ok(qualify(rel_path, bare_targets))
}

/// Strip path prefixes from a `list` goal listing.
///
/// Lines containing a `:` yield everything from the first `:` onward as a
/// bare `:name` reference; lines without one are dropped.
pub fn bare_targets(listing: &str) -> impl Iterator<Item = String> + '_ {
    listing
        .lines()
        .filter_map(|line| line.split_once(':').map(|(_, rest)| format!(":{rest}")))
}
