// pixie-params/src/utils/mod.rs

/// Splits a path at its last `.` into the part before it and the extension
/// including the dot. `None` when there is no dot at all.
pub fn split_extension(path: &str) -> Option<(&str, &str)> {
    path.rfind('.').map(|i| path.split_at(i))
}
