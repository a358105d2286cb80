// pixie-params/src/processors/naming.rs
use regex::Regex;
use std::sync::OnceLock;

fn transformation_name_re() -> &'static Regex {
    static INSTANCE: OnceLock<Regex> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        Regex::new(r"^t_([0-9A-Za-z-]+)$").expect("transformation name pattern is valid")
    })
}

/// Returns `photo` for a named transformation such as `t_photo`.
///
/// `None` means the string is not in the named form, usually because it is
/// an explicit `key_value` list.
pub fn parse_transformation_name(raw: &str) -> Option<&str> {
    transformation_name_re()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
