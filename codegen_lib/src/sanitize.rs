//! Reserved-word deconfliction for emitted identifiers.

/// Schema identifiers that collide with Ada reserved words, matched
/// case-insensitively. A fixed, closed set.
const RESERVED_WORDS: &[&str] = &["loop", "task"];

/// Prefix prepended to colliding identifiers.
const RESERVED_PREFIX: &str = "Msg";

/// Returns the identifier unchanged unless its case-insensitive form is
/// reserved, in which case the fixed prefix is prepended. Deterministic
/// and context-free; no failure mode.
pub fn sanitize(name: &str) -> String {
    if RESERVED_WORDS.iter().any(|w| name.eq_ignore_ascii_case(w)) {
        format!("{RESERVED_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn reserved_words_are_prefixed_case_insensitively() {
        assert_eq!(sanitize("loop"), "Msgloop");
        assert_eq!(sanitize("Task"), "MsgTask");
        assert_eq!(sanitize("LOOP"), "MsgLOOP");
    }

    #[test]
    fn ordinary_identifiers_pass_through() {
        assert_eq!(sanitize("Speed"), "Speed");
        assert_eq!(sanitize("Waypoint"), "Waypoint");
    }
}
