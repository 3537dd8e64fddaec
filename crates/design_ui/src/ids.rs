//! Instance identifiers for label association and stylesheet scoping.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a new identifier of the form `{prefix}-{n}`, unique within the process.
///
/// Component bodies run once per instance, so calling this from a component body
/// yields an identifier that stays fixed for the lifetime of that instance.
pub fn next_instance_id(prefix: &str) -> String {
    let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique_and_prefixed() {
        let first = next_instance_id("ds-radio");
        let second = next_instance_id("ds-radio");

        assert!(first.starts_with("ds-radio-"));
        assert_ne!(first, second);
    }
}
