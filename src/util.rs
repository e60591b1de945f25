use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Generates a spend id for [`crate::TransferParams`]: unix-millis timestamp
/// plus a random suffix. Unique across calls within a process lifetime;
/// uniqueness per transfer attempt is a caller responsibility.
pub fn generate_spend_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    format!("{millis}-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn spend_ids_are_unique_across_many_invocations() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_spend_id()));
        }
    }

    #[test]
    fn spend_id_starts_with_a_timestamp() {
        let id = generate_spend_id();
        let (prefix, suffix) = id.split_once('-').expect("timestamp-suffix shape");
        assert!(prefix.parse::<u128>().is_ok());
        assert!(!suffix.is_empty());
    }
}
