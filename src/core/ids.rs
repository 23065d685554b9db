use uuid::Uuid;

pub const ORDER_ID_PREFIX: &str = "INV";
const SUFFIX_LEN: usize = 10;

/// Generate a human-readable order identifier: a fixed prefix followed by a
/// fixed-length suffix taken from a v4 UUID, so two calls cannot collide on
/// the same invoice path in practice.
pub fn generate_order_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", ORDER_ID_PREFIX, hex[..SUFFIX_LEN].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_prefix_and_fixed_length() {
        let id = generate_order_id();
        assert!(id.starts_with(ORDER_ID_PREFIX));
        assert_eq!(id.len(), ORDER_ID_PREFIX.len() + SUFFIX_LEN);
        assert!(id[ORDER_ID_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(generate_order_id(), generate_order_id());
    }
}
