use crate::{MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN};

/// Ensure entity names are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("entity name is empty".to_string());
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("entity name '{name}' must be ASCII"));
    }

    Ok(())
}

/// Field names must be non-empty snake-case ASCII within the maximum length.
pub(crate) fn validate_field_name(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("field name is empty".to_string());
    }
    if ident.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field name '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !ident
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return Err(format!("field name '{ident}' must be snake case"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_names() {
        assert!(validate_entity_name("Widget").is_ok());
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("Wïdget").is_err());
        assert!(validate_entity_name(&"W".repeat(MAX_ENTITY_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn field_names() {
        assert!(validate_field_name("load_balancer_id").is_ok());
        assert!(validate_field_name("").is_err());
        assert!(validate_field_name("loadBalancerId").is_err());
    }
}
