//! Identifier handling utilities.
//!
//! The target engine quotes identifiers with double quotes. These helpers
//! strip quoting from user-supplied names and split model-qualified names,
//! so the rest of the pipeline works with bare identifiers throughout.

/// Strips double quotes from an identifier.
///
/// ```ignore
/// assert_eq!(normalize_identifier("\"MyTable\""), "MyTable");
/// assert_eq!(normalize_identifier("  plain  "), "plain");
/// ```
pub fn normalize_identifier(ident: &str) -> String {
    ident.trim().trim_matches('"').to_string()
}

/// Splits a qualified name into model and object name parts. If no model
/// qualifier is present, the default model is used.
///
/// ```ignore
/// assert_eq!(split_qualified_name("model.orders", "views"), ("model", "orders"));
/// assert_eq!(split_qualified_name("orders", "views"), ("views", "orders"));
/// ```
pub fn split_qualified_name(name: &str, default_model: &str) -> (String, String) {
    let trimmed = name.trim();

    // Handle "model"."name" format
    if trimmed.contains("\".\"") {
        if let Some((model_part, name_part)) = trimmed.split_once("\".\"") {
            let model = model_part.trim_start_matches('"').to_string();
            let obj_name = name_part.trim_end_matches('"').to_string();
            return (model, obj_name);
        }
    }

    // Handle model.name format (unquoted)
    if trimmed.contains('.') && !trimmed.starts_with('"') {
        if let Some((model_part, name_part)) = trimmed.split_once('.') {
            return (
                normalize_identifier(model_part),
                normalize_identifier(name_part),
            );
        }
    }

    // No model qualifier, use default
    (default_model.to_string(), normalize_identifier(trimmed))
}
