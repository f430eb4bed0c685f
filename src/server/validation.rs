use crate::server::response::AppError;

fn validate_field(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    Ok(())
}

/// Rejects blank form fields. Names, titles and descriptions all become path
/// segments in edit and delete links, and an empty segment matches no route.
pub fn validate_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    for (field, value) in fields {
        validate_field(field, value).map_err(AppError::bad_request)?;
    }
    Ok(())
}
