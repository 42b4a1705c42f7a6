use shared::{
    domain::{ExamResultMap, FormState},
    error::ValidationError,
};

/// Builds the score map from the non-empty form entries.
pub fn collect(form: &FormState) -> Result<ExamResultMap, ValidationError> {
    let mut results = ExamResultMap::new();
    for (name, value) in form.entries() {
        if value.is_empty() {
            continue;
        }
        results.insert_raw(name, value)?;
    }

    if results.is_empty() {
        return Err(ValidationError::NoResults);
    }
    Ok(results)
}
