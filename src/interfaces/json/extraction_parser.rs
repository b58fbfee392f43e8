use crate::domain::bill::ExtractedBill;
use crate::error::{Result, SplitError};
use serde_json::Value;

/// Finds the JSON object embedded in an extraction response.
///
/// The object spans from the first `{` to the last `}` so any prose the
/// service wraps around it is dropped.
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start) = response.find('{')
        && let Some(end) = response.rfind('}')
        && end > start
    {
        return Ok(&response[start..=end]);
    }
    Err(SplitError::Extraction(
        "could not find JSON data in response".to_string(),
    ))
}

/// Parses an extraction response into a bill.
///
/// Accepts the bare bill object, text with the object embedded in it, or an
/// envelope of the form `{"content": "<text>"}`. Bills with amounts outside
/// the supported range are rejected.
pub fn parse_extraction(response: &str) -> Result<ExtractedBill> {
    let value: Value = serde_json::from_str(extract_json(response)?)?;

    if value.get("items").is_none()
        && let Some(content) = value.get("content").and_then(Value::as_str)
    {
        return parse_extraction(content);
    }

    let bill: ExtractedBill = serde_json::from_value(value)?;
    bill.validate()?;
    Ok(bill)
}
