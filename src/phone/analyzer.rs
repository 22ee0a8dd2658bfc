use crate::domain::PhoneReport;
use crate::geo::country_centroid;
use phonenumber::{Mode, country};
use thiserror::Error;

/// Runs the number through the phone metadata library and resolves the
/// region's centroid. Format fields are filled in for valid numbers only.
pub fn analyze(raw: &str, region_hint: Option<country::Id>) -> Result<PhoneReport, AnalyzeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AnalyzeError::EmptyNumber);
    }

    let number = phonenumber::parse(region_hint, raw).map_err(|e| AnalyzeError::Unparseable(e.to_string()))?;
    let valid = phonenumber::is_valid(&number);
    let region = number.country().id().map(|id| id.as_ref().to_string());

    Ok(PhoneReport {
        raw: raw.to_string(),
        valid,
        country_code: number.code().value().into(),
        national_number: number.national().value(),
        centroid: region.as_deref().and_then(country_centroid),
        region,
        e164: valid.then(|| number.format().mode(Mode::E164).to_string()),
        national: valid.then(|| number.format().mode(Mode::National).to_string()),
        international: valid.then(|| number.format().mode(Mode::International).to_string()),
        rfc3966: valid.then(|| number.format().mode(Mode::Rfc3966).to_string()),
    })
}

#[derive(Error, Debug, PartialEq)]
pub enum AnalyzeError {
    #[error("no number was given")]
    EmptyNumber,
    #[error("could not interpret the number: {0}")]
    Unparseable(String),
}
