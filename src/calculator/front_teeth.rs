use crate::models::gearing::FrontTeeth;

use super::CalculationError;

/// Parses the front chainring text entered by the rider.
///
/// Leading and trailing whitespace is ignored and a leading `+` is accepted.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidFrontTeeth`] for empty text, anything
/// that is not a whole number, and whole numbers below one.
pub fn parse_front_teeth(text: &str) -> Result<FrontTeeth, CalculationError> {
    text.trim()
        .parse::<u32>()
        .ok()
        .and_then(|teeth| FrontTeeth::new(teeth).ok())
        .ok_or_else(|| CalculationError::InvalidFrontTeeth {
            input: text.to_owned(),
        })
}
