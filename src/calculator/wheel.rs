use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::Length, length::inch};

use crate::models::gearing::{WheelDiameter, WheelSize};

use super::{CalculationError, render::round_to_hundredths};

/// Supplies a custom wheel diameter, in inches, when the rider picks "Other".
///
/// Returning `None` means the rider cancelled the prompt.
/// Any `FnMut() -> Option<f64>` closure is a prompt.
pub trait CustomWheelPrompt {
    fn custom_diameter(&mut self) -> Option<f64>;
}

impl<F> CustomWheelPrompt for F
where
    F: FnMut() -> Option<f64>,
{
    fn custom_diameter(&mut self) -> Option<f64> {
        self()
    }
}

/// Wheel size entries offered to the rider, in dropdown order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WheelSelection {
    Inches20,
    Inches24,
    Inches26,
    Inches27_5,
    #[default]
    Road700C,
    Other,
}

impl WheelSelection {
    /// Every entry, in dropdown order.
    pub const ALL: [Self; 6] = [
        Self::Inches20,
        Self::Inches24,
        Self::Inches26,
        Self::Inches27_5,
        Self::Road700C,
        Self::Other,
    ];

    /// Text shown for this entry.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inches20 => "20 inches",
            Self::Inches24 => "24 inches",
            Self::Inches26 => "26 inches",
            Self::Inches27_5 => "27.5 inches",
            Self::Road700C => "700C (~29 inches)",
            Self::Other => "Other",
        }
    }

    /// Diameter in inches for the fixed entries, `None` for [`WheelSelection::Other`].
    #[must_use]
    pub fn predefined_diameter(self) -> Option<f64> {
        match self {
            Self::Inches20 => Some(20.0),
            Self::Inches24 => Some(24.0),
            Self::Inches26 => Some(26.0),
            Self::Inches27_5 => Some(27.5),
            // 700C rims are close to, but not exactly, 29 inches with a tyre.
            Self::Road700C => Some(29.0),
            Self::Other => None,
        }
    }

    /// Resolves this entry to a [`WheelSize`], asking `prompt` for "Other".
    ///
    /// A custom diameter is rounded to two decimals before it is range checked.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::WheelSizeCancelled`] if the prompt was cancelled.
    /// - [`CalculationError::InvalidWheelSize`] if the custom diameter is
    ///   outside 10 to 60 inches.
    pub fn resolve(
        self,
        prompt: &mut impl CustomWheelPrompt,
    ) -> Result<WheelSize, CalculationError> {
        if let Some(inches) = self.predefined_diameter() {
            let diameter = WheelDiameter::new_unchecked(Length::new::<inch>(inches));
            return Ok(WheelSize::Predefined(diameter));
        }

        let Some(entered) = prompt.custom_diameter() else {
            tracing::info!("custom wheel size prompt cancelled");
            return Err(CalculationError::WheelSizeCancelled);
        };

        let inches = round_to_hundredths(entered);
        WheelSize::custom(Length::new::<inch>(inches)).map_err(|source| {
            tracing::warn!(inches, %source, "rejected custom wheel diameter");
            CalculationError::InvalidWheelSize { inches, source }
        })
    }
}

impl fmt::Display for WheelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text names no [`WheelSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wheel size {label:?}, expected one of: {expected}")]
pub struct ParseWheelSelectionError {
    label: String,
    expected: String,
}

/// Parses a dropdown label.
///
/// Besides the exact labels, the bare diameters (`"20"`, `"27.5"`, `"29"`),
/// `"700c"`, and `"other"` are accepted, ignoring case.
impl FromStr for WheelSelection {
    type Err = ParseWheelSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some(found) = Self::ALL.into_iter().find(|entry| entry.label() == text) {
            return Ok(found);
        }

        match text.to_ascii_lowercase().as_str() {
            "20" => Ok(Self::Inches20),
            "24" => Ok(Self::Inches24),
            "26" => Ok(Self::Inches26),
            "27.5" | "650b" => Ok(Self::Inches27_5),
            "29" | "700c" => Ok(Self::Road700C),
            "other" => Ok(Self::Other),
            _ => Err(ParseWheelSelectionError {
                label: s.to_owned(),
                expected: Self::ALL
                    .iter()
                    .map(|entry| format!("{:?}", entry.label()))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::constraint::ConstraintError;

    fn never_asked() -> Option<f64> {
        panic!("the prompt should only run for \"Other\"")
    }

    #[test]
    fn labels_round_trip() {
        for entry in WheelSelection::ALL {
            assert_eq!(entry.label().parse::<WheelSelection>(), Ok(entry));
            assert_eq!(entry.to_string(), entry.label());
        }
        assert_eq!(WheelSelection::default(), WheelSelection::Road700C);
    }

    #[test]
    fn shorthand_labels() {
        assert_eq!("700C".parse(), Ok(WheelSelection::Road700C));
        assert_eq!(" 27.5 ".parse(), Ok(WheelSelection::Inches27_5));
        assert_eq!("other".parse(), Ok(WheelSelection::Other));
        assert!("28 inches".parse::<WheelSelection>().is_err());
    }

    #[test]
    fn predefined_sizes() {
        let diameters: Vec<Option<f64>> = WheelSelection::ALL
            .iter()
            .map(|entry| entry.predefined_diameter())
            .collect();
        assert_eq!(
            diameters,
            vec![Some(20.0), Some(24.0), Some(26.0), Some(27.5), Some(29.0), None]
        );
        for inches in diameters.into_iter().flatten() {
            assert!(WheelDiameter::new::<inch>(inches).is_ok());
        }

        let size = WheelSelection::Inches27_5
            .resolve(&mut never_asked)
            .unwrap();
        assert!(!size.is_custom());
        assert_relative_eq!(size.diameter().get::<inch>(), 27.5, epsilon = 1e-12);
    }

    #[test]
    fn other_uses_prompt() {
        let size = WheelSelection::Other
            .resolve(&mut || Some(28.004))
            .unwrap();
        assert!(size.is_custom());
        assert_relative_eq!(size.diameter().get::<inch>(), 28.0, epsilon = 1e-12);
    }

    #[test]
    fn other_cancelled() {
        assert_eq!(
            WheelSelection::Other.resolve(&mut || None::<f64>),
            Err(CalculationError::WheelSizeCancelled)
        );
    }

    #[test]
    fn other_out_of_range() {
        assert_eq!(
            WheelSelection::Other.resolve(&mut || Some(9.0)),
            Err(CalculationError::InvalidWheelSize {
                inches: 9.0,
                source: ConstraintError::BelowMinimum
            })
        );
        assert!(matches!(
            WheelSelection::Other.resolve(&mut || Some(72.5)),
            Err(CalculationError::InvalidWheelSize {
                source: ConstraintError::AboveMaximum,
                ..
            })
        ));
        // Rounds onto the upper bound before the range check.
        assert!(WheelSelection::Other.resolve(&mut || Some(60.004)).is_ok());
    }
}
