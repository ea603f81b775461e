//! Color parsing errors.

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input had a digit count other than 3, 6 or 8
    InvalidLength { input: String },
    /// A character outside `0-9a-fA-F` was found
    InvalidDigit { input: String, digit: char },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::InvalidLength { input } => {
                write!(
                    f,
                    "color '{}' must have 3, 6 or 8 hex digits",
                    input
                )
            }
            ColorParseError::InvalidDigit { input, digit } => {
                write!(f, "color '{}' contains non-hex digit '{}'", input, digit)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
