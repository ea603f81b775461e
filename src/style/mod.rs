//! Style keys, values and the attribute mapping.
//!
//! - [`StyleKey`]: a styling dimension (foreground color, paragraph style, ...)
//! - [`StyleValue`]: the closed set of value shapes a key can hold
//! - [`Attributes`]: the key-to-value mapping every component exchanges

mod attributes;
mod key;
mod value;

pub use attributes::Attributes;
pub use key::StyleKey;
pub use value::{LineStyle, StyleValue};
