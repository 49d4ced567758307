//! Primitive readings of graph values.
//!
//! Each value type allows exactly one reading: nodes and graphs read as text,
//! edges read as a number. The other reading fails with
//! [`GraphError::InvalidNumericConversion`](crate::error::GraphError).

use crate::error::Result;

pub trait Primitive {
    /// Read the value as display text
    fn to_text(&self) -> Result<String>;

    /// Read the value as a number
    fn to_number(&self) -> Result<f64>;
}
