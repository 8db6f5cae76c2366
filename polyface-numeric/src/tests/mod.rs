//! Unit tests for the numeric types and the operator library

use crate::NUMBER;
use polyface_types::TypedValue;


pub(crate) fn num(value: f64) -> TypedValue {
    NUMBER.from_value(value)
}
