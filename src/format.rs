use crate::{
    scale::to_exponent_and_mantissa,
    units::{prefix::exponent_to_prefix, system::UnitSystem},
};

/// Threshold precision used by [`human_readable_number`].
pub const DEFAULT_PRECISION: i32 = 1;

/// Formats `value` as a mantissa followed by a unit prefix, e.g. `1.5k` or
/// `2Mi`.
pub fn human_readable_number(value: f64, one_k: UnitSystem) -> String {
    to_string_fully_specified(value, DEFAULT_PRECISION, one_k)
}

/// Like [`human_readable_number`] with an explicit threshold `precision`.
///
/// `precision` decides when a value is scaled, not how many digits the
/// mantissa keeps.
pub fn to_string_fully_specified(value: f64, precision: i32, one_k: UnitSystem) -> String {
    let scaled = to_exponent_and_mantissa(value, precision, one_k.base());
    scaled.mantissa + exponent_to_prefix(scaled.exponent, one_k.is_iec())
}
