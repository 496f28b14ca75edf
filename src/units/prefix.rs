use crate::units::{BIG_IEC_UNITS, BIG_SI_UNITS, SMALL_SI_UNITS, UNITS_SIZE};

/// Maps a scaling exponent to its unit prefix.
///
/// Positive exponents select from the big tables (`iec` picks `Ki`, `Mi`, ...
/// over `k`, `M`, ...), negative ones from the small SI table. IEC defines no
/// binary submultiples, so `iec` is ignored for negative exponents. Zero and
/// out-of-table exponents yield an empty prefix.
pub fn exponent_to_prefix(exponent: i64, iec: bool) -> &'static str {
    if exponent == 0 {
        return "";
    }

    let index = if exponent > 0 {
        exponent - 1
    } else {
        // i64::MIN cannot be negated
        match exponent.checked_neg() {
            Some(n) => n - 1,
            None => return "",
        }
    };

    let index = match usize::try_from(index) {
        Ok(i) if i < UNITS_SIZE => i,
        _ => return "",
    };

    let table = match (exponent > 0, iec) {
        (true, true) => &BIG_IEC_UNITS,
        (true, false) => &BIG_SI_UNITS,
        (false, _) => &SMALL_SI_UNITS,
    };

    table[index]
}
