pub mod prefix;
pub mod system;

// kilo, Mega, Giga, Tera, Peta, Exa, Zetta, Yotta
const K: &str = "k";
const M: &str = "M";
const G: &str = "G";
const T: &str = "T";
const P: &str = "P";
const E: &str = "E";
const Z: &str = "Z";
const Y: &str = "Y";

// Kibi, Mebi, Gibi, Tebi, Pebi, Exbi, Zebi, Yobi
const KI: &str = "Ki";
const MI: &str = "Mi";
const GI: &str = "Gi";
const TI: &str = "Ti";
const PI: &str = "Pi";
const EI: &str = "Ei";
const ZI: &str = "Zi";
const YI: &str = "Yi";

// milli, micro, nano, pico, femto, atto, zepto, yocto
const MILLI: &str = "m";
const MICRO: &str = "u";
const NANO: &str = "n";
const PICO: &str = "p";
const FEMTO: &str = "f";
const ATTO: &str = "a";
const ZEPTO: &str = "z";
const YOCTO: &str = "y";

pub const BIG_SI_UNITS: [&str; 8] = [K, M, G, T, P, E, Z, Y];
pub const BIG_IEC_UNITS: [&str; 8] = [KI, MI, GI, TI, PI, EI, ZI, YI];
pub const SMALL_SI_UNITS: [&str; 8] = [MILLI, MICRO, NANO, PICO, FEMTO, ATTO, ZEPTO, YOCTO];

/// Number of scaling steps available in either direction.
pub const UNITS_SIZE: usize = BIG_SI_UNITS.len();

const _: () = assert!(BIG_IEC_UNITS.len() == UNITS_SIZE);
const _: () = assert!(SMALL_SI_UNITS.len() == UNITS_SIZE);
