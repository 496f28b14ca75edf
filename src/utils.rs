pub mod macros;
pub mod render;
pub mod split;
