pub mod enum_key;
pub mod wire;

pub use enum_key::*;
