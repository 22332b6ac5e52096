//! serde field adapters for [`WireEnum`] types
//!
//! Shaped for `#[serde(with = "datakit::codec::wire")]` on `Option` fields,
//! delegating to the type's cached [`EnumKeyCodec`](super::EnumKeyCodec).
//! This is the registration point into the JSON framework: any field
//! annotated this way reads and writes through the wire-key tables,
//! including the unknown-value fallback.
//!
//! # Examples
//!
//! ```
//! use std::sync::OnceLock;
//!
//! use datakit::codec::{EnumKeyCodec, WireEnum, WireVariant};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! impl WireEnum for Level {
//!     const VARIANTS: &'static [WireVariant<Level>] = &[
//!         WireVariant::new(Level::Low, "low"),
//!         WireVariant::new(Level::High, "high"),
//!     ];
//!
//!     fn codec() -> &'static EnumKeyCodec<Level> {
//!         static CODEC: OnceLock<EnumKeyCodec<Level>> = OnceLock::new();
//!         CODEC.get_or_init(EnumKeyCodec::new)
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Alert {
//!     #[serde(with = "datakit::codec::wire", default)]
//!     level: Option<Level>,
//! }
//!
//! let alert: Alert = serde_json::from_str(r#"{"level":"high"}"#).unwrap();
//! assert_eq!(alert.level, Some(Level::High));
//! ```

use serde::{Deserializer, Serializer};

use super::enum_key::WireEnum;

/// Serialize an optional wire enum through its type's codec.
pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireEnum,
    S: Serializer,
{
    T::codec().write_value(serializer, *value)
}

/// Deserialize an optional wire enum through its type's codec.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: WireEnum,
    D: Deserializer<'de>,
{
    T::codec().read_value(deserializer)
}
