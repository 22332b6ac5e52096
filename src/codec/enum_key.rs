//! Enum wire-key mapping with alias and unknown-value fallback support
//!
//! Maps enum constants to and from their external string keys. Each enum
//! type supplies a static registration table ([`WireEnum::VARIANTS`]) naming
//! every constant's primary key and optional aliases; the codec builds its
//! lookup maps from that table once per type and caches them behind the
//! type's [`WireEnum::codec`] accessor.
//!
//! Unrecognized wire keys never abort a read: [`EnumKeyCodec::read_value`]
//! resolves them to the constant registered under [`UNDEFINED_KEY`], or to
//! `None` when the type declares no such constant. This protects readers
//! from wire-format evolution where one side adds enum values before the
//! other side updates.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serializer};

/// Reserved key marking a constant as the fallback target for unrecognized
/// input.
pub const UNDEFINED_KEY: &str = "UNDEFINED";

/// One row of an enum type's key registration table.
#[derive(Clone, Copy, Debug)]
pub struct WireVariant<T> {
    /// The enum constant itself.
    pub value: T,
    /// Primary wire key; the only key ever produced on serialization.
    pub name: &'static str,
    /// Additional keys accepted on deserialization.
    pub aliases: &'static [&'static str],
}

impl<T> WireVariant<T> {
    /// Create a table row with no aliases.
    pub const fn new(value: T, name: &'static str) -> Self {
        Self {
            value,
            name,
            aliases: &[],
        }
    }

    /// Create a table row with alternate accepted keys.
    pub const fn with_aliases(
        value: T,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            value,
            name,
            aliases,
        }
    }
}

/// Enum types that carry a wire-key registration table.
///
/// # Examples
///
/// ```
/// use std::sync::OnceLock;
///
/// use datakit::codec::{EnumKeyCodec, WireEnum, WireVariant, UNDEFINED_KEY};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Status {
///     Active,
///     Inactive,
///     Unknown,
/// }
///
/// impl WireEnum for Status {
///     const VARIANTS: &'static [WireVariant<Status>] = &[
///         WireVariant::new(Status::Active, "active"),
///         WireVariant::with_aliases(Status::Inactive, "inactive", &["disabled"]),
///         WireVariant::new(Status::Unknown, UNDEFINED_KEY),
///     ];
///
///     fn codec() -> &'static EnumKeyCodec<Status> {
///         static CODEC: OnceLock<EnumKeyCodec<Status>> = OnceLock::new();
///         CODEC.get_or_init(EnumKeyCodec::new)
///     }
/// }
///
/// let codec = Status::codec();
/// assert_eq!(codec.decode("disabled"), Some(Status::Inactive));
/// assert_eq!(codec.encode(Status::Inactive), Some("inactive"));
/// assert_eq!(codec.unknown_value(), Some(Status::Unknown));
/// ```
pub trait WireEnum: Copy + Eq + Hash + 'static {
    /// All constants, in declaration order.
    const VARIANTS: &'static [WireVariant<Self>];

    /// The cached per-type codec.
    ///
    /// Implementations hold the codec in a `OnceLock` static so the maps are
    /// built on first use and shared afterwards:
    ///
    /// ```ignore
    /// fn codec() -> &'static EnumKeyCodec<Self> {
    ///     static CODEC: OnceLock<EnumKeyCodec<Status>> = OnceLock::new();
    ///     CODEC.get_or_init(EnumKeyCodec::new)
    /// }
    /// ```
    fn codec() -> &'static EnumKeyCodec<Self>;
}

/// Bidirectional mapping between enum constants and their wire keys.
///
/// Immutable after construction; safe to share across threads.
pub struct EnumKeyCodec<T> {
    name_to_value: FxHashMap<&'static str, T>,
    value_to_name: FxHashMap<T, &'static str>,
    unknown: Option<T>,
}

impl<T: WireEnum> EnumKeyCodec<T> {
    /// Build the lookup maps from the type's registration table.
    ///
    /// Aliases are registered before the primary key of each constant. The
    /// constant registered under [`UNDEFINED_KEY`] (primary or alias)
    /// becomes the unknown-value fallback.
    ///
    /// # Panics
    ///
    /// Panics if two distinct constants register the same key. A silent
    /// overwrite would leave one constant unreachable on the read path.
    pub fn new() -> Self {
        let mut name_to_value = FxHashMap::default();
        let mut value_to_name = FxHashMap::default();

        for variant in T::VARIANTS {
            for alias in variant.aliases.iter().copied() {
                register(&mut name_to_value, alias, variant.value);
            }
            register(&mut name_to_value, variant.name, variant.value);
            value_to_name.insert(variant.value, variant.name);
        }

        let unknown = name_to_value.get(UNDEFINED_KEY).copied();

        Self {
            name_to_value,
            value_to_name,
            unknown,
        }
    }

    /// Look up the constant registered for `key`.
    ///
    /// Accepts primary keys and aliases alike; returns `None` for
    /// unregistered keys without consulting the fallback.
    pub fn decode(&self, key: &str) -> Option<T> {
        self.name_to_value.get(key).copied()
    }

    /// Decode each key independently, preserving order and length.
    ///
    /// Unresolved keys stay in place as explicit `None` entries rather than
    /// being dropped.
    pub fn decode_all<I>(&self, keys: I) -> Vec<Option<T>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| self.decode(key.as_ref()))
            .collect()
    }

    /// The canonical key for `value`: its primary key, never an alias.
    pub fn encode(&self, value: T) -> Option<&'static str> {
        self.value_to_name.get(&value).copied()
    }

    /// Encode each constant independently, preserving order and length.
    pub fn encode_all<I>(&self, values: I) -> Vec<Option<&'static str>>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|value| self.encode(value)).collect()
    }

    /// The constant registered under [`UNDEFINED_KEY`], if any.
    pub fn unknown_value(&self) -> Option<T> {
        self.unknown
    }

    /// Read one JSON scalar.
    ///
    /// JSON null becomes `None` without consulting the fallback. A string
    /// resolves through [`decode`](Self::decode), degrading to the
    /// unknown-value constant when unrecognized. An unknown wire key is
    /// not an error.
    pub fn read_value<'de, D>(&self, deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key: Option<String> = Option::deserialize(deserializer)?;
        Ok(key.and_then(|key| self.decode(&key).or(self.unknown)))
    }

    /// Write `None` as JSON null, otherwise the canonical key as a string.
    ///
    /// A constant missing from the registration table also serializes as
    /// null; a reader cannot distinguish it from an absent value.
    pub fn write_value<S>(&self, serializer: S, value: Option<T>) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.and_then(|value| self.encode(value)) {
            Some(key) => serializer.serialize_str(key),
            None => serializer.serialize_none(),
        }
    }
}

impl<T: WireEnum> Default for EnumKeyCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn register<T: Copy + Eq>(map: &mut FxHashMap<&'static str, T>, key: &'static str, value: T) {
    if let Some(existing) = map.insert(key, value) {
        if existing != value {
            panic!(
                "duplicate wire key {key:?} in {}",
                std::any::type_name::<T>()
            );
        }
    }
}
