//! Wire-format tests for the enum key codec
//!
//! Exercises whole JSON documents through serde_json, including the
//! unknown-value fallback and bulk key resolution.

use std::sync::OnceLock;

use datakit::codec::{EnumKeyCodec, WireEnum, WireVariant, UNDEFINED_KEY};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Status {
    Active,
    Inactive,
    Unknown,
}

impl WireEnum for Status {
    const VARIANTS: &'static [WireVariant<Status>] = &[
        WireVariant::new(Status::Active, "active"),
        WireVariant::with_aliases(Status::Inactive, "inactive", &["disabled"]),
        WireVariant::new(Status::Unknown, UNDEFINED_KEY),
    ];

    fn codec() -> &'static EnumKeyCodec<Status> {
        static CODEC: OnceLock<EnumKeyCodec<Status>> = OnceLock::new();
        CODEC.get_or_init(EnumKeyCodec::new)
    }
}

// A type with no UNDEFINED constant: unrecognized input must stay absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Channel {
    Email,
    Sms,
}

impl WireEnum for Channel {
    const VARIANTS: &'static [WireVariant<Channel>] = &[
        WireVariant::new(Channel::Email, "email"),
        WireVariant::new(Channel::Sms, "sms"),
    ];

    fn codec() -> &'static EnumKeyCodec<Channel> {
        static CODEC: OnceLock<EnumKeyCodec<Channel>> = OnceLock::new();
        CODEC.get_or_init(EnumKeyCodec::new)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Device {
    name: String,
    #[serde(with = "datakit::codec::wire", default)]
    status: Option<Status>,
    #[serde(with = "datakit::codec::wire", default)]
    channel: Option<Channel>,
}

#[test]
fn scenario_alias_resolves_to_constant() {
    assert_eq!(Status::codec().decode("disabled"), Some(Status::Inactive));
}

#[test]
fn scenario_unrecognized_key_reads_as_fallback() {
    let device: Device =
        serde_json::from_str(r#"{"name":"printer","status":"retired","channel":null}"#).unwrap();
    assert_eq!(device.status, Some(Status::Unknown));
}

#[test]
fn scenario_write_emits_primary_key() {
    let json = serde_json::to_string(&Device {
        name: "printer".to_string(),
        status: Some(Status::Active),
        channel: None,
    })
    .unwrap();
    assert_eq!(
        json,
        r#"{"name":"printer","status":"active","channel":null}"#
    );
}

#[test]
fn null_scalar_reads_as_none_not_fallback() {
    let device: Device =
        serde_json::from_str(r#"{"name":"printer","status":null,"channel":null}"#).unwrap();
    assert_eq!(device.status, None);
}

#[test]
fn unrecognized_key_without_fallback_reads_as_none() {
    let device: Device =
        serde_json::from_str(r#"{"name":"printer","status":null,"channel":"fax"}"#).unwrap();
    assert_eq!(device.channel, None);
}

#[test]
fn document_roundtrip_every_constant() {
    for variant in Status::VARIANTS {
        let device = Device {
            name: "printer".to_string(),
            status: Some(variant.value),
            channel: Some(Channel::Email),
        };
        let json = serde_json::to_string(&device).unwrap();
        let back: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}

#[test]
fn bulk_resolution_from_json_array() {
    let keys: Vec<String> =
        serde_json::from_str(r#"["active","retired","disabled","UNDEFINED"]"#).unwrap();

    let values = Status::codec().decode_all(&keys);

    assert_eq!(values.len(), keys.len());
    assert_eq!(
        values,
        vec![
            Some(Status::Active),
            None,
            Some(Status::Inactive),
            Some(Status::Unknown),
        ]
    );
}

#[test]
fn bulk_encode_skips_nothing() {
    let keys = Status::codec().encode_all([Status::Inactive, Status::Unknown, Status::Active]);
    assert_eq!(
        keys,
        vec![Some("inactive"), Some(UNDEFINED_KEY), Some("active")]
    );
}

#[test]
fn codec_instance_is_cached_per_type() {
    let first = Status::codec() as *const EnumKeyCodec<Status>;
    let second = Status::codec() as *const EnumKeyCodec<Status>;
    assert_eq!(first, second);
}

#[test]
fn concurrent_reads_share_one_codec() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let codec = Status::codec();
                assert_eq!(codec.decode("disabled"), Some(Status::Inactive));
                assert_eq!(codec.encode(Status::Active), Some("active"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
