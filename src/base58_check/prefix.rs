//! Version bytes identifying what a Base58Check payload is.
//!
//! The codec never interprets these: a prefix is an opaque byte string that
//! is prepended on encode and split off again on decode.

use crate::hex;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Prefix {
    name: Cow<'static, str>,
    #[serde(with = "hex_bytes")]
    bytes: Cow<'static, [u8]>,
}

impl Prefix {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            bytes: Cow::Borrowed(bytes),
        }
    }

    pub fn owned(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            bytes: Cow::Owned(bytes.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Prefix {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, hex::encode(&self.bytes))
    }
}

/// Pay-to-public-key-hash address.
pub const PUBLIC_KEY_HASH: Prefix = Prefix::new("public-key-hash", &[0x00]);
/// Wallet import format private key.
pub const PRIVATE_KEY: Prefix = Prefix::new("private-key", &[0x80]);
/// BIP32 `xpub`.
pub const EXTENDED_PUBLIC_KEY: Prefix = Prefix::new("extended-public-key", &[0x04, 0x88, 0xb2, 0x1e]);
/// BIP32 `xprv`.
pub const EXTENDED_PRIVATE_KEY: Prefix = Prefix::new("extended-private-key", &[0x04, 0x88, 0xad, 0xe4]);

pub const BITCOIN: &[Prefix] = &[PUBLIC_KEY_HASH, PRIVATE_KEY, EXTENDED_PUBLIC_KEY, EXTENDED_PRIVATE_KEY];

mod hex_bytes {
    use crate::hex;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S: Serializer>(bytes: &Cow<'static, [u8]>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cow<'static, [u8]>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(&text).map(Cow::Owned).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(EXTENDED_PUBLIC_KEY.to_string(), "extended-public-key (0488b21e)");
        assert_eq!(PUBLIC_KEY_HASH.to_string(), "public-key-hash (00)");
    }

    #[test]
    fn json() {
        let json = serde_json::to_string(&PRIVATE_KEY).unwrap();
        assert_eq!(json, r#"{"name":"private-key","bytes":"80"}"#);
        let prefix: Prefix = serde_json::from_str(r#"{"name":"testnet","bytes":"6F"}"#).unwrap();
        assert_eq!(prefix, Prefix::owned("testnet", vec![0x6f]));
        assert!(serde_json::from_str::<Prefix>(r#"{"name":"bad","bytes":"6"}"#).is_err());
    }

    #[test]
    fn equality_ignores_ownership() {
        assert_eq!(Prefix::owned("private-key", vec![0x80]), PRIVATE_KEY);
    }
}
