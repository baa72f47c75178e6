//! Base58 and Base58Check encoding as used for Bitcoin addresses, WIF private
//! keys and BIP32 extended keys.
//!
//! ```
//! use bitcoin_base58::base58_check::{self, prefix::PUBLIC_KEY_HASH};
//!
//! let encoded = base58_check::encode_with_prefix(PUBLIC_KEY_HASH, [0u8; 20]);
//! assert_eq!(encoded, "1111111111111111111114oLvT2");
//!
//! let decoded = base58_check::decode_with_prefix(&encoded).unwrap();
//! assert!(decoded.has_prefix(&PUBLIC_KEY_HASH));
//! assert_eq!(decoded.payload(), [0u8; 20]);
//! ```

pub mod base58;
pub mod base58_check;
pub mod configuration;
pub mod error;
pub mod hex;

pub use self::{configuration::Configuration, error::Error};
