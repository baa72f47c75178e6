mod checksum;
pub mod decode;
pub mod encode;
pub mod prefix;

pub use checksum::{compute_checksum, CHECKSUM_LEN};
pub use decode::{decode, decode_into, decode_to_hex, decode_with_prefix, decode_with_prefix_len, Decoded, Decoder};
pub use encode::{encode, encode_hex, encode_into, encode_with_prefix};
pub use prefix::Prefix;
