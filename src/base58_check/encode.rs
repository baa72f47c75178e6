use super::compute_checksum;
use crate::{base58, hex, Error};

pub use crate::base58::encode::Error as EncodeError;

fn extend_input(body: impl AsRef<[u8]>) -> Vec<u8> {
    let mut input = body.as_ref().to_vec();
    let checksum = compute_checksum(&input);
    input.extend_from_slice(&checksum);
    input
}

fn join(prefix: impl AsRef<[u8]>, payload: impl AsRef<[u8]>) -> Vec<u8> {
    let mut body = prefix.as_ref().to_vec();
    body.extend_from_slice(payload.as_ref());
    body
}

/// Checksums and encodes `body` as given, without separating any prefix.
pub fn encode(body: impl AsRef<[u8]>) -> String {
    base58::encode(extend_input(body))
}

pub fn encode_with_prefix(prefix: impl AsRef<[u8]>, payload: impl AsRef<[u8]>) -> String {
    encode(join(prefix, payload))
}

pub fn encode_into(body: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, EncodeError> {
    base58::encode_into(extend_input(body), output)
}

/// Same as [`encode_with_prefix`] with the payload given as hex text.
pub fn encode_hex(prefix: impl AsRef<[u8]>, payload: &str) -> Result<String, Error> {
    let payload = hex::decode(payload)?;
    Ok(encode_with_prefix(prefix, payload))
}
