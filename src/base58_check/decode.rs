use super::{compute_checksum, Prefix, CHECKSUM_LEN};
use crate::{base58, configuration::Configuration, hex};
use log::{debug, trace};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize, available: usize },
    InvalidCharacter { character: u8, index: usize },
    InputTooShort { length: usize, minimum: usize },
    ChecksumMismatch { checksum: [u8; CHECKSUM_LEN], expected_checksum: [u8; CHECKSUM_LEN] },
    EmptyPrefix,
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::BufferTooSmall { required, available } => Error::BufferTooSmall { required, available },
            base58::decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => {
                fmt::Display::fmt(&base58::decode::Error::InvalidCharacter { character: *character, index: *index }, f)
            }
            Error::BufferTooSmall { required, available } => {
                fmt::Display::fmt(&base58::decode::Error::BufferTooSmall { required: *required, available: *available }, f)
            }
            Error::InputTooShort { length, minimum } => {
                write!(f, "Input too short ({} bytes decoded, at least {} required)", length, minimum)
            }
            Error::ChecksumMismatch {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                hex::encode(checksum),
                hex::encode(expected_checksum)
            ),
            Error::EmptyPrefix => write!(f, "Prefix length must be at least 1"),
        }
    }
}

/// A verified Base58Check string split into its prefix and payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Decoded {
    prefix: Vec<u8>,
    payload: Vec<u8>,
}

impl Decoded {
    fn split(mut body: Vec<u8>, prefix_len: usize) -> Self {
        let payload = body.split_off(prefix_len);
        Self { prefix: body, payload }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn has_prefix(&self, prefix: &Prefix) -> bool {
        self.prefix == prefix.bytes()
    }

    /// `(payload, prefix)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.payload, self.prefix)
    }
}

fn verify_checksum(decoded: &[u8], minimum: usize) -> Result<usize, Error> {
    if decoded.len() < minimum {
        return Err(Error::InputTooShort {
            length: decoded.len(),
            minimum,
        });
    }
    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected_checksum = compute_checksum(body);
    if checksum != &expected_checksum[..] {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(checksum);
        debug!("checksum mismatch: {} instead of {}", hex::encode(actual), hex::encode(expected_checksum));
        return Err(Error::ChecksumMismatch {
            checksum: actual,
            expected_checksum,
        });
    }
    Ok(body.len())
}

#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    configuration: &'a Configuration,
}

impl<'a> Decoder<'a> {
    pub const fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut decoded = base58::decode(input)?;
        let len = verify_checksum(&decoded, CHECKSUM_LEN)?;
        decoded.truncate(len);
        Ok(decoded)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let len = base58::decode_into(input, output)?;
        verify_checksum(&output.as_mut()[..len], CHECKSUM_LEN)
    }

    pub fn decode_with_prefix(&self, input: impl AsRef<[u8]>) -> Result<Decoded, Error> {
        let mut body = base58::decode(input)?;
        let len = verify_checksum(&body, self.configuration.min_prefix_len() + CHECKSUM_LEN)?;
        body.truncate(len);
        let prefix_len = match self.configuration.match_prefix(&body) {
            Some(prefix) => {
                trace!("matched prefix {}", prefix);
                prefix.len()
            }
            None => {
                let prefix_len = self.configuration.fallback_prefix_len();
                debug!("no known prefix, splitting off {} byte(s)", prefix_len);
                if body.len() < prefix_len {
                    return Err(Error::InputTooShort {
                        length: body.len() + CHECKSUM_LEN,
                        minimum: prefix_len + CHECKSUM_LEN,
                    });
                }
                prefix_len
            }
        };
        Ok(Decoded::split(body, prefix_len))
    }

    pub fn decode_with_prefix_len(&self, input: impl AsRef<[u8]>, prefix_len: usize) -> Result<Decoded, Error> {
        if prefix_len == 0 {
            return Err(Error::EmptyPrefix);
        }
        let mut decoded = base58::decode(input)?;
        let len = verify_checksum(&decoded, prefix_len.saturating_add(CHECKSUM_LEN))?;
        decoded.truncate(len);
        Ok(Decoded::split(decoded, prefix_len))
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&Configuration::BITCOIN);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_with_prefix(input: impl AsRef<[u8]>) -> Result<Decoded, Error> {
    Decoder::default().decode_with_prefix(input)
}

pub fn decode_with_prefix_len(input: impl AsRef<[u8]>, prefix_len: usize) -> Result<Decoded, Error> {
    Decoder::default().decode_with_prefix_len(input, prefix_len)
}

/// [`decode_with_prefix`] returning `(payload, prefix)` as lowercase hex text.
pub fn decode_to_hex(input: impl AsRef<[u8]>) -> Result<(String, String), Error> {
    let decoded = decode_with_prefix(input)?;
    Ok((hex::encode(decoded.payload()), hex::encode(decoded.prefix())))
}
