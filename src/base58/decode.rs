use super::{alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall { required: usize, available: usize },
    InvalidCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required, available } => {
                write!(f, "Output buffer too small ({} bytes required, {} available)", required, available)
            }
            Error::InvalidCharacter { character, index } => {
                write!(f, "Invalid character ")?;
                alphabet::display_character(f, *character)?;
                write!(f, " at index {}", index)
            }
        }
    }
}

impl From<alphabet::InvalidCharacter> for Error {
    fn from(error: alphabet::InvalidCharacter) -> Self {
        Error::InvalidCharacter {
            character: error.character,
            index: error.index,
        }
    }
}

fn bytes(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::with_capacity(input.len());

    for (index, &character) in input.iter().enumerate() {
        let mut carry = ALPHABET.decode(character, index)? as usize;

        for value in &mut bytes {
            carry += (*value as usize) * 58;
            *value = (carry & 0xFF) as u8;
            carry >>= 8;
        }

        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let zero = ALPHABET.zero();
    bytes.extend(input.iter().take_while(|&&character| character == zero).map(|_| 0));
    Ok(bytes)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let mut output = bytes(input.as_ref())?;
    output.reverse();
    Ok(output)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let output = output.as_mut();
    let bytes = bytes(input.as_ref())?;
    let available = output.len();
    let output = output.get_mut(..bytes.len()).ok_or(Error::BufferTooSmall {
        required: bytes.len(),
        available,
    })?;
    for (value, &byte) in output.iter_mut().zip(bytes.iter().rev()) {
        *value = byte;
    }
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ])
        );
        assert_eq!(
            super::decode("EJDM8drfXA6uyA"),
            Ok(vec![0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
        );
        assert_eq!(super::decode("1111111111"), Ok(vec![0x00; 10]));
        assert_eq!(super::decode("1112"), Ok(vec![0x00, 0x00, 0x00, 0x01]));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(super::decode("0"), Err(Error::InvalidCharacter { character: b'0', index: 0 }));
        assert_eq!(super::decode("1O"), Err(Error::InvalidCharacter { character: b'O', index: 1 }));
        assert_eq!(super::decode("abcI"), Err(Error::InvalidCharacter { character: b'I', index: 3 }));
        assert_eq!(super::decode("2gl"), Err(Error::InvalidCharacter { character: b'l', index: 2 }));
        assert_eq!(super::decode("2g "), Err(Error::InvalidCharacter { character: b' ', index: 2 }));
        assert_eq!(super::decode("é"), Err(Error::InvalidCharacter { character: 0xc3, index: 0 }));
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidCharacter { character: b'0', index: 3 }.to_string(),
            "Invalid character '0' at index 3"
        );
        assert_eq!(
            Error::InvalidCharacter { character: 0xc3, index: 0 }.to_string(),
            "Invalid character 0xc3 at index 0"
        );
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 8];
        let len = super::decode_into("11Rt5zm", &mut output);
        assert_eq!(len, Ok(6));
        assert_eq!(&output[..6], [0x00, 0x00, 0x10, 0xc8, 0x51, 0x1e]);

        let mut output = [0u8; 3];
        assert_eq!(
            super::decode_into("Rt5zm", &mut output),
            Err(Error::BufferTooSmall { required: 4, available: 3 })
        );
    }

    #[test]
    fn round_trip() {
        let inputs: [&[u8]; 6] = [&[], &[0x00], &[0x00; 32], &[0xff; 82], &[0x00, 0x00, 0x01, 0x00], b"\x00\x80payload"];
        for input in inputs {
            assert_eq!(super::decode(crate::base58::encode(input)).as_deref(), Ok(input));
        }
    }
}
