use super::ALPHABET;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer cannot hold the encoded text.
    BufferTooSmall { required: usize, available: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required, available } => {
                write!(f, "Output buffer too small ({} bytes required, {} available)", required, available)
            }
        }
    }
}

pub const fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

fn digits(input: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(max_encoded_len(input.len()));
    for &value in input {
        let mut carry = value as usize;
        for digit in &mut digits {
            carry += (*digit as usize) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    digits.extend(input.iter().take_while(|&&value| value == 0).map(|_| 0));
    digits
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    digits(input.as_ref()).iter().rev().map(|&digit| ALPHABET.encode(digit) as char).collect()
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let output = output.as_mut();
    let digits = digits(input.as_ref());
    let available = output.len();
    let output = output.get_mut(..digits.len()).ok_or(Error::BufferTooSmall {
        required: digits.len(),
        available,
    })?;
    for (character, &digit) in output.iter_mut().zip(digits.iter().rev()) {
        *character = ALPHABET.encode(digit);
    }
    Ok(digits.len())
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e]), "Rt5zm");
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::encode([0x00]), "1");
        assert_eq!(super::encode([0x00; 10]), "1111111111");
        assert_eq!(super::encode([0x00, 0x00, 0x00, 0x01]), "1112");
        assert_eq!(super::encode([0x00, 0x00, 0x39]), "11z");
        assert_eq!(super::encode([0x00, 0x3a]), "121");
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 8];
        let len = super::encode_into([0x51, 0x6b, 0x6f, 0xcd, 0x0f], &mut output);
        assert_eq!(len, Ok(7));
        assert_eq!(&output[..7], b"ABnLTmg");

        let mut output = [0u8; 6];
        assert_eq!(
            super::encode_into([0x51, 0x6b, 0x6f, 0xcd, 0x0f], &mut output),
            Err(Error::BufferTooSmall { required: 7, available: 6 })
        );
    }

    #[test]
    fn max_encoded_len() {
        for len in [0, 1, 20, 25, 37, 82, 200] {
            assert!(super::encode(vec![0xff; len]).len() <= super::max_encoded_len(len));
            assert!(super::encode(vec![0x00; len]).len() <= super::max_encoded_len(len));
        }
    }
}
