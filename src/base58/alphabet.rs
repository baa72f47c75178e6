use std::{error, fmt};

const INVALID: u8 = 0xFF;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidCharacter {
    pub character: u8,
    pub index: usize,
}

pub(crate) fn display_character(f: &mut fmt::Formatter<'_>, character: u8) -> fmt::Result {
    if character.is_ascii_graphic() {
        write!(f, "'{}'", character as char)
    } else {
        write!(f, "{:#04x}", character)
    }
}

pub struct Alphabet {
    encode: [u8; 58],
    decode: [u8; 256],
}

impl Alphabet {
    pub const fn new(characters: &[u8; 58]) -> Result<Self, Error> {
        let mut decode = [INVALID; 256];

        let mut index = 0;
        while index < characters.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if decode[character as usize] != INVALID {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: decode[character as usize] as usize,
                    second: index,
                });
            }
            decode[character as usize] = index as u8;
            index += 1;
        }

        Ok(Self {
            encode: *characters,
            decode,
        })
    }

    pub fn encode(&self, digit: u8) -> u8 {
        self.encode[digit as usize]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, InvalidCharacter> {
        match self.decode[character as usize] {
            INVALID => Err(InvalidCharacter { character, index }),
            digit => Ok(digit),
        }
    }

    /// The character standing for digit zero, i.e. for one leading `0x00` byte.
    pub fn zero(&self) -> u8 {
        self.encode[0]
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error, InvalidCharacter};
    use crate::base58::ALPHABET;

    #[test]
    fn lookup() {
        assert_eq!(ALPHABET.zero(), b'1');
        assert_eq!(ALPHABET.encode(57), b'z');
        assert_eq!(ALPHABET.decode(b'z', 0), Ok(57));
        assert_eq!(ALPHABET.decode(b'A', 0), Ok(9));
        for (index, &character) in b"0OIl+/ \xff".iter().enumerate() {
            assert_eq!(ALPHABET.decode(character, index), Err(InvalidCharacter { character, index }));
        }
    }

    #[test]
    fn duplicate() {
        let mut characters = *b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        characters[57] = b'a';
        assert!(matches!(
            Alphabet::new(&characters),
            Err(Error::DuplicateCharacter {
                character: 'a',
                first: 33,
                second: 57
            })
        ));
    }
}
