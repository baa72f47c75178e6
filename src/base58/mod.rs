pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into, max_encoded_len};

pub static ALPHABET: Alphabet = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
