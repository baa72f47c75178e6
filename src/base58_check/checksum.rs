use sha2::{
    digest::{consts::U32, generic_array::GenericArray},
    Digest, Sha256,
};

pub const CHECKSUM_LEN: usize = 4;

fn sha256(buffer: impl AsRef<[u8]>) -> GenericArray<u8, U32> {
    Sha256::digest(buffer.as_ref())
}

/// First four bytes of SHA-256(SHA-256(body)).
pub fn compute_checksum(body: impl AsRef<[u8]>) -> [u8; CHECKSUM_LEN] {
    let hash = sha256(sha256(body));
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}
