use rand::{distributions::Alphanumeric, Rng};

use crate::errors::error::VcxWalletResult;

pub fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Expands an optional seed to exactly 32 bytes of key material.
pub fn seed_bytes(seed: Option<&str>) -> [u8; 32] {
    let seed = seed.map_or_else(random_seed, str::to_owned);
    let mut bytes = [b'0'; 32];
    for (target, source) in bytes.iter_mut().zip(seed.bytes()) {
        *target = source;
    }
    bytes
}

pub fn bytes_to_bs58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn bs58_to_bytes(key: &[u8]) -> VcxWalletResult<Vec<u8>> {
    Ok(bs58::decode(key).into_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_bytes_is_deterministic_for_given_seed() {
        assert_eq!(seed_bytes(Some("000000000000000000000000Trustee1")), seed_bytes(Some("000000000000000000000000Trustee1")));
        assert_ne!(seed_bytes(None), seed_bytes(None));
    }

    #[test]
    fn test_bs58_roundtrip() {
        let encoded = bytes_to_bs58(b"hello");
        assert_eq!(bs58_to_bytes(encoded.as_bytes()).unwrap(), b"hello");
    }
}
