//! Hash SHA-256 do conteúdo exato de um arquivo.

use sha2::{Digest, Sha256};

/// Devolve o SHA-256 em hexadecimal minúsculo.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    tracing::debug!(bytes = bytes.len(), "hash SHA-256 calculado");
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn same_bytes_same_digest_different_bytes_different_digest() {
        let a = sha256_hex(b"conteudo original");
        assert_eq!(a, sha256_hex(b"conteudo original"));
        assert_ne!(a, sha256_hex(b"conteudo original."));
        assert_eq!(a.len(), 64);
    }
}
