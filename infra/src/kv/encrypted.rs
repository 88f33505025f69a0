//! Encrypted KV store (spec §4.1): every value is AES-256-GCM ciphertext at
//! rest, keyed by a PBKDF2-HMAC-SHA256-derived key.

use std::sync::Arc;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{de::DeserializeOwned, Serialize};
use sha2::Sha256;

use ns_core::errors::{DefenseError, DomainError, DomainResult};

use super::backend::KvBackend;

/// Fixed domain-separation salt (spec §4.1: "a fixed domain-separation salt
/// string"). Not a secret; its job is to stop the same process secret from
/// deriving the same key in an unrelated context.
const KEY_DERIVATION_SALT: &[u8] = b"nospoilers-encrypted-kv-v1";
const PBKDF2_ITERATIONS: u32 = 150_000;
const NONCE_LEN: usize = 12;

#[derive(serde::Serialize, serde::Deserialize)]
struct SealedRecord {
    iv: String,
    cipher_text: String,
}

/// Wraps an untrusted [`KvBackend`] so that every value at rest is
/// ciphertext. Encryption/decryption happens transparently on `get`/`put`;
/// callers work with plain Rust types.
pub struct EncryptedKvStore {
    backend: Arc<dyn KvBackend>,
    cipher: Aes256Gcm,
}

impl EncryptedKvStore {
    /// Derives the AES key from `process_secret` via PBKDF2-HMAC-SHA256
    /// (150,000 iterations, fixed salt) and wraps `backend`.
    pub fn new(process_secret: &str, backend: Arc<dyn KvBackend>) -> DomainResult<Self> {
        let mut key_bytes = [0u8; 32];
        pbkdf2_hmac::<Sha256>(
            process_secret.as_bytes(),
            KEY_DERIVATION_SALT,
            PBKDF2_ITERATIONS,
            &mut key_bytes,
        );
        let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
        let cipher = Aes256Gcm::new(key);
        Ok(Self { backend, cipher })
    }

    fn encrypt(&self, plaintext: &[u8]) -> DomainResult<SealedRecord> {
        let mut iv_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut iv_bytes);
        let nonce = Nonce::from_slice(&iv_bytes);

        let cipher_text = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| DomainError::from(DefenseError::CryptoUnavailable))?;

        Ok(SealedRecord {
            iv: base64::engine::general_purpose::STANDARD.encode(iv_bytes),
            cipher_text: base64::engine::general_purpose::STANDARD.encode(cipher_text),
        })
    }

    /// Reverses `encrypt`. Fails with `CryptoUnavailable` both when the
    /// stored envelope is malformed and when GCM authentication fails — the
    /// fixed error taxonomy (spec §7) does not carry a distinct "tampered"
    /// kind, so both collapse onto the one crypto-failure variant.
    fn decrypt(&self, sealed: &SealedRecord) -> DomainResult<Vec<u8>> {
        let iv_bytes = base64::engine::general_purpose::STANDARD
            .decode(&sealed.iv)
            .map_err(|_| DomainError::from(DefenseError::CryptoUnavailable))?;
        let cipher_text = base64::engine::general_purpose::STANDARD
            .decode(&sealed.cipher_text)
            .map_err(|_| DomainError::from(DefenseError::CryptoUnavailable))?;
        if iv_bytes.len() != NONCE_LEN {
            return Err(DefenseError::CryptoUnavailable.into());
        }
        let nonce = Nonce::from_slice(&iv_bytes);

        self.cipher
            .decrypt(nonce, cipher_text.as_ref())
            .map_err(|_| DefenseError::CryptoUnavailable.into())
    }

    pub async fn put_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> DomainResult<()> {
        let plaintext = serde_json::to_vec(value)
            .map_err(|e| DomainError::Internal(format!("serialize {key}: {e}")))?;
        let sealed = self.encrypt(&plaintext)?;
        let envelope = serde_json::to_vec(&sealed)
            .map_err(|e| DomainError::Internal(format!("serialize envelope {key}: {e}")))?;
        self.backend.put(key, envelope).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        match self.backend.get(key).await? {
            None => Ok(None),
            Some(bytes) => Ok(Some(self.decode_record(&bytes)?)),
        }
    }

    pub async fn delete(&self, key: &str) -> DomainResult<()> {
        self.backend.delete(key).await
    }

    /// Decrypts every entry under `prefix`, pairing each with its full key.
    pub async fn scan_prefix_json<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> DomainResult<Vec<(String, T)>> {
        let entries = self.backend.scan_prefix(prefix).await?;
        entries
            .into_iter()
            .map(|(key, bytes)| {
                let value = self.decode_record(&bytes)?;
                Ok((key, value))
            })
            .collect()
    }

    fn decode_record<T: DeserializeOwned>(&self, envelope_bytes: &[u8]) -> DomainResult<T> {
        let sealed: SealedRecord = serde_json::from_slice(envelope_bytes)
            .map_err(|_| DomainError::from(DefenseError::CryptoUnavailable))?;
        let plaintext = self.decrypt(&sealed)?;
        serde_json::from_slice(&plaintext)
            .map_err(|e| DomainError::Internal(format!("deserialize decrypted value: {e}")))
    }
}
