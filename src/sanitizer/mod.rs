//! Sanitização por formato, hashes antes/depois e certificado.

pub mod certificate;
mod image;
mod pdf;

use crate::config::Config;
use crate::error::{Result, SanitizerError};
use crate::file::FileHandle;
use crate::metadata::{FileKind, FileMetadata, sha256_hex};
use serde::Serialize;

pub use self::image::ensure_no_exif;
pub use certificate::{
    CertificateOperation, CertificateStatus, SanitizationCertificate, make_certificate,
};

/// Resultado imutável de uma sanitização bem-sucedida.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationResult {
    #[serde(skip)]
    file: FileHandle,
    file_name: String,
    original_size: u64,
    sanitized_size: u64,
    removed_metadata_count: usize,
    original_hash: String,
    sanitized_hash: String,
    certificate: SanitizationCertificate,
}

impl SanitizationResult {
    /// Arquivo `sanitized_<nome>` com o mesmo tipo MIME do original.
    pub fn file(&self) -> &FileHandle {
        &self.file
    }

    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn sanitized_size(&self) -> u64 {
        self.sanitized_size
    }

    pub fn removed_metadata_count(&self) -> usize {
        self.removed_metadata_count
    }

    pub fn original_hash(&self) -> &str {
        &self.original_hash
    }

    pub fn sanitized_hash(&self) -> &str {
        &self.sanitized_hash
    }

    pub fn certificate(&self) -> &SanitizationCertificate {
        &self.certificate
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Sanitizer {
    image_quality: u8,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Sanitizer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            image_quality: config.image_quality,
        }
    }

    /// Sanitiza os bytes originais; `original_metadata` só define a lista de remoção.
    pub fn sanitize(
        &self,
        file: &FileHandle,
        original_metadata: &FileMetadata,
    ) -> Result<SanitizationResult> {
        let kind = FileKind::classify(file.mime_type());
        tracing::debug!(file = file.name(), ?kind, "sanitizando");

        let sanitized_bytes = match kind {
            FileKind::Image => self::image::sanitize_image(file, self.image_quality)?,
            FileKind::Pdf => pdf::sanitize_pdf(file),
            FileKind::Unsupported => return Err(SanitizerError::unsupported(file.mime_type())),
        };
        let sanitized = file.sanitized_copy(sanitized_bytes);

        let original_hash = sha256_hex(file.bytes());
        let sanitized_hash = sha256_hex(sanitized.bytes());

        let removed_metadata = original_metadata.sensitive_keys_present();
        let certificate = make_certificate(
            file.name(),
            &original_hash,
            &sanitized_hash,
            removed_metadata.clone(),
        );

        tracing::info!(
            file = file.name(),
            removed = removed_metadata.len(),
            certificate = certificate.id(),
            "sanitização concluída"
        );

        Ok(SanitizationResult {
            file_name: sanitized.name().to_string(),
            original_size: file.size(),
            sanitized_size: sanitized.size(),
            removed_metadata_count: removed_metadata.len(),
            original_hash,
            sanitized_hash,
            certificate,
            file: sanitized,
        })
    }
}
