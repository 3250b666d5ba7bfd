//! Certificado imutável que atesta uma sanitização.

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const CERTIFICATE_FILE_PREFIX: &str = "certificado_sanitizacao_";
const ID_SUFFIX_LEN: usize = 9;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CertificateOperation {
    #[serde(rename = "METADATA_SANITIZATION")]
    MetadataSanitization,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CertificateStatus {
    #[serde(rename = "VERIFIED")]
    Verified,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationCertificate {
    id: String,
    timestamp: String,
    original_file_name: String,
    original_hash: String,
    sanitized_hash: String,
    removed_metadata: Vec<String>,
    operation: CertificateOperation,
    status: CertificateStatus,
}

impl SanitizationCertificate {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn original_file_name(&self) -> &str {
        &self.original_file_name
    }

    pub fn original_hash(&self) -> &str {
        &self.original_hash
    }

    pub fn sanitized_hash(&self) -> &str {
        &self.sanitized_hash
    }

    pub fn removed_metadata(&self) -> &[String] {
        &self.removed_metadata
    }

    pub fn operation(&self) -> CertificateOperation {
        self.operation
    }

    pub fn status(&self) -> CertificateStatus {
        self.status
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Nome do artefato exportado: `certificado_sanitizacao_<id>.json`.
    pub fn file_name(&self) -> String {
        format!("{CERTIFICATE_FILE_PREFIX}{}.json", self.id)
    }
}

pub fn make_certificate(
    original_file_name: &str,
    original_hash: &str,
    sanitized_hash: &str,
    removed_metadata: Vec<String>,
) -> SanitizationCertificate {
    let now = Utc::now();

    SanitizationCertificate {
        id: certificate_id(now),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        original_file_name: original_file_name.to_string(),
        original_hash: original_hash.to_string(),
        sanitized_hash: sanitized_hash.to_string(),
        removed_metadata,
        operation: CertificateOperation::MetadataSanitization,
        status: CertificateStatus::Verified,
    }
}

/// `CERT-<epoch ms>-<sufixo base36>`: único na prática, não criptograficamente.
fn certificate_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from_digit(rng.random_range(0..36), 36).unwrap_or('0'))
        .collect();

    format!("CERT-{}-{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> SanitizationCertificate {
        make_certificate(
            "foto.jpg",
            "aaaa",
            "bbbb",
            vec!["GPS Latitude".to_string(), "Fabricante da câmera".to_string()],
        )
    }

    #[test]
    fn id_has_timestamp_and_base36_suffix() {
        let certificate = sample();
        let parts: Vec<&str> = certificate.id().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "CERT");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn ids_are_unique_across_repeated_calls() {
        let ids: HashSet<String> = (0..500).map(|_| sample().id().to_string()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn timestamp_is_iso_utc_with_millis() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let certificate = sample();
        assert!(certificate.timestamp().ends_with('Z'));
        DateTime::parse_from_rfc3339(certificate.timestamp())?;
        Ok(())
    }

    #[test]
    fn json_uses_exported_field_names() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let certificate = sample();
        let json: serde_json::Value = serde_json::from_str(&certificate.to_json_pretty()?)?;
        let object = json.as_object().ok_or("não é objeto")?;

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "id",
                "operation",
                "originalFileName",
                "originalHash",
                "removedMetadata",
                "sanitizedHash",
                "status",
                "timestamp",
            ]
        );
        assert_eq!(object["operation"], "METADATA_SANITIZATION");
        assert_eq!(object["status"], "VERIFIED");
        assert_eq!(
            object["removedMetadata"],
            serde_json::json!(["GPS Latitude", "Fabricante da câmera"])
        );
        Ok(())
    }

    #[test]
    fn file_name_embeds_id() {
        let certificate = sample();
        assert_eq!(
            certificate.file_name(),
            format!("certificado_sanitizacao_{}.json", certificate.id())
        );
    }

    #[test]
    fn json_round_trips() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let certificate = sample();
        let parsed: SanitizationCertificate = serde_json::from_str(&certificate.to_json_pretty()?)?;
        assert_eq!(parsed, certificate);
        Ok(())
    }
}
