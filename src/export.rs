//! Gravação em disco do arquivo sanitizado e do certificado JSON.

use crate::error::Result;
use crate::sanitizer::{SanitizationCertificate, SanitizationResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Grava `sanitized_<nome>` em `dir` e devolve o caminho final.
pub fn export_sanitized_file(result: &SanitizationResult, dir: &Path) -> Result<PathBuf> {
    let file = result.file();
    let path = prepare_target(dir, file.name())?;
    fs::write(&path, file.bytes())?;

    tracing::info!(path = %path.display(), bytes = file.size(), "arquivo sanitizado exportado");
    Ok(path)
}

/// Grava o certificado como JSON indentado em `certificado_sanitizacao_<id>.json`.
pub fn export_certificate(certificate: &SanitizationCertificate, dir: &Path) -> Result<PathBuf> {
    let json = certificate.to_json_pretty()?;
    let path = prepare_target(dir, &certificate.file_name())?;
    fs::write(&path, json)?;

    tracing::info!(path = %path.display(), id = certificate.id(), "certificado exportado");
    Ok(path)
}

fn prepare_target(dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::sanitizer::Sanitizer;
    use crate::test_fixtures::{FixtureResult, ascii, handle, jpeg_with_exif, pdf_with_info};
    use exif::Tag;
    use tempfile::tempdir;

    fn sanitized_pdf() -> FixtureResult<SanitizationResult> {
        let bytes = pdf_with_info(&[("Title", "Relatório"), ("Author", "Ana")], 2)?;
        let file = handle("contrato.pdf", "application/pdf", bytes);
        let metadata = extract(&file).metadata;
        Ok(Sanitizer::default().sanitize(&file, &metadata)?)
    }

    #[test]
    fn sanitized_file_is_written_with_prefixed_name() -> FixtureResult<()> {
        let bytes = jpeg_with_exif(&[ascii(Tag::Model, "EOS 5D")], None)?;
        let file = handle("praia.jpg", "image/jpeg", bytes);
        let result = Sanitizer::default().sanitize(&file, &extract(&file).metadata)?;

        let temp = tempdir()?;
        let path = export_sanitized_file(&result, temp.path())?;

        assert_eq!(path, temp.path().join("sanitized_praia.jpg"));
        assert_eq!(fs::read(&path)?, result.file().bytes());
        Ok(())
    }

    #[test]
    fn certificate_json_matches_result() -> FixtureResult<()> {
        let result = sanitized_pdf()?;
        let temp = tempdir()?;

        let path = export_certificate(result.certificate(), temp.path())?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or("nome inválido")?;
        assert!(file_name.starts_with("certificado_sanitizacao_CERT-"));
        assert!(file_name.ends_with(".json"));

        let content = fs::read_to_string(&path)?;
        assert!(content.contains('\n'));

        let json: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(json["id"], result.certificate().id());
        assert_eq!(json["originalFileName"], "contrato.pdf");
        assert_eq!(json["originalHash"], result.original_hash());
        assert_eq!(json["sanitizedHash"], result.sanitized_hash());
        assert_eq!(
            json["removedMetadata"]
                .as_array()
                .map(Vec::len)
                .ok_or("lista ausente")?,
            result.removed_metadata_count()
        );
        Ok(())
    }

    #[test]
    fn missing_output_directory_is_created() -> FixtureResult<()> {
        let result = sanitized_pdf()?;
        let temp = tempdir()?;
        let nested = temp.path().join("saida").join("lote");

        let path = export_sanitized_file(&result, &nested)?;
        assert!(path.is_file());
        Ok(())
    }
}
