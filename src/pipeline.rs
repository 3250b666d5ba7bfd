//! Contrato do orquestrador: suporte, extração e sanitização.
//!
//! As variantes assíncronas movem o trabalho pesado (decodificação de imagem,
//! parse de PDF) para o pool de bloqueio do tokio, mantendo a interface livre.

use crate::error::{Result, SanitizerError};
use crate::extractor::{self, Extraction, generic_metadata};
use crate::file::FileHandle;
use crate::metadata::{self, FileMetadata, labels};
use crate::sanitizer::{SanitizationResult, Sanitizer};
use std::sync::Arc;

pub fn is_supported_file(file: &FileHandle) -> bool {
    metadata::is_supported_file(file.mime_type())
}

/// Extração completa, com diagnóstico quando algum caminho degradou.
pub fn analyze(file: &FileHandle) -> Extraction {
    extractor::extract(file)
}

/// Apenas o mapa de metadados; nunca falha.
pub fn extract_metadata(file: &FileHandle) -> FileMetadata {
    analyze(file).metadata
}

pub fn sanitize(
    sanitizer: &Sanitizer,
    file: &FileHandle,
    original_metadata: &FileMetadata,
) -> Result<SanitizationResult> {
    sanitizer.sanitize(file, original_metadata)
}

pub async fn analyze_async(file: Arc<FileHandle>) -> Extraction {
    let worker = Arc::clone(&file);
    match tokio::task::spawn_blocking(move || analyze(&worker)).await {
        Ok(extraction) => extraction,
        Err(error) => {
            tracing::error!(file = file.name(), %error, "tarefa de extração interrompida");
            let mut metadata = generic_metadata(&file);
            metadata.insert(labels::ERROR, labels::EXTRACTION_TASK_ERROR);
            Extraction::degraded(metadata, error.to_string())
        }
    }
}

pub async fn sanitize_async(
    sanitizer: Sanitizer,
    file: Arc<FileHandle>,
    original_metadata: FileMetadata,
) -> Result<SanitizationResult> {
    tokio::task::spawn_blocking(move || sanitize(&sanitizer, &file, &original_metadata))
        .await
        .map_err(|error| SanitizerError::Task {
            message: error.to_string(),
        })?
}
