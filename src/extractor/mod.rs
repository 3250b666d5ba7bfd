//! Extração de metadados por formato.
//!
//! A extração nunca falha: cada caminho degradado devolve um mapa menor,
//! porém válido, e a causa fica em `Extraction::diagnostic`.

mod generic;
mod image;
mod pdf;

use crate::file::FileHandle;
use crate::metadata::{FileKind, FileMetadata};

pub use generic::generic_metadata;

/// Mapa extraído e, quando algo degradou, o diagnóstico correspondente.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub metadata: FileMetadata,
    pub diagnostic: Option<String>,
}

impl Extraction {
    pub fn complete(metadata: FileMetadata) -> Self {
        Self {
            metadata,
            diagnostic: None,
        }
    }

    pub fn degraded(metadata: FileMetadata, diagnostic: impl Into<String>) -> Self {
        Self {
            metadata,
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Seleciona a estratégia pelo tipo MIME do arquivo.
pub fn extract(file: &FileHandle) -> Extraction {
    let kind = FileKind::classify(file.mime_type());
    tracing::debug!(file = file.name(), ?kind, "extraindo metadados");

    let extraction = match kind {
        FileKind::Image => image::extract_image_metadata(file),
        FileKind::Pdf => pdf::extract_pdf_metadata(file),
        FileKind::Unsupported => Extraction::complete(generic_metadata(file)),
    };

    if let Some(diagnostic) = &extraction.diagnostic {
        tracing::warn!(file = file.name(), %diagnostic, "extração degradada");
    }

    extraction
}
