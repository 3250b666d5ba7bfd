//! Classificação do formato pelo tipo MIME.
//!
//! Extração e sanitização usam a mesma função para escolher a estratégia.

use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FileKind {
    Image,
    Pdf,
    Unsupported,
}

impl FileKind {
    pub fn classify(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            FileKind::Image
        } else if mime_type == PDF_MIME {
            FileKind::Pdf
        } else {
            FileKind::Unsupported
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, FileKind::Unsupported)
    }
}

pub fn is_supported_file(mime_type: &str) -> bool {
    FileKind::classify(mime_type).is_supported()
}
