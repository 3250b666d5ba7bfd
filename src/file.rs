//! Arquivo mantido em memória durante uma sessão.

use crate::error::Result;
use infer::Infer;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

pub const SANITIZED_PREFIX: &str = "sanitized_";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Nome, tipo MIME, conteúdo e data de modificação de um arquivo enviado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
    last_modified: SystemTime,
}

impl FileHandle {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
        last_modified: SystemTime,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
            last_modified,
        }
    }

    /// Lê o arquivo do disco e detecta seu tipo MIME pelo conteúdo.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let last_modified = fs::metadata(path)?
            .modified()
            .unwrap_or_else(|_| SystemTime::now());
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = detect_mime_type(&bytes, path);

        Ok(Self::new(name, mime_type, bytes, last_modified))
    }

    /// Cópia com prefixo `sanitized_`, mesmo tipo MIME e data atual.
    pub fn sanitized_copy(&self, bytes: Vec<u8>) -> Self {
        Self::new(
            sanitized_name(&self.name),
            self.mime_type.clone(),
            bytes,
            SystemTime::now(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }
}

pub fn sanitized_name(original: &str) -> String {
    format!("{SANITIZED_PREFIX}{original}")
}

/// Detecta o tipo MIME pelo conteúdo, recorrendo à extensão quando necessário.
pub fn detect_mime_type(bytes: &[u8], path: &Path) -> String {
    Infer::new()
        .get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .or_else(|| mime_from_extension(path).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime)
}
