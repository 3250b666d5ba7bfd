//! Sanitizador de metadados para imagens e PDFs.
//!
//! O fluxo é: extrair os metadados de um arquivo, destacar os campos
//! sensíveis, sanitizar (recodificação para imagens, cópia para PDFs) e
//! emitir um certificado com os hashes SHA-256 antes e depois.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod file;
pub mod formatting;
pub mod metadata;
pub mod pipeline;
pub mod sanitizer;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_fixtures;

pub use config::Config;
pub use error::{Result, SanitizerError};
pub use extractor::Extraction;
pub use file::FileHandle;
pub use metadata::{FileKind, FileMetadata, MetadataEntry};
pub use pipeline::{extract_metadata, is_supported_file, sanitize};
pub use sanitizer::{SanitizationCertificate, SanitizationResult, Sanitizer};
pub use session::{Session, Ticket};
