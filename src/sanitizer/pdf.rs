//! Estratégia de PDF: cópia byte a byte.
//!
//! Limitação conhecida: o dicionário Info e os fluxos XMP não são reescritos.
//! A lista de campos removidos do certificado é a declarada pela política.

use crate::file::FileHandle;

pub fn sanitize_pdf(file: &FileHandle) -> Vec<u8> {
    tracing::debug!(
        file = file.name(),
        "PDF copiado sem reescrever a estrutura do documento"
    );
    file.bytes().to_vec()
}
