//! Contagem de páginas e dicionário Info de PDFs.
//!
//! Um pânico do `lopdf` com entrada malformada é contido por `catch_unwind`
//! e vira extração degradada. O hook de pânico padrão continua ativo, então
//! a mensagem do pânico ainda aparece no stderr.

use super::Extraction;
use super::generic::generic_metadata;
use crate::file::FileHandle;
use crate::formatting::{format_datetime, parse_pdf_date};
use crate::metadata::FileMetadata;
use crate::metadata::labels;
use lopdf::{Dictionary, Document, Object};
use std::panic::{self, AssertUnwindSafe};

const TEXT_FIELDS: [(&[u8], &str); 6] = [
    (b"Title", labels::TITLE),
    (b"Author", labels::AUTHOR),
    (b"Subject", labels::SUBJECT),
    (b"Keywords", labels::KEYWORDS),
    (b"Creator", labels::CREATOR),
    (b"Producer", labels::PRODUCER),
];

const DATE_FIELDS: [(&[u8], &str); 2] = [
    (b"CreationDate", labels::CREATION_DATE),
    (b"ModDate", labels::PDF_MODIFICATION_DATE),
];

pub fn extract_pdf_metadata(file: &FileHandle) -> Extraction {
    // O leitor pode entrar em pânico com estruturas malformadas.
    match panic::catch_unwind(AssertUnwindSafe(|| read_document(file))) {
        Ok(extraction) => extraction,
        Err(_) => {
            let mut metadata = generic_metadata(file);
            metadata.insert(labels::ERROR, labels::PDF_GENERIC_ERROR);
            Extraction::degraded(metadata, "Falha inesperada ao ler a estrutura do PDF")
        }
    }
}

fn read_document(file: &FileHandle) -> Extraction {
    let mut metadata = generic_metadata(file);

    let doc = match Document::load_mem(file.bytes()) {
        Ok(doc) => doc,
        Err(error) => {
            metadata.insert(labels::ERROR, labels::PDF_PARSE_ERROR);
            return Extraction::degraded(metadata, format!("Erro ao processar PDF: {error}"));
        }
    };

    metadata.insert(labels::PAGE_COUNT, doc.get_pages().len().to_string());

    if doc.trailer.get(b"Encrypt").is_ok() {
        metadata.insert(labels::ERROR, labels::PDF_PARSE_ERROR);
        return Extraction::degraded(metadata, "PDF criptografado");
    }

    if let Some(info) = info_dictionary(&doc) {
        push_info_fields(&doc, info, &mut metadata);
    }

    Extraction::complete(metadata)
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info_ref = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info_ref)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn push_info_fields(doc: &Document, info: &Dictionary, metadata: &mut FileMetadata) {
    for (key, label) in TEXT_FIELDS {
        if let Some(value) = info_string(doc, info, key) {
            metadata.insert(label, value);
        }
    }

    for (key, label) in DATE_FIELDS {
        if let Some(raw) = info_string(doc, info, key) {
            let value = parse_pdf_date(&raw)
                .map(|date| format_datetime(&date))
                .unwrap_or(raw);
            metadata.insert(label, value);
        }
    }
}

fn info_string(doc: &Document, info: &Dictionary, key: &[u8]) -> Option<String> {
    let value = info
        .get(key)
        .ok()
        .and_then(|obj| object_to_string(doc, obj))?;
    (!value.is_empty()).then_some(value)
}

fn object_to_string(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes).trim().to_string()),
        Object::Name(name) => Some(String::from_utf8_lossy(name).trim().to_string()),
        Object::Reference(reference) => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_string(doc, inner)),
        _ => None,
    }
}

/// Texto PDF: UTF-16BE com BOM, UTF-8 ou, em último caso, Latin-1.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&byte| char::from(byte)).collect(),
    }
}
