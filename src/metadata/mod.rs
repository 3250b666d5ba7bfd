//! Mapa de metadados, classificação de formato, política de campos sensíveis e hashing.

pub mod hashing;
pub mod kind;
pub mod labels;
pub mod policy;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use hashing::sha256_hex;
pub use kind::{FileKind, is_supported_file};
pub use policy::{is_sensitive, sensitive_keys};

/// Mapa ordenado de rótulo legível para valor já formatado.
///
/// As chaves são únicas: inserir um rótulo existente substitui o valor e
/// mantém a posição original.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMetadata {
    entries: IndexMap<String, String>,
}

impl FileMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rótulos presentes que a política considera sensíveis, na ordem de extração.
    pub fn sensitive_keys_present(&self) -> Vec<String> {
        self.keys()
            .filter(|key| is_sensitive(key))
            .map(str::to_string)
            .collect()
    }

    pub fn has_sensitive_data(&self) -> bool {
        self.keys().any(is_sensitive)
    }

    /// Entradas com a marcação de sensibilidade usada na exibição.
    pub fn entries(&self) -> Vec<MetadataEntry> {
        self.iter()
            .map(|(key, value)| MetadataEntry {
                key: key.to_string(),
                value: value.to_string(),
                is_sensitive: is_sensitive(key),
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
    pub is_sensitive: bool,
}
