//! Configuração opcional carregada de `sanitizador.toml`.

use crate::error::{Result, SanitizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "sanitizador.toml";

const DEFAULT_IMAGE_QUALITY: u8 = 95;
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Qualidade usada ao recodificar formatos com perdas (JPEG).
    pub image_quality: u8,
    /// Diretório onde a interface grava o arquivo sanitizado e o certificado.
    pub output_dir: Option<PathBuf>,
    /// Tamanho máximo aceito ao carregar um arquivo, em MiB.
    pub max_file_size_mb: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_quality: DEFAULT_IMAGE_QUALITY,
            output_dir: None,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|error| SanitizerError::config(format!("TOML inválido: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|error| {
            SanitizerError::config(format!(
                "Não foi possível ler `{}`: {error}",
                path.display()
            ))
        })?;

        Self::from_toml_str(&content).map_err(|error| match error {
            SanitizerError::Config { message } => {
                SanitizerError::config(format!("{} ({})", message, path.display()))
            }
            other => other,
        })
    }

    /// Procura `sanitizador.toml` no diretório atual e nos seus ancestrais.
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir()?;
        Self::discover_from(&current)
    }

    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::from_toml_file(candidate).map(Some);
            }
        }

        Ok(None)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.image_quality) {
            return Err(SanitizerError::config(format!(
                "image_quality deve estar entre 1 e 100 (recebido {})",
                self.image_quality
            )));
        }

        if self.max_file_size_mb == 0 {
            return Err(SanitizerError::config(
                "max_file_size_mb deve ser maior que zero",
            ));
        }

        Ok(())
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
