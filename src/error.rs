//! Tipos de erro do pipeline de sanitização.
//!
//! A extração nunca devolve erro: os caminhos degradados viram valores
//! (`Extraction::diagnostic`). Somente a sanitização, a configuração e as
//! exportações propagam `SanitizerError`.

use thiserror::Error;

/// Resultado padrão das operações que podem falhar.
pub type Result<T> = std::result::Result<T, SanitizerError>;

#[derive(Debug, Error)]
pub enum SanitizerError {
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tipo de arquivo não suportado para sanitização: {mime}")]
    UnsupportedType { mime: String },

    #[error("Erro ao carregar imagem: {message}")]
    ImageDecode {
        message: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Erro ao codificar imagem: {message}")]
    ImageEncode {
        message: String,
        #[source]
        source: image::ImageError,
    },

    #[error("A imagem sanitizada `{file_name}` ainda contém metadados EXIF")]
    MetadataResidue { file_name: String },

    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuração inválida: {message}")]
    Config { message: String },

    #[error("Arquivo muito grande ({size} bytes, limite de {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Nenhum arquivo carregado")]
    NoActiveFile,

    #[error("O arquivo ainda não foi analisado")]
    NotAnalyzed,

    #[error("Falha ao executar tarefa em segundo plano: {message}")]
    Task { message: String },
}

impl SanitizerError {
    pub fn unsupported(mime: impl Into<String>) -> Self {
        Self::UnsupportedType { mime: mime.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Mensagem única por etapa, como a interface exibe ao usuário.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => {
                "Tipo de arquivo não suportado. Use imagens (JPEG, PNG) ou PDF."
            }
            Self::FileTooLarge { .. } => "Arquivo muito grande para ser processado.",
            Self::NoActiveFile => "Nenhum arquivo carregado.",
            Self::NotAnalyzed => "Analise o arquivo antes de sanitizá-lo.",
            _ => "Erro ao sanitizar o arquivo. Tente novamente.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_reports_mime_and_user_message() {
        let error = SanitizerError::unsupported("text/plain");
        assert!(error.to_string().contains("text/plain"));
        assert_eq!(
            error.user_message(),
            "Tipo de arquivo não suportado. Use imagens (JPEG, PNG) ou PDF."
        );
    }

    #[test]
    fn io_errors_convert_through_question_mark() {
        fn open_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/definitivamente/nao/existe.bin")?)
        }

        assert!(matches!(open_missing(), Err(SanitizerError::Io(_))));
    }
}
