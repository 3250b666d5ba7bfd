//! Estado do orquestrador para um arquivo por vez.
//!
//! Cada carga ou reinício incrementa a geração. Extrações e sanitizações
//! carregam o `Ticket` da geração em que começaram, e resultados de uma
//! geração anterior são descartados em vez de sobrescrever o arquivo atual.

use crate::config::Config;
use crate::error::{Result, SanitizerError};
use crate::extractor::Extraction;
use crate::file::FileHandle;
use crate::metadata::{FileMetadata, is_supported_file};
use crate::sanitizer::{SanitizationResult, Sanitizer};
use std::sync::Arc;

/// Identifica a geração em que uma operação foi iniciada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug)]
struct ActiveFile {
    file: Arc<FileHandle>,
    metadata: Option<FileMetadata>,
    diagnostic: Option<String>,
    result: Option<SanitizationResult>,
}

#[derive(Debug)]
pub struct Session {
    config: Config,
    sanitizer: Sanitizer,
    generation: u64,
    active: Option<ActiveFile>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            sanitizer: Sanitizer::from_config(&config),
            config,
            generation: 0,
            active: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitizer(&self) -> Sanitizer {
        self.sanitizer
    }

    /// Substitui o arquivo ativo. Tipos não suportados e arquivos acima do
    /// limite são recusados sem alterar o estado atual.
    pub fn load(&mut self, file: FileHandle) -> Result<(Ticket, Arc<FileHandle>)> {
        if !is_supported_file(file.mime_type()) {
            return Err(SanitizerError::unsupported(file.mime_type()));
        }

        let limit = self.config.max_file_size_bytes();
        if file.size() > limit {
            return Err(SanitizerError::FileTooLarge {
                size: file.size(),
                limit,
            });
        }

        let ticket = self.advance();
        let file = Arc::new(file);
        tracing::debug!(file = file.name(), generation = ticket.generation, "arquivo carregado");

        self.active = Some(ActiveFile {
            file: Arc::clone(&file),
            metadata: None,
            diagnostic: None,
            result: None,
        });

        Ok((ticket, file))
    }

    /// Aplica a extração se o ticket ainda for o atual.
    pub fn apply_extraction(&mut self, ticket: Ticket, extraction: Extraction) -> bool {
        let Some(active) = self.current_mut(ticket) else {
            return false;
        };

        active.metadata = Some(extraction.metadata);
        active.diagnostic = extraction.diagnostic;
        active.result = None;
        true
    }

    /// Arquivo e metadados originais para iniciar uma sanitização.
    pub fn begin_sanitization(&self) -> Result<(Ticket, Arc<FileHandle>, FileMetadata)> {
        let active = self.active.as_ref().ok_or(SanitizerError::NoActiveFile)?;
        let metadata = active.metadata.clone().ok_or(SanitizerError::NotAnalyzed)?;

        Ok((self.ticket(), Arc::clone(&active.file), metadata))
    }

    pub fn apply_result(&mut self, ticket: Ticket, result: SanitizationResult) -> bool {
        let Some(active) = self.current_mut(ticket) else {
            return false;
        };

        active.result = Some(result);
        true
    }

    /// Descarta arquivo, metadados e resultado; operações em andamento ficam obsoletas.
    pub fn reset(&mut self) {
        self.advance();
        self.active = None;
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.active.as_ref().map(|active| active.file.as_ref())
    }

    pub fn metadata(&self) -> Option<&FileMetadata> {
        self.active.as_ref()?.metadata.as_ref()
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.active.as_ref()?.diagnostic.as_deref()
    }

    pub fn result(&self) -> Option<&SanitizationResult> {
        self.active.as_ref()?.result.as_ref()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.active.is_some()
    }

    fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
        }
    }

    fn advance(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.ticket()
    }

    fn current_mut(&mut self, ticket: Ticket) -> Option<&mut ActiveFile> {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "resultado de um arquivo anterior descartado"
            );
            return None;
        }
        self.active.as_mut()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
