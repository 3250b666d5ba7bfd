use crate::config::Config;
use crate::error::SanitizerError;
use crate::export;
use crate::file::FileHandle;
use crate::pipeline;
use crate::session::Session;
use crate::ui;
use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub async fn run(config: Config) -> Result<(), String> {
    let mut session = Session::new(config);

    ui::render_header();
    ui::render_intro(&session.config().output_dir());

    let mut input = String::new();
    loop {
        match read_user_input(&mut input, session.file()) {
            Ok(None) => {
                println!("\n{}", style("Fim da entrada. Até logo!").dim());
                break;
            }
            Ok(Some(line)) => {
                if line.is_empty() {
                    continue;
                }

                if matches_command(&line, &["exit", "sair"]) {
                    println!("{}", style("Até logo!").dim());
                    break;
                }

                if matches_command(&line, &["ajuda", "help"]) {
                    ui::render_help();
                    continue;
                }

                if let Err(message) = handle_input(&mut session, &line).await {
                    ui::render_error(&message);
                }
            }
            Err(error) => {
                eprintln!("Erro ao ler a entrada: {error}");
            }
        }
    }

    Ok(())
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

async fn handle_input(session: &mut Session, raw_input: &str) -> Result<(), String> {
    let trimmed = raw_input.trim();
    let command = trimmed.split_whitespace().next().unwrap_or_default();
    let remainder = trimmed[command.len()..].trim();

    // Só `exportar` aceita argumento; o resto com texto a seguir é caminho.
    match (command.to_lowercase().as_str(), remainder.is_empty()) {
        ("sanitizar", true) => sanitize_current(session).await,
        ("exportar", _) => {
            let dir = if remainder.is_empty() {
                session.config().output_dir()
            } else {
                PathBuf::from(unquote(remainder))
            };
            export_current(session, &dir)
        }
        ("certificado", true) => show_certificate(session),
        ("reiniciar" | "novo", true) => {
            session.reset();
            println!("{}\n", style("Sessão reiniciada.").dim());
            Ok(())
        }
        _ => analyze_path(session, Path::new(unquote(trimmed))).await,
    }
}

/// Remove aspas de caminhos arrastados para o terminal.
fn unquote(input: &str) -> &str {
    input
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            input
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })
        .unwrap_or(input)
}

async fn analyze_path(session: &mut Session, path: &Path) -> Result<(), String> {
    let file = FileHandle::from_path(path).map_err(|error| match error {
        SanitizerError::Io(error) => {
            format!("Não foi possível ler `{}`: {error}", path.display())
        }
        other => other.user_message().to_string(),
    })?;

    let (ticket, file) = session
        .load(file)
        .map_err(|error| error.user_message().to_string())?;

    let extraction = pipeline::analyze_async(file).await;
    if !session.apply_extraction(ticket, extraction) {
        return Ok(());
    }

    if let (Some(file), Some(metadata)) = (session.file(), session.metadata()) {
        ui::render_analysis(file, metadata, session.diagnostic());
    }
    Ok(())
}

async fn sanitize_current(session: &mut Session) -> Result<(), String> {
    let (ticket, file, metadata) = session
        .begin_sanitization()
        .map_err(|error| error.user_message().to_string())?;

    let result = pipeline::sanitize_async(session.sanitizer(), file, metadata)
        .await
        .map_err(|error| {
            tracing::warn!(%error, "falha na sanitização");
            error.user_message().to_string()
        })?;

    if session.apply_result(ticket, result) {
        if let Some(result) = session.result() {
            ui::render_result(result);
        }
    }
    Ok(())
}

fn export_current(session: &Session, dir: &Path) -> Result<(), String> {
    let result = session
        .result()
        .ok_or_else(|| "Sanitize o arquivo antes de exportar.".to_string())?;

    let file_path = export::export_sanitized_file(result, dir)
        .map_err(|error| format!("Não foi possível gravar o arquivo sanitizado: {error}"))?;
    ui::render_exported("Arquivo sanitizado", &file_path);

    let certificate_path = export::export_certificate(result.certificate(), dir)
        .map_err(|error| format!("Não foi possível gravar o certificado: {error}"))?;
    ui::render_exported("Certificado", &certificate_path);

    println!();
    Ok(())
}

fn show_certificate(session: &Session) -> Result<(), String> {
    let certificate = session
        .result()
        .map(|result| result.certificate())
        .ok_or_else(|| "Nenhum certificado disponível. Use `sanitizar` primeiro.".to_string())?;

    let json = certificate
        .to_json_pretty()
        .map_err(|error| format!("Não foi possível serializar o certificado: {error}"))?;
    ui::render_certificate(certificate, &json);
    Ok(())
}

fn read_user_input(buffer: &mut String, active: Option<&FileHandle>) -> io::Result<Option<String>> {
    match active {
        Some(file) => print!(
            "{} {} ",
            style("Arquivo").bold().cyan(),
            style(file.name()).dim()
        ),
        None => print!("{} ", style("Caminho").bold().cyan()),
    }
    print!("{} ", style("›").cyan());
    io::stdout().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim_end().to_string()))
}
