//! Saída de terminal: cabeçalho, tabelas de metadados e resultado.

use crate::file::FileHandle;
use crate::formatting::format_file_size;
use crate::metadata::FileMetadata;
use crate::sanitizer::{SanitizationCertificate, SanitizationResult};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row, Table};
use console::style;
use std::path::Path;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ Sanitizador de Metadados · Imagens e PDF ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
}

pub fn render_intro(output_dir: &Path) {
    println!(
        "{}",
        style("Informe o caminho de uma imagem (JPEG, PNG...) ou de um PDF para analisar.").dim()
    );
    println!(
        "{} {}",
        style("Os arquivos exportados vão para").dim(),
        style(output_dir.display()).dim().bold()
    );
    println!(
        "{}\n",
        style("Digite 'ajuda' para ver os comandos ou 'sair' para terminar.").dim()
    );
}

pub fn render_help() {
    let lines = [
        "┌─ Comandos disponíveis:",
        "│   <caminho>          carrega e analisa um arquivo",
        "│   sanitizar          remove os metadados do arquivo carregado",
        "│   exportar [dir]     grava o arquivo sanitizado e o certificado",
        "│   certificado        mostra o certificado em JSON",
        "│   reiniciar          descarta o arquivo atual",
        "│   sair | exit        encerra o programa",
        "└─",
    ];

    for line in lines {
        println!("{}", style(line).cyan().dim());
    }
    println!();
}

pub fn render_analysis(file: &FileHandle, metadata: &FileMetadata, diagnostic: Option<&str>) {
    println!(
        "\n{} {}",
        style("━━━ Metadados de").cyan().bold(),
        style(file.name()).cyan().bold()
    );
    println!("{}", metadata_table(metadata));

    if let Some(diagnostic) = diagnostic {
        println!("{}", style(format!("  Análise parcial: {diagnostic}")).dim());
    }

    if metadata.has_sensitive_data() {
        let count = metadata.sensitive_keys_present().len();
        println!(
            "\n{}",
            style(format!(
                "  ⚠  {count} campo(s) sensível(is) encontrado(s). \
                 Use `sanitizar` para removê-los."
            ))
            .yellow()
        );
    } else {
        println!(
            "\n{}",
            style("  Nenhum metadado sensível encontrado neste arquivo.").green()
        );
    }
    println!();
}

pub fn render_result(result: &SanitizationResult) {
    println!("\n{}", style("━━━ Sanitização concluída ━━━").green().bold());

    let mut table = base_table(&["Propriedade", "Valor"]);
    table.add_row(property_row("Arquivo", result.file().name(), Color::White));
    table.add_row(property_row(
        "Tamanho original",
        &format_file_size(result.original_size()),
        Color::White,
    ));
    table.add_row(property_row(
        "Tamanho sanitizado",
        &format_file_size(result.sanitized_size()),
        Color::White,
    ));
    table.add_row(property_row(
        "Metadados removidos",
        &result.removed_metadata_count().to_string(),
        Color::Green,
    ));
    table.add_row(property_row("Hash original", result.original_hash(), Color::White));
    table.add_row(property_row(
        "Hash sanitizado",
        result.sanitized_hash(),
        Color::White,
    ));
    table.add_row(property_row(
        "Certificado",
        result.certificate().id(),
        Color::Cyan,
    ));
    println!("{table}");

    let removed = result.certificate().removed_metadata();
    if !removed.is_empty() {
        println!("{}", style("  Campos removidos:").dim());
        for key in removed {
            println!("{}", style(format!("    • {key}")).dim());
        }
    }
    println!();
}

pub fn render_certificate(certificate: &SanitizationCertificate, json: &str) {
    println!(
        "\n{} {}",
        style("━━━ Certificado").cyan().bold(),
        style(certificate.id()).cyan().bold()
    );
    println!("{json}\n");
}

pub fn render_exported(label: &str, path: &Path) {
    let label_styled = style(format!("  {label}")).cyan().bold();
    println!(
        "{} {} {}",
        label_styled,
        style("→").dim(),
        style(path.display()).green()
    );
}

pub fn render_error(message: &str) {
    eprintln!("{}", style(format!("  ✖ {message}")).red());
}

fn metadata_table(metadata: &FileMetadata) -> Table {
    let mut table = base_table(&["Campo", "Valor", ""]);

    for entry in metadata.entries() {
        let color = if entry.is_sensitive {
            Color::Yellow
        } else {
            Color::White
        };
        let mut row = property_row(&entry.key, &entry.value, color);
        if entry.is_sensitive {
            row.add_cell(Cell::new("sensível").fg(Color::Yellow));
        } else {
            row.add_cell(Cell::new(""));
        }
        table.add_row(row);
    }

    table
}

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(headers.iter().map(|text| header_cell(text)));
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
        .add_attribute(Attribute::Underlined)
}

fn property_row(label: &str, value: &str, value_color: Color) -> Row {
    Row::from(vec![
        Cell::new(label).fg(Color::Rgb {
            r: 160,
            g: 196,
            b: 255,
        }),
        Cell::new(value).fg(value_color),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::labels;

    #[test]
    fn metadata_table_flags_sensitive_rows() {
        let metadata: FileMetadata = [
            (labels::FILE_NAME, "foto.jpg"),
            (labels::GPS_LATITUDE, "40.0"),
        ]
        .into_iter()
        .collect();

        let rendered = metadata_table(&metadata).to_string();
        assert!(rendered.contains("foto.jpg"));
        assert_eq!(rendered.matches("sensível").count(), 1);
    }
}
