//! Formatação de tamanhos e datas no padrão pt-BR exibido ao usuário.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use std::time::SystemTime;

const LOCALE_DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Tamanho em KB com duas casas decimais, como nos campos genéricos.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Tamanho legível (Bytes, KB, MB, GB) com até duas casas decimais.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit_index = 0;
    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit_index])
}

pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format(LOCALE_DATETIME_FORMAT).to_string()
}

pub fn format_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    datetime
        .with_timezone(&Local)
        .format(LOCALE_DATETIME_FORMAT)
        .to_string()
}

/// Interpreta uma data PDF (`D:AAAAMMDDHHmmSSOHH'mm'`).
///
/// Só o ano é obrigatório; os demais componentes assumem o menor valor
/// válido e a ausência de fuso equivale a UTC.
pub fn parse_pdf_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let text = raw.trim();
    let text = text.strip_prefix("D:").unwrap_or(text);

    let digits_len = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len < 4 {
        return None;
    }
    let (digits, zone) = text.split_at(digits_len);

    let component = |start: usize, len: usize, default: u32| -> Option<u32> {
        match digits.get(start..start + len) {
            Some(slice) => slice.parse().ok(),
            None => Some(default),
        }
    };

    let year: i32 = digits.get(0..4)?.parse().ok()?;
    let month = component(4, 2, 1)?;
    let day = component(6, 2, 1)?;
    let hour = component(8, 2, 0)?;
    let minute = component(10, 2, 0)?;
    let second = component(12, 2, 0)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    let offset = parse_pdf_offset(zone)?;

    offset.from_local_datetime(&naive).single()
}

fn parse_pdf_offset(zone: &str) -> Option<FixedOffset> {
    let mut chars = zone.chars();
    let sign = match chars.next() {
        None | Some('Z') | Some('z') => return FixedOffset::east_opt(0),
        Some('+') => 1,
        Some('-') => -1,
        Some(_) => return FixedOffset::east_opt(0),
    };

    let digits: String = chars.filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(0..2).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: i32 = digits.get(2..4).and_then(|m| m.parse().ok()).unwrap_or(0);

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
