//! Registro estático dos rótulos considerados sensíveis.
//!
//! Rótulos fora desta lista são exibidos sem marcação até serem incluídos aqui.

use super::labels;

pub const SENSITIVE_KEYS: [&str; 26] = [
    labels::GPS_LATITUDE,
    labels::GPS_LONGITUDE,
    labels::GPS_LATITUDE_REF,
    labels::GPS_LONGITUDE_REF,
    labels::GPS_ALTITUDE,
    labels::GPS_TIMESTAMP,
    labels::GPS_DATE,
    labels::GPS_COORDINATES,
    "Fabricante da câmera",
    "Modelo da câmera",
    "Software",
    "Artista/Autor",
    labels::AUTHOR,
    "Copyright",
    labels::CREATOR,
    labels::PRODUCER,
    "Data/Hora da foto",
    "Data original",
    "Data digitalizada",
    labels::CREATION_DATE,
    labels::PDF_MODIFICATION_DATE,
    labels::TITLE,
    labels::SUBJECT,
    labels::KEYWORDS,
    "Descrição da imagem",
    labels::THUMBNAIL,
];

pub fn is_sensitive(display_name: &str) -> bool {
    SENSITIVE_KEYS.contains(&display_name)
}

pub fn sensitive_keys() -> &'static [&'static str] {
    &SENSITIVE_KEYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_no_duplicates() {
        let unique: HashSet<_> = sensitive_keys().iter().collect();
        assert_eq!(unique.len(), SENSITIVE_KEYS.len());
    }

    #[test]
    fn composite_gps_coordinates_is_sensitive() {
        assert!(is_sensitive("Coordenadas GPS"));
    }

    #[test]
    fn altitude_reference_and_generic_fields_are_not_sensitive() {
        for key in [
            labels::GPS_ALTITUDE_REF,
            labels::FILE_NAME,
            labels::SIZE,
            labels::MIME_TYPE,
            labels::MODIFIED,
            labels::PAGE_COUNT,
            labels::ERROR,
            "Orientação",
        ] {
            assert!(!is_sensitive(key), "{key} não deveria ser sensível");
        }
    }

    #[test]
    fn unknown_labels_fail_open() {
        assert!(!is_sensitive("Campo novo do extrator"));
        assert!(!is_sensitive("gps latitude"));
    }
}
