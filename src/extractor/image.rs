//! Dimensões e tags EXIF/GPS de imagens.

use super::Extraction;
use super::generic::generic_metadata;
use crate::file::FileHandle;
use crate::metadata::FileMetadata;
use crate::metadata::labels;
use exif::{Exif, Field, In, Tag, Value};
use image::{ImageFormat, ImageReader};
use std::io::Cursor;

const EXIF_LABELS: [(Tag, &str); 21] = [
    (Tag::Make, "Fabricante da câmera"),
    (Tag::Model, "Modelo da câmera"),
    (Tag::Software, "Software"),
    (Tag::DateTime, "Data/Hora da foto"),
    (Tag::DateTimeOriginal, "Data original"),
    (Tag::DateTimeDigitized, "Data digitalizada"),
    (Tag::Artist, "Artista/Autor"),
    (Tag::Copyright, "Copyright"),
    (Tag::ImageDescription, "Descrição da imagem"),
    (Tag::Orientation, "Orientação"),
    (Tag::XResolution, "Resolução X"),
    (Tag::YResolution, "Resolução Y"),
    (Tag::WhiteBalance, "Balanço de branco"),
    (Tag::Flash, "Flash"),
    (Tag::FNumber, "Abertura (f)"),
    (Tag::ExposureTime, "Tempo de exposição"),
    (Tag::PhotographicSensitivity, "ISO"),
    (Tag::FocalLength, "Distância focal"),
    (Tag::ColorSpace, "Espaço de cor"),
    (Tag::PixelXDimension, "Largura EXIF"),
    (Tag::PixelYDimension, "Altura EXIF"),
];

const GPS_LABELS: [(Tag, &str); 8] = [
    (Tag::GPSLatitudeRef, labels::GPS_LATITUDE_REF),
    (Tag::GPSLatitude, labels::GPS_LATITUDE),
    (Tag::GPSLongitudeRef, labels::GPS_LONGITUDE_REF),
    (Tag::GPSLongitude, labels::GPS_LONGITUDE),
    (Tag::GPSAltitudeRef, labels::GPS_ALTITUDE_REF),
    (Tag::GPSAltitude, labels::GPS_ALTITUDE),
    (Tag::GPSTimeStamp, labels::GPS_TIMESTAMP),
    (Tag::GPSDateStamp, labels::GPS_DATE),
];

pub fn extract_image_metadata(file: &FileHandle) -> Extraction {
    let mut metadata = generic_metadata(file);

    if let Some((width, height)) = decoded_dimensions(file.bytes()) {
        metadata.insert(labels::WIDTH, format!("{width}px"));
        metadata.insert(labels::HEIGHT, format!("{height}px"));
        metadata.insert(labels::DIMENSIONS, format!("{width}x{height}"));
    }

    let exif = match read_exif(file.bytes()) {
        Ok(Some(exif)) => exif,
        Ok(None) => return Extraction::complete(metadata),
        Err(error) => {
            return Extraction::degraded(
                generic_metadata(file),
                format!("Erro ao extrair metadados EXIF: {error}"),
            );
        }
    };

    push_tags(&mut metadata, &exif, &EXIF_LABELS);
    push_tags(&mut metadata, &exif, &GPS_LABELS);
    push_coordinates(&mut metadata, &exif);

    if exif
        .get_field(Tag::JPEGInterchangeFormat, In::THUMBNAIL)
        .is_some()
    {
        metadata.insert(labels::THUMBNAIL, labels::THUMBNAIL_PRESENT);
    }

    Extraction::complete(metadata)
}

/// Decodifica a imagem inteira; qualquer falha apenas omite as dimensões.
fn decoded_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .decode()
        .ok()?;
    Some((image.width(), image.height()))
}

/// `Ok(None)` quando a imagem não tem bloco EXIF ou o contêiner não comporta um.
fn read_exif(bytes: &[u8]) -> Result<Option<Exif>, exif::Error> {
    if !may_carry_exif(bytes) {
        return Ok(None);
    }

    match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => Ok(Some(exif)),
        Err(exif::Error::NotFound(_)) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Contêineres que o leitor EXIF sabe percorrer. GIF, BMP e afins ficam de fora;
/// formatos que o `image` não reconhece seguem para o leitor (HEIF).
fn may_carry_exif(bytes: &[u8]) -> bool {
    match image::guess_format(bytes) {
        Ok(format) => matches!(
            format,
            ImageFormat::Jpeg
                | ImageFormat::Png
                | ImageFormat::Tiff
                | ImageFormat::WebP
                | ImageFormat::Avif
        ),
        Err(_) => true,
    }
}

fn push_tags(metadata: &mut FileMetadata, exif: &Exif, table: &[(Tag, &str)]) {
    for (tag, label) in table {
        if let Some(description) = exif
            .get_field(*tag, In::PRIMARY)
            .and_then(|field| describe_field(field, exif))
        {
            metadata.insert(*label, description);
        }
    }
}

fn push_coordinates(metadata: &mut FileMetadata, exif: &Exif) {
    let describe = |tag| {
        exif.get_field(tag, In::PRIMARY)
            .and_then(|field| describe_field(field, exif))
    };

    let (Some(lat), Some(lng)) = (describe(Tag::GPSLatitude), describe(Tag::GPSLongitude)) else {
        return;
    };
    let lat_ref = describe(Tag::GPSLatitudeRef).unwrap_or_default();
    let lng_ref = describe(Tag::GPSLongitudeRef).unwrap_or_default();

    metadata.insert(
        labels::GPS_COORDINATES,
        format!("{lat}{lat_ref}, {lng}{lng_ref}"),
    );
}

/// Descrição legível do campo, ou `None` quando ela seria vazia.
fn describe_field(field: &Field, exif: &Exif) -> Option<String> {
    let description = match (&field.value, field.tag) {
        (Value::Ascii(parts), _) => parts
            .iter()
            .map(|part| {
                String::from_utf8_lossy(part)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string()
            })
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        (Value::Rational(dms), tag)
            if dms.len() == 3 && (tag == Tag::GPSLatitude || tag == Tag::GPSLongitude) =>
        {
            decimal_degrees(dms[0].to_f64(), dms[1].to_f64(), dms[2].to_f64())
        }
        _ => field.display_value().with_unit(exif).to_string(),
    };

    let description = description.trim();
    (!description.is_empty()).then(|| description.to_string())
}

fn decimal_degrees(degrees: f64, minutes: f64, seconds: f64) -> String {
    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    format!("{rounded:?}")
}
