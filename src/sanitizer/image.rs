//! Recodificação de imagens a partir dos pixels decodificados.
//!
//! Os blocos auxiliares (EXIF, XMP, ICC, miniaturas) nunca são lidos de volta
//! para o novo arquivo, então a nova codificação sai sem eles.

use crate::error::{Result, SanitizerError};
use crate::file::FileHandle;
use exif::{Context, Field, In, Tag};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage, imageops};
use std::io::Cursor;

pub fn sanitize_image(file: &FileHandle, quality: u8) -> Result<Vec<u8>> {
    let reader = ImageReader::new(Cursor::new(file.bytes())).with_guessed_format()?;
    let detected = reader.format();

    let decoded = reader.decode().map_err(|source| SanitizerError::ImageDecode {
        message: file.name().to_string(),
        source,
    })?;

    let format = ImageFormat::from_mime_type(file.mime_type())
        .or(detected)
        .ok_or_else(|| SanitizerError::unsupported(file.mime_type()))?;

    let surface = render_on_blank_surface(&decoded);
    drop(decoded);

    let bytes = encode(surface, format, quality)?;
    ensure_no_exif(&bytes, file.name())?;

    Ok(bytes)
}

/// Desenha a imagem numa superfície transparente das mesmas dimensões.
fn render_on_blank_surface(decoded: &DynamicImage) -> RgbaImage {
    let mut surface = RgbaImage::new(decoded.width(), decoded.height());
    imageops::overlay(&mut surface, &decoded.to_rgba8(), 0, 0);
    surface
}

fn encode(surface: RgbaImage, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    let image = DynamicImage::ImageRgba8(surface);
    let mut cursor = Cursor::new(Vec::new());

    let outcome = match format {
        // JPEG não tem canal alfa.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, quality)),
        _ => image.write_to(&mut cursor, format),
    };

    outcome.map_err(|source| SanitizerError::ImageEncode {
        message: format!("formato {format:?}"),
        source,
    })?;

    Ok(cursor.into_inner())
}

/// Tags de identificação que podem aparecer no IFD principal de um TIFF.
const IDENTIFYING_TIFF_TAGS: [Tag; 10] = [
    Tag::Make,
    Tag::Model,
    Tag::Software,
    Tag::DateTime,
    Tag::Artist,
    Tag::Copyright,
    Tag::ImageDescription,
    Tag::ExifIFDPointer,
    Tag::GPSInfoIFDPointer,
    Tag::InteropIFDPointer,
];

/// Falha se a nova codificação ainda carregar algum campo EXIF.
///
/// Um TIFF é ele próprio uma estrutura IFD: nele só contam as tags de
/// identificação, os sub-IFDs Exif/GPS e a miniatura, nunca as tags
/// estruturais (dimensões, faixas, resolução) que o codificador escreve.
pub fn ensure_no_exif(bytes: &[u8], file_name: &str) -> Result<()> {
    let residue = || SanitizerError::MetadataResidue {
        file_name: file_name.to_string(),
    };
    let is_tiff = matches!(image::guess_format(bytes), Ok(ImageFormat::Tiff));

    match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) if is_tiff => {
            if exif.fields().any(is_identifying_tiff_field) {
                Err(residue())
            } else {
                Ok(())
            }
        }
        Ok(exif) if exif.fields().next().is_some() => Err(residue()),
        Ok(_) => Ok(()),
        Err(exif::Error::NotFound(_))
        | Err(exif::Error::BlankValue(_))
        | Err(exif::Error::InvalidFormat(_))
        | Err(exif::Error::NotSupported(_)) => Ok(()),
        Err(exif::Error::Io(error)) => Err(SanitizerError::Io(error)),
        Err(error) => {
            tracing::warn!(
                file = file_name,
                %error,
                "não foi possível verificar o EXIF da imagem sanitizada"
            );
            Err(residue())
        }
    }
}

fn is_identifying_tiff_field(field: &Field) -> bool {
    field.ifd_num != In::PRIMARY
        || field.tag.context() != Context::Tiff
        || IDENTIFYING_TIFF_TAGS.contains(&field.tag)
}
