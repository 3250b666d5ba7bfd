//! Arquivos de teste gerados em memória (JPEG/PNG com EXIF, PDFs com Info).

use crate::file::FileHandle;
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::Cursor;
use std::time::SystemTime;

pub type FixtureResult<T> = Result<T, Box<dyn std::error::Error>>;

pub fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

pub fn degrees(tag: Tag, whole_degrees: u32) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational {
                num: whole_degrees,
                denom: 1,
            },
            Rational { num: 0, denom: 1 },
            Rational { num: 0, denom: 1 },
        ]),
    }
}

pub fn short(tag: Tag, value: u16) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![value]),
    }
}

fn sample_pixels(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 13 % 256) as u8, (y * 29 % 256) as u8, 128])
    })
}

pub fn plain_jpeg(width: u32, height: u32) -> FixtureResult<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 90).encode_image(&sample_pixels(width, height))?;
    Ok(bytes)
}

pub fn plain_png(width: u32, height: u32) -> FixtureResult<Vec<u8>> {
    plain_image(width, height, ImageFormat::Png)
}

/// Imagem sem metadados no formato pedido, codificada pelo `image`.
pub fn plain_image(width: u32, height: u32, format: ImageFormat) -> FixtureResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(sample_pixels(width, height)).write_to(&mut cursor, format)?;
    Ok(cursor.into_inner())
}

/// Bloco TIFF com os campos informados e, opcionalmente, uma miniatura JPEG.
pub fn exif_block(fields: &[Field], thumbnail: Option<&[u8]>) -> FixtureResult<Vec<u8>> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    if let Some(jpeg) = thumbnail {
        writer.set_jpeg(jpeg, In::THUMBNAIL);
    }

    let mut cursor = Cursor::new(Vec::new());
    writer.write(&mut cursor, false)?;
    Ok(cursor.into_inner())
}

/// JPEG com um segmento APP1 `Exif` logo após o SOI.
pub fn jpeg_with_exif(fields: &[Field], thumbnail: Option<&[u8]>) -> FixtureResult<Vec<u8>> {
    let jpeg = plain_jpeg(32, 16)?;
    let tiff = exif_block(fields, thumbnail)?;
    let segment_len = u16::try_from(tiff.len() + 8)?;

    let mut bytes = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    bytes.extend_from_slice(&jpeg[..2]);
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&segment_len.to_be_bytes());
    bytes.extend_from_slice(b"Exif\0\0");
    bytes.extend_from_slice(&tiff);
    bytes.extend_from_slice(&jpeg[2..]);
    Ok(bytes)
}

/// PNG com um chunk `eXIf` antes dos dados de imagem.
pub fn png_with_exif(fields: &[Field]) -> FixtureResult<Vec<u8>> {
    let (width, height) = (24, 12);
    let pixels = sample_pixels(width, height);
    let tiff = exif_block(fields, None)?;

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_chunk(png::chunk::eXIf, &tiff)?;
        writer.write_image_data(pixels.as_raw())?;
        writer.finish()?;
    }
    Ok(bytes)
}

/// PDF com `pages` páginas vazias e o dicionário Info informado.
pub fn pdf_with_info(info: &[(&str, &str)], pages: usize) -> FixtureResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(Object::from(page_id));
    }

    let count = i64::try_from(kids.len())?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if !info.is_empty() {
        let mut info_dict = lopdf::Dictionary::new();
        for (key, value) in info {
            info_dict.set(key.as_bytes().to_vec(), Object::string_literal(*value));
        }
        let info_id = doc.add_object(info_dict);
        doc.trailer.set("Info", info_id);
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Como `pdf_with_info`, mas com uma entrada `Encrypt` no trailer.
pub fn encrypted_pdf(info: &[(&str, &str)], pages: usize) -> FixtureResult<Vec<u8>> {
    let mut doc = Document::load_mem(&pdf_with_info(info, pages)?)?;
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
    });
    doc.trailer.set("Encrypt", encrypt_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

pub fn handle(name: &str, mime: &str, bytes: Vec<u8>) -> FileHandle {
    FileHandle::new(name, mime, bytes, SystemTime::UNIX_EPOCH)
}
