//! Vocabulário fixo de rótulos exibidos ao usuário.

pub const FILE_NAME: &str = "Nome do arquivo";
pub const SIZE: &str = "Tamanho";
pub const MIME_TYPE: &str = "Tipo MIME";
pub const MODIFIED: &str = "Data de modificação";

pub const WIDTH: &str = "Largura";
pub const HEIGHT: &str = "Altura";
pub const DIMENSIONS: &str = "Dimensões";

pub const GPS_LATITUDE_REF: &str = "GPS Referência Latitude";
pub const GPS_LATITUDE: &str = "GPS Latitude";
pub const GPS_LONGITUDE_REF: &str = "GPS Referência Longitude";
pub const GPS_LONGITUDE: &str = "GPS Longitude";
pub const GPS_ALTITUDE_REF: &str = "GPS Referência Altitude";
pub const GPS_ALTITUDE: &str = "GPS Altitude";
pub const GPS_TIMESTAMP: &str = "GPS Timestamp";
pub const GPS_DATE: &str = "GPS Data";
pub const GPS_COORDINATES: &str = "Coordenadas GPS";
pub const THUMBNAIL: &str = "Thumbnail";
pub const THUMBNAIL_PRESENT: &str = "Presente";

pub const PAGE_COUNT: &str = "Número de páginas";
pub const TITLE: &str = "Título";
pub const AUTHOR: &str = "Autor";
pub const SUBJECT: &str = "Assunto";
pub const KEYWORDS: &str = "Palavras-chave";
pub const CREATOR: &str = "Criador";
pub const PRODUCER: &str = "Produtor";
pub const CREATION_DATE: &str = "Data de criação";
pub const PDF_MODIFICATION_DATE: &str = "Data de modificação PDF";

pub const ERROR: &str = "Erro";
pub const PDF_PARSE_ERROR: &str =
    "Não foi possível processar o PDF (pode estar criptografado ou corrompido)";
pub const PDF_GENERIC_ERROR: &str = "Erro ao processar arquivo PDF";
pub const EXTRACTION_TASK_ERROR: &str = "Extração interrompida antes de concluir";
