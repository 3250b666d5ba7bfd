use crate::file::FileHandle;
use crate::formatting::{format_size_kb, format_system_time};
use crate::metadata::FileMetadata;
use crate::metadata::labels;

/// Os quatro campos presentes em qualquer resultado de extração.
pub fn generic_metadata(file: &FileHandle) -> FileMetadata {
    let mut metadata = FileMetadata::new();
    metadata.insert(labels::FILE_NAME, file.name());
    metadata.insert(labels::SIZE, format_size_kb(file.size()));
    metadata.insert(labels::MIME_TYPE, file.mime_type());
    metadata.insert(labels::MODIFIED, format_system_time(file.last_modified()));
    metadata
}
