//! EXIF creation date stamping for crops

use super::jpeg::{find_exif, replace_exif};
use crate::error::{CropError, Result};
use exif::experimental::Writer;
use exif::{Field, In, Reader, Tag, Value};
use scansplit_core::DateTag;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Tags the writer derives from the layout; copying them would clash.
const LAYOUT_TAGS: [Tag; 9] = [
    Tag::ExifIFDPointer,
    Tag::GPSInfoIFDPointer,
    Tag::InteropIFDPointer,
    Tag::JPEGInterchangeFormat,
    Tag::JPEGInterchangeFormatLength,
    Tag::StripOffsets,
    Tag::StripByteCounts,
    Tag::TileOffsets,
    Tag::TileByteCounts,
];

/// Writes the EXIF `DateTime` of a JPEG file from a year tag.
pub struct DateStamper;

impl DateStamper {
    /// Set `DateTime` in the file at `path` to `{year}:06:01 00:00:00`.
    ///
    /// Other primary-image fields already in the file are kept.
    pub fn stamp(path: &Path, tag: &DateTag) -> Result<()> {
        let jpeg = fs::read(path).map_err(|e| CropError::io(path, e))?;
        let stamped = Self::stamp_bytes(&jpeg, tag).map_err(|message| CropError::metadata(path, message))?;
        fs::write(path, stamped).map_err(|e| CropError::io(path, e))
    }

    /// Stamp an in-memory JPEG.
    pub fn stamp_bytes(jpeg: &[u8], tag: &DateTag) -> std::result::Result<Vec<u8>, String> {
        let existing = find_exif(jpeg).map_err(|e| e.to_string())?;
        let mut fields = match existing {
            Some(tiff) => Self::kept_fields(tiff)?,
            None => Vec::new(),
        };
        fields.retain(|field| field.tag != Tag::DateTime);
        fields.push(Field {
            tag: Tag::DateTime,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![tag.exif_datetime().into_bytes()]),
        });

        let tiff = Self::encode(&fields)?;
        replace_exif(jpeg, &tiff).map_err(|e| e.to_string())
    }

    /// `DateTime` of a JPEG file, `None` when it has no EXIF or no such field.
    pub fn read_datetime(path: &Path) -> Result<Option<String>> {
        let jpeg = fs::read(path).map_err(|e| CropError::io(path, e))?;
        let Some(tiff) = find_exif(&jpeg).map_err(|e| CropError::metadata(path, e.to_string()))? else {
            return Ok(None);
        };

        let exif = Reader::new()
            .read_raw(tiff.to_vec())
            .map_err(|e| CropError::metadata(path, e.to_string()))?;

        Ok(exif
            .get_field(Tag::DateTime, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Ascii(values) => values.first().map(|v| String::from_utf8_lossy(v).into_owned()),
                _ => None,
            }))
    }

    /// Primary image fields worth carrying over into the rewritten block.
    fn kept_fields(tiff: &[u8]) -> std::result::Result<Vec<Field>, String> {
        let exif = Reader::new().read_raw(tiff.to_vec()).map_err(|e| e.to_string())?;

        Ok(exif
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY)
            .filter(|field| !LAYOUT_TAGS.contains(&field.tag))
            .filter(|field| !matches!(field.value, Value::Unknown(..)))
            .cloned()
            .collect())
    }

    fn encode(fields: &[Field]) -> std::result::Result<Vec<u8>, String> {
        let mut writer = Writer::new();
        for field in fields {
            writer.push_field(field);
        }

        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).map_err(|e| e.to_string())?;
        Ok(buf.into_inner())
    }
}
