//! Minimal JPEG marker walking, enough to swap the EXIF APP1 segment

use thiserror::Error;

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const TEM: u8 = 0x01;

/// Identifier that opens an EXIF APP1 payload.
pub const EXIF_HEADER: &[u8] = b"Exif\0\0";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SegmentError {
    #[error("missing JPEG start-of-image marker")]
    NotJpeg,
    #[error("truncated segment at byte {0}")]
    Truncated(usize),
    #[error("expected a marker at byte {0}")]
    BadMarker(usize),
    #[error("EXIF block of {0} bytes does not fit in one APP1 segment")]
    ExifTooLarge(usize),
}

/// One marker segment before the scan data, marker bytes included.
#[derive(Debug, Clone, Copy)]
struct Segment<'a> {
    marker: u8,
    bytes: &'a [u8],
}

impl<'a> Segment<'a> {
    fn payload(&self) -> &'a [u8] {
        self.bytes.get(4..).unwrap_or_default()
    }

    fn is_exif(&self) -> bool {
        self.marker == APP1 && self.payload().starts_with(EXIF_HEADER)
    }
}

/// Header segments and the remainder starting at SOS (or EOI).
fn split_segments(jpeg: &[u8]) -> Result<(Vec<Segment<'_>>, &[u8]), SegmentError> {
    if jpeg.len() < 2 || jpeg[0] != MARKER_PREFIX || jpeg[1] != SOI {
        return Err(SegmentError::NotJpeg);
    }

    let mut segments = Vec::new();
    let mut pos = 2;

    loop {
        if pos >= jpeg.len() {
            return Ok((segments, &jpeg[jpeg.len()..]));
        }
        if jpeg[pos] != MARKER_PREFIX {
            return Err(SegmentError::BadMarker(pos));
        }

        // Fill bytes may pad a marker.
        let mut marker_pos = pos + 1;
        while jpeg.get(marker_pos) == Some(&MARKER_PREFIX) {
            marker_pos += 1;
        }
        let marker = *jpeg.get(marker_pos).ok_or(SegmentError::Truncated(pos))?;

        if marker == SOS || marker == EOI {
            return Ok((segments, &jpeg[pos..]));
        }

        let start = marker_pos - 1;
        if marker == TEM || (0xD0..=0xD7).contains(&marker) {
            segments.push(Segment {
                marker,
                bytes: &jpeg[start..marker_pos + 1],
            });
            pos = marker_pos + 1;
            continue;
        }

        let len_bytes = jpeg
            .get(marker_pos + 1..marker_pos + 3)
            .ok_or(SegmentError::Truncated(start))?;
        let len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;
        let end = marker_pos + 1 + len;
        if len < 2 || end > jpeg.len() {
            return Err(SegmentError::Truncated(start));
        }

        segments.push(Segment {
            marker,
            bytes: &jpeg[start..end],
        });
        pos = end;
    }
}

/// EXIF payload (TIFF structure, without the `Exif\0\0` header), if present.
pub fn find_exif(jpeg: &[u8]) -> Result<Option<&[u8]>, SegmentError> {
    let (segments, _) = split_segments(jpeg)?;
    Ok(segments
        .into_iter()
        .find(|segment| segment.is_exif())
        .map(|segment| &segment.payload()[EXIF_HEADER.len()..]))
}

/// Rebuild `jpeg` with `tiff` as its only EXIF segment.
///
/// The new APP1 goes right after SOI and any leading APP0 (JFIF) segments.
pub fn replace_exif(jpeg: &[u8], tiff: &[u8]) -> Result<Vec<u8>, SegmentError> {
    let (segments, rest) = split_segments(jpeg)?;

    let segment_len = 2 + EXIF_HEADER.len() + tiff.len();
    let segment_len = u16::try_from(segment_len).map_err(|_| SegmentError::ExifTooLarge(tiff.len()))?;

    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&[MARKER_PREFIX, SOI]);

    let leading_app0 = segments.iter().take_while(|s| s.marker == APP0).count();
    for segment in &segments[..leading_app0] {
        out.extend_from_slice(segment.bytes);
    }

    out.extend_from_slice(&[MARKER_PREFIX, APP1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(EXIF_HEADER);
    out.extend_from_slice(tiff);

    for segment in segments[leading_app0..].iter().filter(|s| !s.is_exif()) {
        out.extend_from_slice(segment.bytes);
    }
    out.extend_from_slice(rest);

    Ok(out)
}
