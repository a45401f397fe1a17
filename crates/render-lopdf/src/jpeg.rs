//! Minimal JPEG header inspection.
//!
//! Baseline and progressive JPEG data can be embedded in a PDF verbatim
//! with a DCTDecode filter; only the pixel dimensions and component
//! count are needed for the image XObject dictionary.

/// Dimensions and component count read from a JPEG start-of-frame marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegInfo {
    pub width: u32,
    pub height: u32,
    pub components: u8,
}

/// Parses the SOF segment of `data`. Returns `None` when the data is not
/// a JPEG stream or the frame header cannot be found.
pub fn parse_header(data: &[u8]) -> Option<JpegInfo> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }

    let mut i = 2;
    while i + 3 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        // Fill bytes before a marker are legal.
        let mut j = i + 1;
        while j < data.len() && data[j] == 0xFF {
            j += 1;
        }
        if j >= data.len() {
            return None;
        }
        let marker = data[j];

        match marker {
            // Standalone markers without a length field.
            0xD0..=0xD9 | 0x01 => {
                i = j + 1;
                continue;
            }
            // Start-of-frame variants (excluding DHT/DAC/JPG extensions).
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                if j + 8 >= data.len() {
                    return None;
                }
                let height = u32::from(u16::from_be_bytes([data[j + 4], data[j + 5]]));
                let width = u32::from(u16::from_be_bytes([data[j + 6], data[j + 7]]));
                let components = data[j + 8];
                return Some(JpegInfo {
                    width,
                    height,
                    components,
                });
            }
            _ => {
                let len = u16::from_be_bytes([data[j + 1], data[j + 2]]) as usize;
                i = j + 1 + len;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A hand-built JPEG prefix: SOI, APP0 stub, SOF0 for a 640x480 RGB image.
    fn fake_jpeg() -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8];
        // APP0, length 4 (length bytes included), 2 payload bytes
        data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00]);
        // SOF0: length 17, precision 8, height 480, width 640, 3 components
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x01, 0xE0, 0x02, 0x80, 0x03]);
        data
    }

    #[test]
    fn test_parse_sof_dimensions() {
        let info = parse_header(&fake_jpeg()).unwrap();
        assert_eq!(
            info,
            JpegInfo {
                width: 640,
                height: 480,
                components: 3
            }
        );
    }

    #[test]
    fn test_rejects_non_jpeg() {
        assert!(parse_header(b"\x89PNG\r\n\x1a\n").is_none());
        assert!(parse_header(&[]).is_none());
    }

    #[test]
    fn test_rejects_truncated_stream() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(parse_header(&data).is_none());
    }
}
