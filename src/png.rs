//! Minimal PNG container encoder
//!
//! Serializes a raw RGBA buffer into a standards-conformant PNG byte stream
//! with no image or compression library behind it. The layout is fixed:
//! signature, IHDR (8-bit truecolor + alpha), one IDAT holding the
//! filter-byte-prefixed scanlines inside a zlib wrapper of stored DEFLATE
//! blocks, then IEND. Every chunk carries a CRC32 over (type ‖ payload).
//!
//! Stored blocks are a conformant DEFLATE encoding, so any compliant decoder
//! reproduces the input buffer byte-for-byte; the output is larger than a
//! real compressor would produce, which is acceptable at icon sizes.

use log::debug;

/// The fixed 8-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Largest payload of a single stored DEFLATE block.
const STORED_BLOCK_MAX: usize = 65535;

/// Encode an RGBA buffer as a complete PNG byte stream.
///
/// `rgba` must hold exactly `width * height * 4` bytes, row-major, RGBA
/// order. That is a caller invariant, not a runtime condition: violating it
/// is a programming error.
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    debug_assert_eq!(
        rgba.len(),
        width as usize * height as usize * 4,
        "pixel buffer length must be width * height * 4"
    );

    let stride = width as usize * 4;
    let mut out = Vec::with_capacity(rgba.len() + rgba.len() / STORED_BLOCK_MAX * 5 + 128);
    out.extend_from_slice(&SIGNATURE);

    // IHDR: dimensions, bit depth 8, color type 6 (truecolor + alpha),
    // compression 0, filter 0, interlace 0.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
    write_chunk(&mut out, b"IHDR", &ihdr);

    // IDAT: each scanline prefixed with filter byte 0 ("None"), the whole
    // stream compressed as one unit.
    let mut raw = Vec::with_capacity(height as usize * (stride + 1));
    for row in rgba.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    write_chunk(&mut out, b"IDAT", &zlib_stored(&raw));

    write_chunk(&mut out, b"IEND", &[]);

    debug!("encoded {}x{} image into {} bytes", width, height, out.len());
    out
}

/// Append one chunk: big-endian length, type tag, payload, CRC32 over
/// (type ‖ payload).
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    let mut crc = 0xffff_ffff;
    crc = crc32_update(crc, tag);
    crc = crc32_update(crc, payload);
    out.extend_from_slice(&(!crc).to_be_bytes());
}

/// Bitwise CRC32 (polynomial 0xEDB88320), running state without the final
/// complement so it can be fed incrementally.
fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xedb8_8320
            } else {
                crc >> 1
            };
        }
    }
    crc
}

/// Wrap `data` in a zlib stream of stored DEFLATE blocks.
///
/// Header 0x78 0x01, then stored blocks of at most 65535 bytes each, then
/// the Adler-32 of the uncompressed data.
fn zlib_stored(data: &[u8]) -> Vec<u8> {
    let blocks = data.len() / STORED_BLOCK_MAX + 1;
    let mut out = Vec::with_capacity(2 + data.len() + blocks * 5 + 4);
    out.extend_from_slice(&[0x78, 0x01]);

    if data.is_empty() {
        // DEFLATE requires at least one block even for an empty stream.
        out.extend_from_slice(&[0x01, 0x00, 0x00, 0xff, 0xff]);
    } else {
        let mut chunks = data.chunks(STORED_BLOCK_MAX).peekable();
        while let Some(block) = chunks.next() {
            let last = chunks.peek().is_none();
            out.push(u8::from(last));
            let len = block.len() as u16;
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(&(!len).to_le_bytes());
            out.extend_from_slice(block);
        }
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn adler32(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + u32::from(byte)) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_matches_known_vectors() {
        // The canonical check value for "123456789".
        assert_eq!(!crc32_update(0xffff_ffff, b"123456789"), 0xcbf4_3926);
        assert_eq!(!crc32_update(0xffff_ffff, b""), 0);
        // IEND's CRC is a fixed, well-known constant.
        assert_eq!(!crc32_update(0xffff_ffff, b"IEND"), 0xae42_6082);
    }

    #[test]
    fn adler32_matches_known_vectors() {
        assert_eq!(adler32(b""), 1);
        // RFC 1950 check value for "Wikipedia".
        assert_eq!(adler32(b"Wikipedia"), 0x11e6_0398);
    }

    #[test]
    fn zlib_stored_frames_a_short_payload() {
        let stream = zlib_stored(b"abc");
        assert_eq!(&stream[..2], &[0x78, 0x01]);
        // One final stored block: BFINAL=1 BTYPE=00, LEN=3, NLEN=!3.
        assert_eq!(&stream[2..7], &[0x01, 0x03, 0x00, 0xfc, 0xff]);
        assert_eq!(&stream[7..10], b"abc");
        assert_eq!(&stream[10..], &adler32(b"abc").to_be_bytes());
    }

    #[test]
    fn zlib_stored_splits_oversized_payloads() {
        let data = vec![0x42u8; STORED_BLOCK_MAX + 10];
        let stream = zlib_stored(&data);
        // First block is not final and carries the full 65535 bytes.
        assert_eq!(stream[2], 0x00);
        assert_eq!(&stream[3..5], &0xffffu16.to_le_bytes());
        // Second block is final with the 10-byte remainder.
        let second = 2 + 5 + STORED_BLOCK_MAX;
        assert_eq!(stream[second], 0x01);
        assert_eq!(&stream[second + 1..second + 3], &10u16.to_le_bytes());
    }

    #[test]
    fn encode_emits_signature_and_fixed_chunk_order() {
        let rgba = [0u8; 4];
        let png = encode(1, 1, &rgba);
        assert_eq!(&png[..8], &SIGNATURE);
        assert_eq!(&png[12..16], b"IHDR");
        // IHDR payload is always 13 bytes.
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        // IHDR chunk spans bytes 8..33, so IDAT's tag sits at 37.
        assert_eq!(&png[37..41], b"IDAT");
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn ihdr_encodes_dimensions_and_color_mode() {
        let rgba = vec![7u8; 3 * 2 * 4];
        let png = encode(3, 2, &rgba);
        assert_eq!(&png[16..20], &3u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        // depth 8, color type 6, compression/filter/interlace 0.
        assert_eq!(&png[24..29], &[8, 6, 0, 0, 0]);
    }
}
