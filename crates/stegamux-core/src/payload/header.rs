//! Length-header framing: `u32 big-endian byte length || payload bytes`,
//! emitted as one bit sequence, most significant bit first.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::bit_iterator::BitIterator;
use crate::payload::pack_bits;

/// Frames a message into its header prefixed bit sequence.
pub fn encode(message: &str) -> Vec<bool> {
    let bytes = message.as_bytes();
    let mut framed = Vec::with_capacity(4 + bytes.len());
    framed
        .write_u32::<BigEndian>(bytes.len() as u32)
        .expect("Cannot write the length header");
    framed.extend_from_slice(bytes);

    BitIterator::new(&framed).collect()
}

/// Reads a header framed message back out of a bit sequence.
///
/// The declared length is never trusted beyond what the carrier actually
/// holds: a truncated header or a payload shorter than announced yields an
/// empty message instead of an error. Malformed UTF-8 decodes with the
/// replacement character.
pub fn decode<I>(bits: I) -> String
where
    I: IntoIterator<Item = bool>,
{
    let mut bits = bits.into_iter();

    let header: Vec<bool> = bits.by_ref().take(32).collect();
    if header.len() < 32 {
        return String::new();
    }
    let length = Cursor::new(pack_bits(&header))
        .read_u32::<BigEndian>()
        .expect("Cannot read the length header") as usize;

    let payload: Vec<bool> = bits.take(length * 8).collect();
    if payload.len() < length * 8 {
        return String::new();
    }

    String::from_utf8_lossy(&pack_bits(&payload)).into_owned()
}
