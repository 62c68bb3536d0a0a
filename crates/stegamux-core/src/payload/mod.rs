//! Framing of a text message into a self-delimiting bit sequence and back.
//!
//! Two framing schemes coexist and are not interchangeable: the image and
//! audio codecs prefix the payload with a 32-bit big-endian byte length
//! ([`header`]), while the text codecs terminate the payload with a NUL byte
//! ([`sentinel`]). Both emit 8 bits per payload byte, most significant first.

pub mod header;
pub mod sentinel;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

/// packs a bit sequence into bytes, most significant bit first
pub(crate) fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8 + 1);
    {
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for bit in bits {
            writer.write_bit(*bit).expect("Cannot write bit n");
        }
        if !writer.byte_aligned() {
            writer
                .byte_align()
                .expect("Failed to align the last byte of the payload");
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pack_bits_msb_first() {
        let bits = [false, true, false, false, true, false, false, false];

        assert_eq!(pack_bits(&bits), vec![b'H']);
    }

    #[test]
    fn should_zero_pad_a_trailing_partial_byte() {
        let bits = [true, true, true];

        assert_eq!(pack_bits(&bits), vec![0b1110_0000]);
    }
}
