//! Whitespace parity: every space or newline carries one payload bit as the
//! running word-count parity, flipped by an invisible ZWSP where the natural
//! parity disagrees with the payload.

use super::ZERO_WIDTH_SPACE;
use crate::error::StegoError;
use crate::payload;
use crate::result::Result;

fn carries_a_bit(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

pub fn embed(cover: &str, message: &str) -> Result<String> {
    let bits = payload::sentinel::encode(message);
    let mut result = String::with_capacity(cover.len() + bits.len() * 3);
    let mut bit_index = 0usize;
    let mut word_count = 0u64;

    for ch in cover.chars() {
        result.push(ch);
        if carries_a_bit(ch) && bit_index < bits.len() {
            word_count += 1;
            let parity = word_count % 2 == 1;
            if parity != bits[bit_index] {
                result.push(ZERO_WIDTH_SPACE);
            }
            bit_index += 1;
        }
    }

    if bit_index < bits.len() {
        return Err(StegoError::CapacityError {
            needed: bits.len(),
            available: bit_index,
        });
    }

    Ok(result)
}

pub fn extract(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut bits = Vec::new();
    let mut word_count = 0u64;
    let mut i = 0usize;

    while i < chars.len() {
        if carries_a_bit(chars[i]) {
            word_count += 1;
            let mut parity = word_count % 2 == 1;
            if i + 1 < chars.len() && chars[i + 1] == ZERO_WIDTH_SPACE {
                parity = !parity;
                i += 1;
            }
            bits.push(parity);
        }
        i += 1;
    }

    payload::sentinel::decode(bits)
}
