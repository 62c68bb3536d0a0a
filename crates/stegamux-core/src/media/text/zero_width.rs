//! Zero-width insertion: one invisible marker character per payload bit,
//! ZWSP for 1 and ZWNJ for 0, placed behind successive visible characters.

use super::{ZERO_WIDTH_NON_JOINER, ZERO_WIDTH_SPACE};
use crate::error::StegoError;
use crate::payload;
use crate::result::Result;

pub fn embed(cover: &str, message: &str) -> Result<String> {
    let bits = payload::sentinel::encode(message);
    let mut chars: Vec<char> = cover.chars().collect();
    let mut cursor = 0usize;

    for (placed, bit) in bits.iter().enumerate() {
        while cursor < chars.len() && chars[cursor] == ' ' {
            cursor += 1;
        }
        if cursor >= chars.len() {
            return Err(StegoError::CapacityError {
                needed: bits.len(),
                available: placed,
            });
        }
        let marker = if *bit {
            ZERO_WIDTH_SPACE
        } else {
            ZERO_WIDTH_NON_JOINER
        };
        chars.insert(cursor + 1, marker);
        cursor += 2;
    }

    Ok(chars.into_iter().collect())
}

pub fn extract(text: &str) -> String {
    let bits = text.chars().filter_map(|ch| match ch {
        ZERO_WIDTH_SPACE => Some(true),
        ZERO_WIDTH_NON_JOINER => Some(false),
        _ => None,
    });

    payload::sentinel::decode(bits)
}
