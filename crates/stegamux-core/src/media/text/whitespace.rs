//! Trailing whitespace: one payload bit per line, appended as a tab for 1 or
//! a space for 0. Lines beyond the payload pass through untouched.

use crate::error::StegoError;
use crate::payload;
use crate::result::Result;

pub fn embed(cover: &str, message: &str) -> Result<String> {
    let bits = payload::sentinel::encode(message);
    let lines: Vec<&str> = cover.split_inclusive('\n').collect();
    if bits.len() > lines.len() {
        return Err(StegoError::CapacityError {
            needed: bits.len(),
            available: lines.len(),
        });
    }

    let mut out = String::with_capacity(cover.len() + bits.len());
    for (i, line) in lines.iter().enumerate() {
        if let Some(bit) = bits.get(i) {
            out.push_str(line.strip_suffix('\n').unwrap_or(line));
            out.push(if *bit { '\t' } else { ' ' });
            if line.ends_with('\n') {
                out.push('\n');
            }
        } else {
            out.push_str(line);
        }
    }

    Ok(out)
}

pub fn extract(text: &str) -> String {
    let bits = text.lines().filter_map(|line| match line.chars().last() {
        Some('\t') => Some(true),
        Some(' ') => Some(false),
        _ => None,
    });

    payload::sentinel::decode(bits)
}
