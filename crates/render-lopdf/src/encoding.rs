//! WinAnsi (CP1252) text encoding for content stream strings.
//!
//! The font dictionaries declare WinAnsiEncoding, so show-text operands
//! must be CP1252 bytes. Characters with no WinAnsi slot are replaced
//! with '?' rather than rejected: the engine never refuses to render.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// WinAnsi code points that differ from Latin-1 (the 0x80..0x9F block).
static WIN_ANSI_SPECIALS: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    HashMap::from([
        ('\u{20AC}', 0x80), // euro sign
        ('\u{201A}', 0x82),
        ('\u{0192}', 0x83),
        ('\u{201E}', 0x84),
        ('\u{2026}', 0x85), // horizontal ellipsis
        ('\u{2020}', 0x86),
        ('\u{2021}', 0x87),
        ('\u{02C6}', 0x88),
        ('\u{2030}', 0x89),
        ('\u{0160}', 0x8A),
        ('\u{2039}', 0x8B),
        ('\u{0152}', 0x8C),
        ('\u{017D}', 0x8E),
        ('\u{2018}', 0x91), // left single quote
        ('\u{2019}', 0x92), // right single quote
        ('\u{201C}', 0x93), // left double quote
        ('\u{201D}', 0x94), // right double quote
        ('\u{2022}', 0x95), // bullet
        ('\u{2013}', 0x96), // en dash
        ('\u{2014}', 0x97), // em dash
        ('\u{02DC}', 0x98),
        ('\u{2122}', 0x99), // trade mark
        ('\u{0161}', 0x9A),
        ('\u{203A}', 0x9B),
        ('\u{0153}', 0x9C),
        ('\u{017E}', 0x9E),
        ('\u{0178}', 0x9F),
    ])
});

/// Encodes `text` as WinAnsi bytes, replacing unmappable characters.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x80 || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                WIN_ANSI_SPECIALS.get(&c).copied().unwrap_or(b'?')
            }
        })
        .collect()
}
