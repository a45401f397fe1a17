//! Metrics for the built-in fallback faces.
//!
//! Helvetica and Helvetica-Bold are base-14 PDF fonts: viewers carry
//! them, so they need no embedding and their advance widths are fixed by
//! the Adobe AFM files (1000 units per em). The tables below cover the
//! printable ASCII range; characters outside it get an average width so
//! measurement stays total and deterministic.

use sectorbrief_types::FontWeight;

/// Advance widths for Helvetica, chars 0x20..=0x7E, AFM units.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Advance widths for Helvetica-Bold, chars 0x20..=0x7E, AFM units.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

/// Width used for characters the tables do not cover.
const AVERAGE_WIDTH: u16 = 556;

/// Bullet (U+2022) width, present in WinAnsi at 0x95.
const BULLET_WIDTH: u16 = 350;

fn char_units(c: char, weight: FontWeight) -> u16 {
    if c == '\u{2022}' {
        return BULLET_WIDTH;
    }
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        let idx = (code - 0x20) as usize;
        match weight {
            FontWeight::Regular => HELVETICA_WIDTHS[idx],
            FontWeight::Bold => HELVETICA_BOLD_WIDTHS[idx],
        }
    } else {
        AVERAGE_WIDTH
    }
}

/// Measures `text` against the built-in face for `weight`.
pub fn builtin_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c, weight) as u32).sum();
    units as f32 * size / 1000.0
}

/// PostScript name of the built-in face for `weight`.
pub fn builtin_postscript_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "Helvetica",
        FontWeight::Bold => "Helvetica-Bold",
    }
}
