//! WinAnsiEncoding, the single-byte encoding the standard fonts are
//! declared with. Latin-1 maps to itself; 0x80..=0x9F carry the
//! typographic extras (curly quotes, dashes, bullet, euro).

/// Code points for 0x80..=0x9F. Unassigned slots are `None`.
const HIGH_CONTROL_RANGE: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// The WinAnsi byte for `ch`, or `None` if the encoding has no slot for it.
pub fn encode(ch: char) -> Option<u8> {
    match ch as u32 {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => HIGH_CONTROL_RANGE
            .iter()
            .position(|&slot| slot == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}
