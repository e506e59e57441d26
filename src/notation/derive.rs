use super::grammar::{MAX_BALLS, parse_complete_notation};
use super::types::{MAX_TENTH_FRAME_PINS, TenthFrameResult};

/// Total pin derivation over a notation string.
///
/// Valid strings go through the grammar and the parsed shape decides the
/// totals. Anything else (a malformed or unfinished record that slipped past
/// submission-time validation) is folded symbol by symbol instead, so the
/// result stays bounded and an `X` is worth ten pins in every slot rather
/// than being silently dropped.
pub fn derive_tenth_frame(notation: &str) -> TenthFrameResult {
    match parse_complete_notation(notation) {
        Ok(shape) => TenthFrameResult::from_shape(&shape),
        Err(_) => fold_symbols(notation),
    }
}

/// Lenient fallback: strike = 10, miss = 0, digit = face value, spare = 10
/// minus whatever already fell on the current rack. Unknown characters
/// contribute nothing.
fn fold_symbols(notation: &str) -> TenthFrameResult {
    let mut pins: u32 = 0;
    let mut rack_down: u32 = 0;
    let mut strikes_opened: u8 = 0;
    let mut spares_closed: u8 = 0;

    for (index, c) in notation.trim().chars().take(MAX_BALLS).enumerate() {
        match c.to_ascii_uppercase() {
            'X' => {
                pins += 10;
                if index == 0 {
                    strikes_opened = 1;
                }
                rack_down = 0;
            }
            '/' => {
                pins += 10u32.saturating_sub(rack_down);
                spares_closed = 1;
                rack_down = 0;
            }
            '-' => {}
            digit @ '0'..='9' => {
                let value = u32::from(digit as u8 - b'0');
                pins += value;
                rack_down += value;
            }
            _ => {}
        }
    }

    TenthFrameResult {
        strikes_opened,
        spares_closed,
        pins_knocked: pins.min(MAX_TENTH_FRAME_PINS),
    }
}
