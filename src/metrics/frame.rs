use crate::domain::GameRecord;
use crate::notation::{TenthFrameResult, derive_tenth_frame};

const FRAMES_PER_GAME: u32 = 10;
const FRAMES_BEFORE_TENTH: u32 = 9;

/// Per-game metrics derived from the pre-aggregated frame counts plus the
/// tenth-frame notation. Percentages are raw here; display rounding happens
/// at the aggregate layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMetrics {
    pub strike_percentage: f64,
    pub spare_percentage: f64,
    pub tenth_frame_pins: u32,
}

pub fn game_metrics(record: &GameRecord) -> GameMetrics {
    let tenth = derive_tenth_frame(&record.tenth_frame_notation);
    GameMetrics {
        strike_percentage: strike_percentage(record.strike_count, &tenth),
        spare_percentage: spare_percentage(record.strike_count, record.spare_count, &tenth),
        tenth_frame_pins: tenth.pins_knocked,
    }
}

/// Fraction of the ten frames that opened with a strike. The denominator is
/// always ten: this measures frames, not pins.
fn strike_percentage(strike_count: u8, tenth: &TenthFrameResult) -> f64 {
    let strikes = u32::from(strike_count) + u32::from(tenth.strikes_opened);
    f64::from(strikes) / f64::from(FRAMES_PER_GAME) * 100.0
}

/// Spares converted out of the frames that offered one. A frame opened with
/// a strike offers no spare; the tenth frame always offers exactly one, on
/// balls one+two or two+three.
fn spare_percentage(strike_count: u8, spare_count: u8, tenth: &TenthFrameResult) -> f64 {
    let opportunities = FRAMES_BEFORE_TENTH.saturating_sub(u32::from(strike_count)) + 1;
    if opportunities == 0 {
        return 0.0;
    }
    let spares = u32::from(spare_count) + u32::from(tenth.spares_closed);
    f64::from(spares) / f64::from(opportunities) * 100.0
}
