use serde::{Deserialize, Serialize};

/// Upper bound on pins across the three tenth-frame balls.
pub const MAX_TENTH_FRAME_PINS: u32 = 30;

const PINS_PER_RACK: u32 = 10;

/// A counted ball that leaves the rack standing: a miss or 0-9 pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialBall {
    Miss,
    Pins(u8),
}

impl PartialBall {
    pub fn pins(self) -> u32 {
        match self {
            PartialBall::Miss => 0,
            PartialBall::Pins(count) => u32::from(count),
        }
    }
}

/// The bonus ball after a double strike, thrown at a freshly reset rack.
/// A spare symbol is not representable here: there is nothing to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshBall {
    Strike,
    Miss,
    Pins(u8),
}

impl FreshBall {
    pub fn pins(self) -> u32 {
        match self {
            FreshBall::Strike => PINS_PER_RACK,
            FreshBall::Miss => 0,
            FreshBall::Pins(count) => u32::from(count),
        }
    }
}

/// The bonus ball after a spare. Any symbol closes the frame; a `/` here
/// clears the fresh rack and is worth ten like a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusBall {
    Strike,
    Spare,
    Miss,
    Pins(u8),
}

impl BonusBall {
    pub fn pins(self) -> u32 {
        match self {
            BonusBall::Strike | BonusBall::Spare => PINS_PER_RACK,
            BonusBall::Miss => 0,
            BonusBall::Pins(count) => u32::from(count),
        }
    }
}

/// The closed set of legal tenth-frame shapes. Parsing into this enum rather
/// than re-checking character indices keeps illegal combinations out of every
/// caller downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameShape {
    /// `X X ?`: two strikes, bonus ball at a fresh rack (`XXX`, `XX4`, `XX-`).
    DoubleStrike { bonus: FreshBall },
    /// `X v /`: strike, then a spare converted on balls two and three (`X9/`).
    StrikeSpare { second: PartialBall },
    /// `X v e`: strike, then two counts on a single rack (`X34`, `X9-`).
    StrikeOpen { second: PartialBall, third: PartialBall },
    /// `v / ?`: spare on balls one and two plus the bonus ball (`9/X`, `-/5`).
    Spare { first: PartialBall, bonus: BonusBall },
    /// `v e`: open frame, two balls only (`72`, `--`).
    Open { first: PartialBall, second: PartialBall },
}

/// What the tenth frame contributed to a game. Derived, never stored:
/// recomputed on demand from the notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenthFrameResult {
    /// 1 when the frame opened with a strike, regardless of the later balls.
    pub strikes_opened: u8,
    /// 1 when a spare was converted on balls one+two or two+three.
    pub spares_closed: u8,
    /// Total pins across all balls, 0 to 30.
    pub pins_knocked: u32,
}

impl TenthFrameResult {
    pub fn from_shape(shape: &FrameShape) -> Self {
        let pins_knocked = match *shape {
            FrameShape::DoubleStrike { bonus } => 2 * PINS_PER_RACK + bonus.pins(),
            FrameShape::StrikeSpare { .. } => 2 * PINS_PER_RACK,
            FrameShape::StrikeOpen { second, third } => {
                PINS_PER_RACK + second.pins() + third.pins()
            }
            FrameShape::Spare { bonus, .. } => PINS_PER_RACK + bonus.pins(),
            FrameShape::Open { first, second } => first.pins() + second.pins(),
        };

        let strikes_opened = match shape {
            FrameShape::DoubleStrike { .. }
            | FrameShape::StrikeSpare { .. }
            | FrameShape::StrikeOpen { .. } => 1,
            FrameShape::Spare { .. } | FrameShape::Open { .. } => 0,
        };

        let spares_closed = match shape {
            FrameShape::StrikeSpare { .. } | FrameShape::Spare { .. } => 1,
            FrameShape::DoubleStrike { .. }
            | FrameShape::StrikeOpen { .. }
            | FrameShape::Open { .. } => 0,
        };

        Self {
            strikes_opened,
            spares_closed,
            pins_knocked,
        }
    }
}
