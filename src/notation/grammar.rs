use super::errors::NotationError;
use super::types::{BonusBall, FrameShape, FreshBall, PartialBall};

pub(super) const MAX_BALLS: usize = 3;
const PINS_PER_RACK: u32 = 10;

/// One raw symbol of the notation alphabet, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Strike,
    Spare,
    Miss,
    Digit(u8),
}

/// Where the grammar landed after consuming the whole string.
enum Parsed {
    /// A complete legal frame.
    Frame(FrameShape),
    /// Legal so far; the frame is not yet decided (empty, one ball, `X?`).
    Prefix,
    /// The frame earned a mandatory third ball that is still missing.
    AwaitingBonus,
}

/// Interactive validation: accepts every prefix of a legal frame so callers
/// can validate while the user is still typing, and rejects only strings that
/// cannot be completed legally.
pub fn validate_notation(input: &str) -> Result<(), NotationError> {
    let symbols = lex(input)?;
    run_grammar(&symbols).map(|_| ())
}

/// Strict validation used before a game record is accepted: the string must
/// be a complete legal frame. Unfinished strings come back as the soft
/// [`NotationError::MissingRequiredThirdBall`] / [`NotationError::IncompleteFrame`].
pub fn parse_complete_notation(input: &str) -> Result<FrameShape, NotationError> {
    let symbols = lex(input)?;
    match run_grammar(&symbols)? {
        Parsed::Frame(shape) => Ok(shape),
        Parsed::AwaitingBonus => Err(NotationError::MissingRequiredThirdBall),
        Parsed::Prefix => Err(NotationError::IncompleteFrame),
    }
}

fn lex(input: &str) -> Result<Vec<Symbol>, NotationError> {
    input.trim().chars().map(symbol).collect()
}

fn symbol(c: char) -> Result<Symbol, NotationError> {
    match c.to_ascii_uppercase() {
        'X' => Ok(Symbol::Strike),
        '/' => Ok(Symbol::Spare),
        '-' => Ok(Symbol::Miss),
        digit @ '0'..='9' => Ok(Symbol::Digit(digit as u8 - b'0')),
        _ => Err(NotationError::InvalidCharacter(c)),
    }
}

fn run_grammar(symbols: &[Symbol]) -> Result<Parsed, NotationError> {
    if symbols.len() > MAX_BALLS {
        return Err(NotationError::TooManyBalls);
    }
    let second = symbols.get(1).copied();
    let third = symbols.get(2).copied();

    match symbols.first().copied() {
        None => Ok(Parsed::Prefix),
        Some(Symbol::Spare) => Err(NotationError::SpareAsFirstBall),
        Some(Symbol::Strike) => strike_frame(second, third),
        Some(Symbol::Miss) => count_frame(PartialBall::Miss, second, third),
        Some(Symbol::Digit(d)) => count_frame(PartialBall::Pins(d), second, third),
    }
}

/// Frames opening with a strike: `X ? ?`.
fn strike_frame(second: Option<Symbol>, third: Option<Symbol>) -> Result<Parsed, NotationError> {
    match second {
        None => Ok(Parsed::Prefix),
        Some(Symbol::Spare) => Err(NotationError::SpareAfterStrike),
        Some(Symbol::Strike) => match third {
            None => Ok(Parsed::AwaitingBonus),
            // Ball three lands on a fresh rack: nothing stands to convert.
            Some(Symbol::Spare) => Err(NotationError::SpareAfterStrike),
            Some(Symbol::Strike) => frame(FrameShape::DoubleStrike {
                bonus: FreshBall::Strike,
            }),
            Some(Symbol::Miss) => frame(FrameShape::DoubleStrike {
                bonus: FreshBall::Miss,
            }),
            Some(Symbol::Digit(d)) => frame(FrameShape::DoubleStrike {
                bonus: FreshBall::Pins(d),
            }),
        },
        Some(Symbol::Miss) => strike_then_count(PartialBall::Miss, third),
        Some(Symbol::Digit(d)) => strike_then_count(PartialBall::Pins(d), third),
    }
}

/// `X v ?`: a strike followed by a counted ball; the third is mandatory.
fn strike_then_count(second: PartialBall, third: Option<Symbol>) -> Result<Parsed, NotationError> {
    match third {
        None => Ok(Parsed::AwaitingBonus),
        Some(Symbol::Spare) => frame(FrameShape::StrikeSpare { second }),
        // A full clear of a standing rack is written `/`, never `X`.
        Some(Symbol::Strike) => Err(NotationError::StrikeAfterPartialKnockdown),
        Some(Symbol::Miss) => strike_open(second, PartialBall::Miss),
        Some(Symbol::Digit(d)) => strike_open(second, PartialBall::Pins(d)),
    }
}

fn strike_open(second: PartialBall, third: PartialBall) -> Result<Parsed, NotationError> {
    check_rack_sum(second, third)?;
    frame(FrameShape::StrikeOpen { second, third })
}

/// Frames opening with a counted ball: `v ? ?`.
fn count_frame(
    first: PartialBall,
    second: Option<Symbol>,
    third: Option<Symbol>,
) -> Result<Parsed, NotationError> {
    match second {
        None => Ok(Parsed::Prefix),
        Some(Symbol::Strike) => Err(NotationError::StrikeAfterNonStrikeSecondBall),
        Some(Symbol::Spare) => match third {
            None => Ok(Parsed::AwaitingBonus),
            // The bonus ball after a spare may be any symbol and closes the frame.
            Some(bonus) => frame(FrameShape::Spare {
                first,
                bonus: bonus_ball(bonus),
            }),
        },
        Some(Symbol::Miss) => open_frame(first, PartialBall::Miss, third),
        Some(Symbol::Digit(d)) => open_frame(first, PartialBall::Pins(d), third),
    }
}

fn open_frame(
    first: PartialBall,
    second: PartialBall,
    third: Option<Symbol>,
) -> Result<Parsed, NotationError> {
    check_rack_sum(first, second)?;
    match third {
        None => frame(FrameShape::Open { first, second }),
        Some(_) if first == PartialBall::Miss && second == PartialBall::Miss => {
            Err(NotationError::ThirdBallAfterDoubleMiss)
        }
        Some(_) => Err(NotationError::ThirdBallAfterNonSpareOpen),
    }
}

fn check_rack_sum(first: PartialBall, second: PartialBall) -> Result<(), NotationError> {
    if first.pins() + second.pins() > PINS_PER_RACK {
        return Err(NotationError::PinSumExceedsTen {
            first: first.pins() as u8,
            second: second.pins() as u8,
        });
    }
    Ok(())
}

fn bonus_ball(symbol: Symbol) -> BonusBall {
    match symbol {
        Symbol::Strike => BonusBall::Strike,
        Symbol::Spare => BonusBall::Spare,
        Symbol::Miss => BonusBall::Miss,
        Symbol::Digit(d) => BonusBall::Pins(d),
    }
}

fn frame(shape: FrameShape) -> Result<Parsed, NotationError> {
    Ok(Parsed::Frame(shape))
}
