use thiserror::Error;

/// Everything the tenth-frame grammar can object to, one variant per rule so
/// the input form can show the exact reason next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("'{0}' is not a tenth-frame symbol (use 0-9, X, / or -)")]
    InvalidCharacter(char),
    #[error("a spare cannot follow a strike: the rack was already cleared")]
    SpareAfterStrike,
    #[error("a spare needs a first ball in front of it")]
    SpareAsFirstBall,
    #[error("a strike is only possible on the second ball after an opening strike")]
    StrikeAfterNonStrikeSecondBall,
    #[error("no strike is possible while pins from the previous ball still stand")]
    StrikeAfterPartialKnockdown,
    #[error("two misses close the frame, no third ball is thrown")]
    ThirdBallAfterDoubleMiss,
    #[error("an open frame ends after two balls, no third ball is thrown")]
    ThirdBallAfterNonSpareOpen,
    #[error("{first} and {second} would knock down more than ten pins on one rack")]
    PinSumExceedsTen { first: u8, second: u8 },
    #[error("this frame earned a third ball that has not been thrown yet")]
    MissingRequiredThirdBall,
    #[error("the frame is not finished yet")]
    IncompleteFrame,
    #[error("the tenth frame never takes more than three balls")]
    TooManyBalls,
}

impl NotationError {
    /// Soft states: the string is a legal frame that simply is not finished.
    /// Interactive callers keep accepting keystrokes on these; record
    /// construction treats them as failures like any other variant.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            NotationError::MissingRequiredThirdBall | NotationError::IncompleteFrame
        )
    }
}
