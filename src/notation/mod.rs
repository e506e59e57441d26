pub mod derive;
pub mod errors;
pub mod grammar;
pub mod types;

pub use derive::derive_tenth_frame;
pub use errors::NotationError;
pub use grammar::{parse_complete_notation, validate_notation};
pub use types::{BonusBall, FrameShape, FreshBall, PartialBall, TenthFrameResult};
