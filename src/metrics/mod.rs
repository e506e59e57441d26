pub mod frame;

pub use frame::{GameMetrics, game_metrics};
