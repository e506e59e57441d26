pub mod settings;

pub use settings::{LedgerSettings, StatsSettings};
