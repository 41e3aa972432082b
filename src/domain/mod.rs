//! Profile domain models, persistence-friendly types, and helpers.

pub mod asset;
pub mod board;
pub mod debt;
pub mod profile;
pub mod recurring;
pub mod settings;

pub use asset::{starting_assets, AssetHolding};
pub use board::{Board, BoardColumn, Card};
pub use debt::Debt;
pub use profile::Profile;
pub use recurring::{FlowKind, Frequency, RecurringItem};
pub use settings::ProjectionSettings;
