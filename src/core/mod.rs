//! Service layer: validated mutation of profiles and composition of the
//! pure engines with clock and currency context.

pub mod board_editor;
pub mod services;

pub use board_editor::{BoardEditor, CardMove};
pub use services::{AssetService, DebtService, ProjectionService, RecurringService};
