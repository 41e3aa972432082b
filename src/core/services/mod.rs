pub mod asset_service;
pub mod debt_service;
pub mod projection_service;
pub mod recurring_service;

pub use asset_service::AssetService;
pub use debt_service::DebtService;
pub use projection_service::ProjectionService;
pub use recurring_service::RecurringService;
