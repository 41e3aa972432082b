pub mod json_backend;

use crate::{domain::Profile, errors::CoreError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Abstraction over persistence backends capable of storing profile
/// snapshots. The engines never see this trait; only the CLI and services
/// that assemble their inputs do.
pub trait StorageBackend: Send + Sync {
    fn save(&self, profile: &Profile, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Profile>;
    fn exists(&self, name: &str) -> bool;
    fn list_profiles(&self) -> Result<Vec<String>>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, profile: &Profile, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Profile>;
}

pub use json_backend::JsonStorage;
