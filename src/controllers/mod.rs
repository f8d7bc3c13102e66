pub mod explorer;

pub use explorer::{ExplorerConfig, explorer_controller};
