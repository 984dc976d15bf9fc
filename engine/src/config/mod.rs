// Engine configuration module
pub mod costs;
pub mod settings;

pub use costs::CostModel;
pub use settings::EngineSettings;
