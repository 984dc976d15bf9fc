// Engine settings, potentially loaded from a config file or environment variables
use std::path::PathBuf;

use serde::Deserialize;

use super::costs::CostModel;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Cost model variant applied to every valuation served by this process.
    pub cost_model: CostModel,
    /// Directory exported reports are written to.
    pub report_output_dir: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            cost_model: CostModel::default(),
            report_output_dir: PathBuf::from("."),
        }
    }
}

// TODO: Implement loading these settings from a configuration file so the
// cost model variant can be switched per deployment.
