use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

/// Tunables for the difficulty policy and question catalog. The defaults are
/// the shipped game; a config file can override them per deployment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Options {
    /// A lead below this puts a human on the easy pool.
    pub trailing_lead: i32,
    /// A lead above this puts a human on the hard pool.
    pub leading_lead: i32,
    /// Win estimates below this ease the automated player's own gate.
    pub ai_assist_threshold: f32,
    /// How many distinct hard questions join the blended pool.
    pub hard_sample_size: usize,
    /// Optional path to a JSON question catalog replacing the built-in one.
    pub questions_file: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            trailing_lead: -10,
            leading_lead: 10,
            ai_assist_threshold: 0.4,
            hard_sample_size: 10,
            questions_file: None,
        }
    }
}

impl Config for Options {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Options::default();

        Ok(Self {
            trailing_lead: config
                .get("trailing_lead")
                .and_then(|v| v.as_i32())
                .unwrap_or(defaults.trailing_lead),
            leading_lead: config
                .get("leading_lead")
                .and_then(|v| v.as_i32())
                .unwrap_or(defaults.leading_lead),
            ai_assist_threshold: config
                .get("ai_assist_threshold")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.ai_assist_threshold),
            hard_sample_size: config
                .get("hard_sample_size")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.hard_sample_size),
            questions_file: config.get("questions_file").and_then(|v| v.as_string()),
        })
    }
}
