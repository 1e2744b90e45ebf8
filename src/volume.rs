use crate::config::DemoConfig;
use crate::runner::CommandSpec;
use serde::Deserialize;

/// One entry of `docker volume inspect` output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeInfo {
    pub name: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub mountpoint: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `docker volume inspect <volume>`
pub fn inspect(config: &DemoConfig) -> CommandSpec {
    CommandSpec::new(&config.runtime_program).args(["volume", "inspect", config.volume.as_str()])
}

/// Decode inspect output; docker prints a JSON array even for one volume
pub fn parse_inspect(raw: &str) -> serde_json::Result<Vec<VolumeInfo>> {
    serde_json::from_str(raw)
}
