// Launch list front end.
// Chooses how a request is answered and renders the resulting list for the terminal.

use crate::error::Result;
use crate::model::LaunchRecord;
use crate::service::{LaunchService, LaunchSource, LaunchStore};

const DIVIDER: &str = "────────────────────────────────────────";

/// How the caller wants the list answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Serve the cache, fetching only if it is empty.
    #[default]
    Cached,
    /// Always fetch and replace the cache.
    ForceReload,
    /// Serve the cache only, never fetch.
    Offline,
}

impl LoadMode {
    pub fn from_flags(force_reload: bool, offline: bool) -> Self {
        match (force_reload, offline) {
            (true, _) => LoadMode::ForceReload,
            (false, true) => LoadMode::Offline,
            (false, false) => LoadMode::Cached,
        }
    }
}

/// Load launches through the service according to `mode`.
pub async fn load<S, R>(service: &LaunchService<S, R>, mode: LoadMode) -> Result<Vec<LaunchRecord>>
where
    S: LaunchSource,
    R: LaunchStore,
{
    match mode {
        LoadMode::Cached => service.get_launches(false).await,
        LoadMode::ForceReload => service.get_launches(true).await,
        LoadMode::Offline => service.cached().await,
    }
}

/// Render one launch as a text block.
pub fn render_launch(launch: &LaunchRecord) -> String {
    let mut out = format!("{} - {}\n", launch.mission_name(), launch.launch_year());
    out.push_str(launch.outcome().label());
    out.push('\n');
    if let Some(details) = launch.details() {
        out.push_str(details);
        out.push('\n');
    }
    out
}

/// Render the whole list, one block per launch separated by dividers.
pub fn render_launches(launches: &[LaunchRecord]) -> String {
    if launches.is_empty() {
        return "No launches.\n".to_string();
    }

    let mut out = String::new();
    for launch in launches {
        out.push_str(&render_launch(launch));
        out.push_str(DIVIDER);
        out.push('\n');
    }
    out
}

/// Render the list as pretty JSON.
pub fn render_json(launches: &[LaunchRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(launches)
}
