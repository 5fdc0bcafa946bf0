// Launch domain types.
// Records are immutable once built; blank details and missing outcomes are normalized here.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a launch. `Unknown` means no result was reported and is
/// distinct from `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    Success,
    Failure,
    Unknown,
}

impl LaunchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchOutcome::Success => "Successful",
            LaunchOutcome::Failure => "Unsuccessful",
            LaunchOutcome::Unknown => "Unknown",
        }
    }
}

impl From<Option<bool>> for LaunchOutcome {
    fn from(success: Option<bool>) -> Self {
        match success {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failure,
            None => LaunchOutcome::Unknown,
        }
    }
}

/// Mission patch image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// External links for a launch. Carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub patch: Patch,
    pub article: Option<String>,
}

/// A single rocket launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    flight_number: u32,
    mission_name: String,
    launch_year: i32,
    launch_date_utc: DateTime<Utc>,
    outcome: LaunchOutcome,
    #[serde(default, deserialize_with = "deserialize_details")]
    details: Option<String>,
    #[serde(default)]
    rocket: Option<String>,
    #[serde(default)]
    links: Links,
}

impl LaunchRecord {
    pub fn new(
        flight_number: u32,
        mission_name: impl Into<String>,
        launch_date_utc: DateTime<Utc>,
        outcome: LaunchOutcome,
    ) -> Self {
        Self {
            flight_number,
            mission_name: mission_name.into(),
            launch_year: launch_date_utc.year(),
            launch_date_utc,
            outcome,
            details: None,
            rocket: None,
            links: Links::default(),
        }
    }

    pub fn with_details(mut self, details: Option<impl Into<String>>) -> Self {
        self.details = normalize_details(details.map(Into::into));
        self
    }

    pub fn with_rocket(mut self, rocket: Option<String>) -> Self {
        self.rocket = rocket;
        self
    }

    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    pub fn flight_number(&self) -> u32 {
        self.flight_number
    }

    pub fn mission_name(&self) -> &str {
        &self.mission_name
    }

    pub fn launch_year(&self) -> i32 {
        self.launch_year
    }

    pub fn launch_date_utc(&self) -> DateTime<Utc> {
        self.launch_date_utc
    }

    pub fn outcome(&self) -> LaunchOutcome {
        self.outcome
    }

    /// Free-text details, `None` when absent or blank.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn rocket(&self) -> Option<&str> {
        self.rocket.as_deref()
    }

    pub fn links(&self) -> &Links {
        &self.links
    }
}

/// Collapse absent, empty and whitespace-only text into `None`.
pub fn normalize_details(details: Option<String>) -> Option<String> {
    details.filter(|text| !text.trim().is_empty())
}

fn deserialize_details<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(normalize_details)
}
