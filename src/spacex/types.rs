// SpaceX API response types.
// Wire shapes for the v5 launches endpoint and their conversion into launch records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{LaunchOutcome, LaunchRecord, Links, Patch};

/// A launch as returned by `GET /launches`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLaunch {
    pub flight_number: u32,
    pub name: String,
    pub date_utc: DateTime<Utc>,
    pub success: Option<bool>,
    pub details: Option<String>,
    pub rocket: Option<String>,
    #[serde(default)]
    pub links: ApiLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLinks {
    #[serde(default)]
    pub patch: ApiPatch,
    pub article: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPatch {
    pub small: Option<String>,
    pub large: Option<String>,
}

impl From<ApiLaunch> for LaunchRecord {
    fn from(launch: ApiLaunch) -> Self {
        let links = Links {
            patch: Patch {
                small: launch.links.patch.small,
                large: launch.links.patch.large,
            },
            article: launch.links.article,
        };

        LaunchRecord::new(
            launch.flight_number,
            launch.name,
            launch.date_utc,
            LaunchOutcome::from(launch.success),
        )
        .with_details(launch.details)
        .with_rocket(launch.rocket)
        .with_links(links)
    }
}

/// Decode a launches response body into records, keeping response order.
pub fn decode_launches(body: &str) -> Result<Vec<LaunchRecord>, serde_json::Error> {
    let launches: Vec<ApiLaunch> = serde_json::from_str(body)?;
    Ok(launches.into_iter().map(LaunchRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "fairings": null,
            "links": {
                "patch": {
                    "small": "https://images2.imgbox.com/94/f2/NN6Ph45r_o.png",
                    "large": "https://images2.imgbox.com/5b/02/QcxHUb5V_o.png"
                },
                "article": "https://www.space.com/2196-spacex-inaugural-falcon-1-rocket-lost-launch.html"
            },
            "flight_number": 1,
            "name": "FalconSat",
            "date_utc": "2006-03-24T22:30:00.000Z",
            "success": false,
            "details": "Engine failure at 33 seconds and loss of vehicle",
            "rocket": "5e9d0d95eda69955f709d1eb"
        },
        {
            "flight_number": 187,
            "name": "Crew-5",
            "date_utc": "2022-10-05T16:00:00.000Z",
            "success": null,
            "details": "   ",
            "rocket": "5e9d0d95eda69973a809d1ec",
            "links": { "patch": { "small": null, "large": null }, "article": null }
        },
        {
            "flight_number": 6,
            "name": "Falcon 9 Test",
            "date_utc": "2010-06-04T18:45:00.000Z",
            "success": true,
            "details": null,
            "rocket": null
        }
    ]"#;

    #[test]
    fn test_decode_launches() {
        let launches = decode_launches(SAMPLE).unwrap();
        assert_eq!(launches.len(), 3);

        let falconsat = &launches[0];
        assert_eq!(falconsat.flight_number(), 1);
        assert_eq!(falconsat.mission_name(), "FalconSat");
        assert_eq!(falconsat.launch_year(), 2006);
        assert_eq!(falconsat.outcome(), LaunchOutcome::Failure);
        assert_eq!(
            falconsat.details(),
            Some("Engine failure at 33 seconds and loss of vehicle")
        );
        assert_eq!(falconsat.rocket(), Some("5e9d0d95eda69955f709d1eb"));
        assert!(falconsat.links().patch.small.is_some());
        assert!(falconsat.links().article.is_some());
    }

    #[test]
    fn test_decode_normalizes_unknown_outcome_and_blank_details() {
        let launches = decode_launches(SAMPLE).unwrap();

        let crew_5 = &launches[1];
        assert_eq!(crew_5.outcome(), LaunchOutcome::Unknown);
        assert_eq!(crew_5.details(), None);

        let test_flight = &launches[2];
        assert_eq!(test_flight.outcome(), LaunchOutcome::Success);
        assert_eq!(test_flight.details(), None);
        assert_eq!(test_flight.links(), &Links::default());
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(decode_launches("<html>bad gateway</html>").is_err());
        assert!(decode_launches(r#"[{"name": "no flight number"}]"#).is_err());
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode_launches("[]").unwrap().is_empty());
    }
}
