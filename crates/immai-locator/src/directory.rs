//! Lawyer directory and nearby sort.

use immai_common::parse_yaml;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{haversine_km, Coordinates};
use crate::error::Result;

const BUNDLED_LAWYERS: &str = include_str!("../data/lawyers.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub coordinates: Coordinates,
}

/// A lawyer annotated with the distance from the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLawyer {
    #[serde(flatten)]
    pub lawyer: Lawyer,
    pub distance_km: f64,
}

#[derive(Debug, Deserialize)]
struct LawyersFile {
    lawyers: Vec<Lawyer>,
}

#[derive(Debug, Clone, Default)]
pub struct LawyerDirectory {
    lawyers: Vec<Lawyer>,
}

impl LawyerDirectory {
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_LAWYERS)
    }

    pub fn from_yaml(src: &str) -> Result<Self> {
        let file: LawyersFile = parse_yaml("lawyers", src)?;
        // Reject records the map could not place.
        for lawyer in &file.lawyers {
            Coordinates::new(lawyer.coordinates.lat, lawyer.coordinates.lng)?;
        }
        Ok(Self::new(file.lawyers))
    }

    pub fn new(lawyers: Vec<Lawyer>) -> Self {
        Self { lawyers }
    }

    /// All lawyers in directory order.
    pub fn all(&self) -> &[Lawyer] {
        &self.lawyers
    }

    /// Lawyers sorted by distance from `origin`, nearest first.
    ///
    /// Ties keep directory order. `limit` truncates after sorting.
    pub fn nearby(&self, origin: Coordinates, limit: Option<usize>) -> Vec<NearbyLawyer> {
        let mut ranked: Vec<NearbyLawyer> = self
            .lawyers
            .iter()
            .map(|lawyer| NearbyLawyer {
                distance_km: haversine_km(origin, lawyer.coordinates),
                lawyer: lawyer.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        if let Some(n) = limit {
            ranked.truncate(n);
        }

        debug!(
            lat = origin.lat,
            lng = origin.lng,
            returned = ranked.len(),
            "ranked lawyers by distance"
        );
        ranked
    }
}
