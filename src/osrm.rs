//! OSRM HTTP adapter for public road routing.

use serde::Deserialize;

use crate::traits::{RoadRouter, RouterError};
use crate::types::{Point, TransportMode};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RoadRouter for OsrmClient {
    fn route_between(
        &self,
        start: Point,
        end: Point,
        mode: TransportMode,
    ) -> Result<Vec<Point>, RouterError> {
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url,
            mode.osrm_profile(),
            start.lng,
            start.lat,
            end.lng,
            end.lat
        );

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())
            .map_err(|err| RouterError::Unavailable(err.to_string()))?;

        if body.code != "Ok" {
            return Err(RouterError::BadStatus(body.code));
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RouterError::BadStatus("empty route list".to_string()))?;

        // OSRM geometry positions are [lng, lat].
        Ok(route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| Point::new(lat, lng))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
