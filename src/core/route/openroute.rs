//! OpenRouteService client (geocode search + driving-car directions).

use super::{Coordinates, RouteProvider, RouteSummary};
use crate::config::RoutingConfig;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub struct OpenRouteService {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    summary: Summary,
}

// ORS omits both fields for zero-length routes.
#[derive(Deserialize)]
struct Summary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

impl OpenRouteService {
    /// Build a client from the routing config. The API key is read from the
    /// environment variable named by `api_key_env`.
    pub fn from_config(cfg: &RoutingConfig) -> AppResult<Self> {
        let api_key = env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::MissingApiKey(cfg.api_key_env.clone()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl RouteProvider for OpenRouteService {
    fn geocode(&self, address: &str) -> AppResult<Coordinates> {
        let url = format!("{}/geocode/search", self.base_url);

        let data: GeocodeResponse = self
            .client
            .get(url)
            .header("Authorization", &self.api_key)
            .query(&[("text", address), ("size", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        match data.features.first().map(|f| f.geometry.coordinates.as_slice()) {
            Some([lng, lat, ..]) => Ok(Coordinates {
                lng: *lng,
                lat: *lat,
            }),
            _ => Err(AppError::AddressNotFound(address.to_string())),
        }
    }

    fn leg(&self, from: Coordinates, to: Coordinates) -> AppResult<RouteSummary> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);

        let body = serde_json::json!({
            "coordinates": [[from.lng, from.lat], [to.lng, to.lat]],
            "instructions": false,
        });

        let data: DirectionsResponse = self
            .client
            .post(url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let route = data
            .routes
            .first()
            .ok_or_else(|| AppError::Routing("directions response contains no route".into()))?;

        Ok(RouteSummary::from_metric(
            route.summary.distance,
            route.summary.duration,
        ))
    }
}
