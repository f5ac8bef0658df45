//! Route resolution: turns the trip's three stops into total miles and hours.
//!
//! Providers only report failures. Whether a failure is fatal or replaced by
//! the configured fallback figures is decided here, and the caller always
//! learns which of the two happened through [`RouteOutcome`].

pub mod openroute;

use crate::config::RoutingConfig;
use crate::errors::AppResult;
use crate::models::route_source::RouteSource;

pub use openroute::OpenRouteService;

pub const METERS_PER_MILE: f64 = 1609.34;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

/// Aggregate figures for a route (or a single leg).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_miles: f64,
    pub duration_hours: f64,
}

impl RouteSummary {
    pub fn from_metric(meters: f64, seconds: f64) -> Self {
        Self {
            distance_miles: meters / METERS_PER_MILE,
            duration_hours: seconds / SECONDS_PER_HOUR,
        }
    }

    fn add(self, other: RouteSummary) -> Self {
        Self {
            distance_miles: self.distance_miles + other.distance_miles,
            duration_hours: self.duration_hours + other.duration_hours,
        }
    }
}

/// The addresses a trip passes through, in order.
#[derive(Debug, Clone, Copy)]
pub struct TripStops<'a> {
    pub current: &'a str,
    pub pickup: &'a str,
    pub dropoff: &'a str,
}

/// External geocoding/directions service.
pub trait RouteProvider {
    fn geocode(&self, address: &str) -> AppResult<Coordinates>;

    fn leg(&self, from: Coordinates, to: Coordinates) -> AppResult<RouteSummary>;

    /// current → pickup plus pickup → dropoff.
    fn trip_route(&self, stops: &TripStops<'_>) -> AppResult<RouteSummary> {
        let current = self.geocode(stops.current)?;
        let pickup = self.geocode(stops.pickup)?;
        let dropoff = self.geocode(stops.dropoff)?;

        let to_pickup = self.leg(current, pickup)?;
        let to_dropoff = self.leg(pickup, dropoff)?;

        Ok(to_pickup.add(to_dropoff))
    }
}

/// What to do when the provider cannot resolve the route.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    pub enabled: bool,
    pub summary: RouteSummary,
}

impl FallbackPolicy {
    pub fn from_config(cfg: &RoutingConfig) -> Self {
        Self {
            enabled: cfg.use_fallback,
            summary: RouteSummary {
                distance_miles: cfg.fallback_distance_miles,
                duration_hours: cfg.fallback_duration_hours,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Computed(RouteSummary),
    Fallback {
        summary: RouteSummary,
        reason: String,
    },
}

impl RouteOutcome {
    pub fn summary(&self) -> RouteSummary {
        match self {
            RouteOutcome::Computed(s) => *s,
            RouteOutcome::Fallback { summary, .. } => *summary,
        }
    }

    pub fn source(&self) -> RouteSource {
        match self {
            RouteOutcome::Computed(_) => RouteSource::Computed,
            RouteOutcome::Fallback { .. } => RouteSource::Fallback,
        }
    }
}

/// Resolve the trip route, applying `policy` when anything fails.
///
/// `provider` is a Result so that construction failures (missing API key,
/// HTTP client setup) go through the same fallback path as request failures.
pub fn resolve<P: RouteProvider>(
    provider: AppResult<P>,
    stops: &TripStops<'_>,
    policy: &FallbackPolicy,
) -> AppResult<RouteOutcome> {
    match provider.and_then(|p| p.trip_route(stops)) {
        Ok(summary) => Ok(RouteOutcome::Computed(summary)),
        Err(e) if policy.enabled => Ok(RouteOutcome::Fallback {
            summary: policy.summary,
            reason: e.to_string(),
        }),
        Err(e) => Err(e),
    }
}
