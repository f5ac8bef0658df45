use serde::Serialize;

/// Where a trip's total distance and duration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Resolved through the routing provider.
    Computed,
    /// Provider failed; configured fallback figures were used.
    Fallback,
    /// Given on the command line.
    Manual,
}

impl RouteSource {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RouteSource::Computed => "computed",
            RouteSource::Fallback => "fallback",
            RouteSource::Manual => "manual",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "computed" => Some(RouteSource::Computed),
            "fallback" => Some(RouteSource::Fallback),
            "manual" => Some(RouteSource::Manual),
            _ => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RouteSource::Fallback)
    }
}
