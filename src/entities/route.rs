use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::entities::GeoPoint;
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(invalid_input_error()),
        }
    }
}

/// A computed path. Its geometry is only carried along, never interpreted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub token: Uuid,
    pub distance: f64,
    pub duration: f64,
    pub geometry: serde_json::Value,
    pub data: serde_json::Value,
}

impl Route {
    pub fn new(distance: f64, duration: f64, geometry: serde_json::Value, data: serde_json::Value) -> Self {
        Self {
            token: Uuid::new_v4(),
            distance,
            duration,
            geometry,
            data,
        }
    }
}

/// Candidate routes in the service's order of preference.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteResponse {
    pub routes: Vec<Route>,
}

impl RouteResponse {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn into_first(self) -> Option<Route> {
        self.routes.into_iter().next()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub sequence: u64,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub units: Units,
}

impl RouteRequest {
    pub fn answers(&self, endpoints: Option<(GeoPoint, GeoPoint)>) -> bool {
        endpoints == Some((self.origin, self.destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn units_parse() {
        assert_eq!("Metric".parse::<Units>(), Ok(Units::Metric));
        assert_eq!(" imperial ".parse::<Units>(), Ok(Units::Imperial));
        assert!("furlongs".parse::<Units>().is_err());
    }

    #[test]
    fn first_route_wins() {
        let first = Route::new(100.0, 10.0, json!("a"), json!({}));
        let second = Route::new(50.0, 5.0, json!("b"), json!({}));
        let token = first.token;

        let response = RouteResponse::new(vec![first, second]);

        assert_eq!(response.into_first().map(|r| r.token), Some(token));
        assert!(RouteResponse::default().into_first().is_none());
    }
}
