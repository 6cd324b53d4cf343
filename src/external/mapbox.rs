use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    api::RouteFetcher,
    config::Config,
    entities::{Route, RouteRequest, RouteResponse},
    error::{upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    distance: f64,
    duration: f64,
    #[serde(default)]
    geometry: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<serde_json::Value>,
}

#[derive(Clone, Debug)]
pub struct MapboxDirections {
    client: reqwest::Client,
    api_base: String,
    profile: String,
    access_token: String,
}

impl MapboxDirections {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            profile: config.profile.clone(),
            access_token: config.access_token.clone(),
        }
    }

    fn url(&self, request: &RouteRequest) -> String {
        let origin: String = request.origin.into();
        let destination: String = request.destination.into();

        format!(
            "https://{}/directions/v5/mapbox/{}/{};{}",
            self.api_base, self.profile, origin, destination
        )
    }
}

#[async_trait]
impl RouteFetcher for MapboxDirections {
    #[tracing::instrument(skip(self))]
    async fn fetch_route(&self, request: RouteRequest) -> Result<Option<RouteResponse>, Error> {
        let res = self
            .client
            .get(self.url(&request))
            .query(&[("access_token", self.access_token.as_str())])
            .query(&[("alternatives", "true")])
            .query(&[("geometries", "polyline6")])
            .query(&[("overview", "full")])
            .query(&[("steps", "true")])
            .query(&[("voice_instructions", "true")])
            .query(&[("banner_instructions", "true")])
            .query(&[("voice_units", request.units.name())])
            .send()
            .await?;

        let status_code = res.status().as_u16();
        let body = res.text().await?;

        parse_directions(status_code, &body)
    }
}

fn parse_directions(status_code: u16, body: &str) -> Result<Option<RouteResponse>, Error> {
    // rejected requests (bad token, bad profile) come back without a usable body
    if !(200..300).contains(&status_code) {
        tracing::warn!("directions request rejected with status {}", status_code);
        return Ok(None);
    }

    let data: Response = serde_json::from_str(body)?;

    match data.code.as_str() {
        "Ok" => {}
        "NoRoute" | "NoSegment" => return Ok(Some(RouteResponse::default())),
        code => {
            tracing::warn!("directions error {}: {:?}", code, data.message);
            return Err(upstream_error());
        }
    }

    let routes = data
        .routes
        .into_iter()
        .map(|raw| -> Result<Route, Error> {
            let route: DirectionsRoute = serde_json::from_value(raw.clone())?;
            Ok(Route::new(route.distance, route.duration, route.geometry, raw))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(RouteResponse::new(routes)))
}
