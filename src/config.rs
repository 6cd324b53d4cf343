use std::env;

use crate::entities::Units;
use crate::error::{invalid_input_error, Error};

const DEFAULT_API_BASE: &str = "api.mapbox.com";
const DEFAULT_PROFILE: &str = "driving";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteOptions {
    pub units: Units,
    pub simulate: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            units: Units::Imperial,
            simulate: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub access_token: String,
    pub api_base: String,
    pub profile: String,
    pub units: Units,
    pub simulate_navigation: bool,
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let access_token = lookup("MAPBOX_ACCESS_TOKEN")?;
        let api_base = lookup("MAPBOX_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let profile = lookup("MAPBOX_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE.into());

        let units = match lookup("ROUTE_UNITS") {
            Ok(value) => value.parse::<Units>()?,
            Err(_) => RouteOptions::default().units,
        };

        let simulate_navigation = match lookup("SIMULATE_NAVIGATION") {
            Ok(value) => parse_flag(&value)?,
            Err(_) => RouteOptions::default().simulate,
        };

        Ok(Self {
            access_token,
            api_base,
            profile,
            units,
            simulate_navigation,
        })
    }

    pub fn route_options(&self) -> RouteOptions {
        RouteOptions {
            units: self.units,
            simulate: self.simulate_navigation,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(invalid_input_error()),
    }
}
