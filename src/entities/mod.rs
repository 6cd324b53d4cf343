mod geo_point;
mod route;
mod waypoint;

pub use geo_point::GeoPoint;
pub use route::{Route, RouteRequest, RouteResponse, Units};
pub use waypoint::{MarkerId, Waypoint, WaypointSet, CAPACITY};
