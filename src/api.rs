use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{GeoPoint, MarkerId, Route, RouteRequest, RouteResponse};
use crate::error::Error;

/// Directions service. `Ok(None)` means the service answered without a body.
#[async_trait]
pub trait RouteFetcher {
    async fn fetch_route(&self, request: RouteRequest) -> Result<Option<RouteResponse>, Error>;
}

/// Rendering side of the map. Implementations own every marker and overlay.
pub trait MapView {
    fn add_marker(&self, point: GeoPoint) -> MarkerId;
    fn remove_marker(&self, marker: MarkerId);
    fn draw_route(&self, route: &Route);
    fn retract_route(&self);
    fn set_navigation_visible(&self, visible: bool);
    fn show_notice(&self, message: &str);
}

/// Guided navigation flow. Takes over once launched.
pub trait Navigator {
    fn launch(&self, route: &Route, simulate: bool);
}

pub type DynRouteFetcher = Arc<dyn RouteFetcher + Send + Sync>;
pub type DynMapView = Arc<dyn MapView + Send + Sync>;
pub type DynNavigator = Arc<dyn Navigator + Send + Sync>;
