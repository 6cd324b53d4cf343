use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{MapView, Navigator};
use crate::entities::{GeoPoint, MarkerId, Route};

/// Map view that only logs what it is asked to render.
#[derive(Debug, Default)]
pub struct ConsoleMap {
    next_marker: AtomicU64,
}

impl MapView for ConsoleMap {
    fn add_marker(&self, point: GeoPoint) -> MarkerId {
        let marker = MarkerId(self.next_marker.fetch_add(1, Ordering::Relaxed));
        tracing::info!("marker {:?} added at {:?}", marker, point);
        marker
    }

    fn remove_marker(&self, marker: MarkerId) {
        tracing::info!("marker {:?} removed", marker);
    }

    fn draw_route(&self, route: &Route) {
        tracing::info!(
            "route {} drawn: {:.0} m, {:.0} s",
            route.token,
            route.distance,
            route.duration
        );
    }

    fn retract_route(&self) {
        tracing::info!("route retracted");
    }

    fn set_navigation_visible(&self, visible: bool) {
        tracing::info!("start navigation control visible: {}", visible);
    }

    fn show_notice(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn launch(&self, route: &Route, simulate: bool) {
        tracing::info!("navigation started on route {} (simulate: {})", route.token, simulate);
    }
}

#[test]
fn markers_are_distinct() {
    let map = ConsoleMap::default();

    let first = map.add_marker(GeoPoint::new(1.0, 2.0));
    let second = map.add_marker(GeoPoint::new(1.0, 2.0));

    assert_ne!(first, second);
}
