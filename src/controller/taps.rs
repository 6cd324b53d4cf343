use super::Controller;

use crate::entities::{GeoPoint, RouteRequest, Waypoint};

impl Controller {
    pub(super) fn map_clicked(&mut self, point: GeoPoint) -> Option<RouteRequest> {
        if !point.is_valid() {
            tracing::warn!("ignoring tap at invalid point {:?}", point);
            return None;
        }

        // removal wins over addition when the tap lands on a selected point
        if self.waypoints.contains(&point) {
            tracing::debug!("map tap on a selected waypoint, removing it");
            self.marker_clicked(point);
            return None;
        }

        if let Some(evicted) = self.waypoints.evict_destination() {
            tracing::debug!("evicting destination {:?}", evicted.point);
            self.map.remove_marker(evicted.marker);
        }

        let marker = self.map.add_marker(point);
        self.waypoints.add(Waypoint::new(point, marker));

        self.waypoints_changed()
    }

    pub(super) fn marker_clicked(&mut self, point: GeoPoint) {
        match self.waypoints.remove_matching(&point) {
            Some(removed) => {
                self.map.remove_marker(removed.marker);
                self.waypoints_changed();
            }
            None => tracing::debug!("marker at {:?} is not a waypoint", point),
        }
    }

    /// Drops the drawn route and any in-flight request, then asks for a new
    /// route if both endpoints are selected.
    fn waypoints_changed(&mut self) -> Option<RouteRequest> {
        self.session.set_route(self.map.as_ref(), None);
        self.pending = None;

        let (origin, destination) = self.waypoints.endpoints()?;

        self.sequence += 1;
        let request = RouteRequest {
            sequence: self.sequence,
            origin,
            destination,
            units: self.options.units,
        };
        self.pending = Some(request);

        tracing::info!(
            sequence = request.sequence,
            "requesting route {:?} -> {:?}",
            origin,
            destination
        );

        Some(request)
    }
}
