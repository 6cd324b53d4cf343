mod routes;
mod session;
mod taps;

pub use session::RouteSession;

use crate::{
    api::{DynMapView, DynNavigator},
    config::RouteOptions,
    entities::{GeoPoint, Route, RouteRequest, RouteResponse, WaypointSet},
    error::Error,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Empty,
    Single,
    Pending,
    Routed,
    NoRoute,
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Single => "single",
            Self::Pending => "pending",
            Self::Routed => "routed",
            Self::NoRoute => "no_route",
        }
    }
}

#[derive(Debug)]
pub enum Event {
    MapClicked(GeoPoint),
    MarkerClicked(GeoPoint),
    RouteFetched {
        request: RouteRequest,
        result: Result<Option<RouteResponse>, Error>,
    },
    StartNavigation,
    Shutdown,
}

/// Waypoint selection and route lifecycle for one map view.
///
/// Events must be handed in one at a time; the caller runs the returned
/// [`RouteRequest`] and reports back with [`Event::RouteFetched`].
pub struct Controller {
    options: RouteOptions,
    map: DynMapView,
    navigator: DynNavigator,
    waypoints: WaypointSet,
    session: RouteSession,
    pending: Option<RouteRequest>,
    sequence: u64,
    navigation_visible: bool,
}

impl Controller {
    pub fn new(options: RouteOptions, map: DynMapView, navigator: DynNavigator) -> Self {
        Self {
            options,
            map,
            navigator,
            waypoints: WaypointSet::new(),
            session: RouteSession::new(),
            pending: None,
            sequence: 0,
            navigation_visible: false,
        }
    }

    pub fn state(&self) -> State {
        match self.waypoints.len() {
            0 => State::Empty,
            1 => State::Single,
            _ if self.pending.is_some() => State::Pending,
            _ if self.session.current_route().is_some() => State::Routed,
            _ => State::NoRoute,
        }
    }

    pub fn waypoints(&self) -> &WaypointSet {
        &self.waypoints
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.session.current_route()
    }

    pub fn navigation_visible(&self) -> bool {
        self.navigation_visible
    }

    #[tracing::instrument(name = "Controller::handle", skip(self))]
    pub fn handle(&mut self, event: Event) -> Option<RouteRequest> {
        let request = match event {
            Event::MapClicked(point) => self.map_clicked(point),
            Event::MarkerClicked(point) => {
                self.marker_clicked(point);
                None
            }
            Event::RouteFetched { request, result } => {
                self.route_fetched(request, result);
                None
            }
            Event::StartNavigation => {
                self.start_navigation();
                None
            }
            Event::Shutdown => None,
        };

        self.sync_navigation_control();

        tracing::debug!(state = self.state().name(), "handled event");

        request
    }

    fn sync_navigation_control(&mut self) {
        let visible = self.state() == State::Routed;

        if visible != self.navigation_visible {
            self.navigation_visible = visible;
            self.map.set_navigation_visible(visible);
        }
    }
}
