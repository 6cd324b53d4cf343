use crate::api::MapView;
use crate::entities::Route;

/// The route currently shown on the map, if any. At most one is drawn at a time.
#[derive(Debug, Default)]
pub struct RouteSession {
    route: Option<Route>,
    drawn: bool,
}

impl RouteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current route. The previous overlay is always retracted
    /// before the new one is drawn.
    pub fn set_route(&mut self, map: &dyn MapView, route: Option<Route>) {
        if self.drawn {
            map.retract_route();
            self.drawn = false;
        }

        if let Some(route) = &route {
            map.draw_route(route);
            self.drawn = true;
        }

        self.route = route;
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn is_drawn(&self) -> bool {
        self.drawn
    }
}
