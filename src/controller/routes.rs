use super::{Controller, State};

use crate::{
    entities::{RouteRequest, RouteResponse},
    error::{empty_response_error, no_route_found_error, stale_result_error, Error},
};

impl Controller {
    pub(super) fn route_fetched(
        &mut self,
        request: RouteRequest,
        result: Result<Option<RouteResponse>, Error>,
    ) {
        if let Err(err) = self.accept(&request) {
            if err.is_stale_result() {
                tracing::debug!(sequence = request.sequence, "discarding {}", err.message);
            }
            return;
        }

        self.pending = None;

        let outcome = result.and_then(|response| {
            response
                .ok_or_else(empty_response_error)?
                .into_first()
                .ok_or_else(no_route_found_error)
        });

        match outcome {
            Ok(route) => {
                tracing::info!(
                    sequence = request.sequence,
                    distance = route.distance,
                    duration = route.duration,
                    "route available"
                );
                self.session.set_route(self.map.as_ref(), Some(route));
            }
            Err(err) => {
                tracing::warn!(sequence = request.sequence, "no route available: {}", err);
                self.session.set_route(self.map.as_ref(), None);
                self.map.show_notice(&notice(&err));
            }
        }
    }

    /// Only the latest request, for the waypoints still selected, may land.
    fn accept(&self, request: &RouteRequest) -> Result<(), Error> {
        match &self.pending {
            Some(pending)
                if pending.sequence == request.sequence
                    && request.answers(self.waypoints.endpoints()) =>
            {
                Ok(())
            }
            _ => Err(stale_result_error()),
        }
    }

    pub(super) fn start_navigation(&self) {
        match (self.state(), self.session.current_route()) {
            (State::Routed, Some(route)) => {
                tracing::info!(route = %route.token, "launching navigation");
                self.navigator.launch(route, self.options.simulate);
            }
            (state, _) => tracing::warn!("navigation requested in state {}", state.name()),
        }
    }
}

fn notice(err: &Error) -> String {
    if err.is_no_route_found() || err.is_empty_response() {
        return err.message.clone();
    }

    format!("Error occurred: {}", err.message)
}
