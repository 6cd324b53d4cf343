use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::api::{MapView, Navigator, RouteFetcher};
use crate::entities::{GeoPoint, MarkerId, Route, RouteRequest, RouteResponse};
use crate::error::Error;

pub fn route() -> Route {
    Route::new(1000.0, 120.0, json!("_ibE_seK"), json!({}))
}

pub fn response(routes: usize) -> RouteResponse {
    RouteResponse::new((0..routes).map(|_| route()).collect())
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapCommand {
    AddMarker(GeoPoint, MarkerId),
    RemoveMarker(MarkerId),
    DrawRoute(Uuid),
    RetractRoute,
    NavigationVisible(bool),
    Notice(String),
}

#[derive(Default)]
pub struct RecordingMap {
    commands: Mutex<Vec<MapCommand>>,
    next_marker: AtomicU64,
}

impl RecordingMap {
    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }

    fn record(&self, command: MapCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl MapView for RecordingMap {
    fn add_marker(&self, point: GeoPoint) -> MarkerId {
        let marker = MarkerId(self.next_marker.fetch_add(1, Ordering::SeqCst) + 1);
        self.record(MapCommand::AddMarker(point, marker));
        marker
    }

    fn remove_marker(&self, marker: MarkerId) {
        self.record(MapCommand::RemoveMarker(marker));
    }

    fn draw_route(&self, route: &Route) {
        self.record(MapCommand::DrawRoute(route.token));
    }

    fn retract_route(&self) {
        self.record(MapCommand::RetractRoute);
    }

    fn set_navigation_visible(&self, visible: bool) {
        self.record(MapCommand::NavigationVisible(visible));
    }

    fn show_notice(&self, message: &str) {
        self.record(MapCommand::Notice(message.into()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    launches: Mutex<Vec<(Uuid, bool)>>,
}

impl RecordingNavigator {
    pub fn launches(&self) -> Vec<(Uuid, bool)> {
        self.launches.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn launch(&self, route: &Route, simulate: bool) {
        self.launches.lock().unwrap().push((route.token, simulate));
    }
}

/// Answers with queued results, one route when the queue is empty.
#[derive(Default)]
pub struct StaticFetcher {
    results: Mutex<VecDeque<Result<Option<RouteResponse>, Error>>>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl StaticFetcher {
    pub fn with_results(results: Vec<Result<Option<RouteResponse>, Error>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RouteFetcher for StaticFetcher {
    async fn fetch_route(&self, request: RouteRequest) -> Result<Option<RouteResponse>, Error> {
        self.requests.lock().unwrap().push(request);

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Some(response(1))))
    }
}

/// Holds every fetch until [`GatedFetcher::release`] is called.
#[derive(Default)]
pub struct GatedFetcher {
    gate: Notify,
    inner: StaticFetcher,
}

impl GatedFetcher {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl RouteFetcher for GatedFetcher {
    async fn fetch_route(&self, request: RouteRequest) -> Result<Option<RouteResponse>, Error> {
        self.gate.notified().await;
        self.inner.fetch_route(request).await
    }
}

pub struct PanickingFetcher;

#[async_trait]
impl RouteFetcher for PanickingFetcher {
    async fn fetch_route(&self, _: RouteRequest) -> Result<Option<RouteResponse>, Error> {
        panic!("directions client crashed")
    }
}
