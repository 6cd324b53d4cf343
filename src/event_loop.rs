use async_channel::{Receiver, Sender};

use crate::{
    api::DynRouteFetcher,
    controller::{Controller, Event},
    entities::{GeoPoint, RouteRequest},
    error::{queue_closed_error, transport_error, Error},
};

/// Input side of the event queue, handed to the map view.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: Sender<Event>,
}

impl EventSender {
    pub async fn map_clicked(&self, point: GeoPoint) -> Result<(), Error> {
        self.send(Event::MapClicked(point)).await
    }

    pub async fn marker_clicked(&self, point: GeoPoint) -> Result<(), Error> {
        self.send(Event::MarkerClicked(point)).await
    }

    pub async fn start_navigation(&self) -> Result<(), Error> {
        self.send(Event::StartNavigation).await
    }

    pub async fn shutdown(&self) -> Result<(), Error> {
        self.send(Event::Shutdown).await
    }

    async fn send(&self, event: Event) -> Result<(), Error> {
        self.tx.send(event).await.map_err(|_| queue_closed_error())
    }
}

/// Feeds the controller one event at a time. Route fetches run on their own
/// tasks and come back through the same queue.
pub struct EventLoop {
    controller: Controller,
    fetcher: DynRouteFetcher,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    in_flight: usize,
}

impl EventLoop {
    pub fn new(controller: Controller, fetcher: DynRouteFetcher) -> Self {
        let (tx, rx): (Sender<Event>, Receiver<Event>) = async_channel::unbounded();

        Self {
            controller,
            fetcher,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Runs until shutdown. Input arriving after shutdown is dropped, but
    /// fetches still in flight are waited for before the controller is returned.
    #[tracing::instrument(name = "EventLoop::run", skip(self))]
    pub async fn run(mut self) -> Controller {
        let mut closing = false;

        while let Ok(event) = self.rx.recv().await {
            match event {
                Event::Shutdown => {
                    tracing::info!("shutting down with {} route requests in flight", self.in_flight);
                    closing = true;
                }
                Event::RouteFetched { .. } => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.dispatch(event);
                }
                event if closing => tracing::debug!("ignoring {:?} after shutdown", event),
                event => self.dispatch(event),
            }

            if closing && self.in_flight == 0 {
                break;
            }
        }

        self.controller
    }

    fn dispatch(&mut self, event: Event) {
        if let Some(request) = self.controller.handle(event) {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&mut self, request: RouteRequest) {
        self.in_flight += 1;

        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { fetcher.fetch_route(request).await });

            // a crashed fetch still has to land, or shutdown waits on it forever
            let result = match fetch.await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!("route fetch {} failed: {}", request.sequence, err);
                    Err(transport_error(err))
                }
            };

            if tx.send(Event::RouteFetched { request, result }).await.is_err() {
                tracing::warn!("event queue closed before route {} landed", request.sequence);
            }
        });
    }
}
