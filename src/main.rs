use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use tapnav::config::Config;
use tapnav::console::{ConsoleMap, ConsoleNavigator};
use tapnav::controller::Controller;
use tapnav::entities::GeoPoint;
use tapnav::error::{invalid_input_error, Error};
use tapnav::event_loop::{EventLoop, EventSender};
use tapnav::external::MapboxDirections;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let controller = Controller::new(
        config.route_options(),
        Arc::new(ConsoleMap::default()),
        Arc::new(ConsoleNavigator),
    );
    let event_loop = EventLoop::new(controller, Arc::new(MapboxDirections::new(&config)));
    let sender = event_loop.sender();

    let (_, input) = futures::future::join(event_loop.run(), read_input(sender)).await;

    input
}

// tap <lat> <lon> | marker <lat> <lon> | navigate | quit
async fn read_input(sender: EventSender) -> Result<(), Error> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let words: Vec<&str> = line.split_whitespace().collect();

        let sent = match words.as_slice() {
            ["tap", lat, lon] => match parse_point(lat, lon) {
                Ok(point) => sender.map_clicked(point).await,
                Err(err) => Err(err),
            },
            ["marker", lat, lon] => match parse_point(lat, lon) {
                Ok(point) => sender.marker_clicked(point).await,
                Err(err) => Err(err),
            },
            ["navigate"] => sender.start_navigation().await,
            ["quit"] => break,
            [] => continue,
            _ => Err(invalid_input_error()),
        };

        if let Err(err) = sent {
            tracing::warn!("could not handle {:?}: {}", line, err);
        }
    }

    sender.shutdown().await
}

fn parse_point(lat: &str, lon: &str) -> Result<GeoPoint, Error> {
    let latitude = lat.parse().map_err(|_| invalid_input_error())?;
    let longitude = lon.parse().map_err(|_| invalid_input_error())?;

    GeoPoint::checked(latitude, longitude)
}
