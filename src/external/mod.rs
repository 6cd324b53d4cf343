pub mod mapbox;

pub use mapbox::MapboxDirections;
