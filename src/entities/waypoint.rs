use serde::{Deserialize, Serialize};

use super::GeoPoint;

pub const CAPACITY: usize = 2;

/// Handle of a marker owned by the map view. Never dereferenced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub point: GeoPoint,
    pub marker: MarkerId,
}

impl Waypoint {
    pub fn new(point: GeoPoint, marker: MarkerId) -> Self {
        Self { point, marker }
    }
}

/// Ordered selection of at most two waypoints: origin first, destination second.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaypointSet {
    entries: Vec<Waypoint>,
}

impl WaypointSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.entries.iter()
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.entries.iter().any(|w| &w.point == point)
    }

    /// Origin and destination, once both are selected.
    pub fn endpoints(&self) -> Option<(GeoPoint, GeoPoint)> {
        match self.entries.as_slice() {
            [origin, destination] => Some((origin.point, destination.point)),
            _ => None,
        }
    }

    /// Appends `waypoint`, evicting the destination first when the set is full.
    /// Returns the evicted waypoint so its marker can be removed.
    pub fn add(&mut self, waypoint: Waypoint) -> Option<Waypoint> {
        let evicted = if self.is_full() {
            Some(self.entries.remove(CAPACITY - 1))
        } else {
            None
        };

        self.entries.push(waypoint);
        evicted
    }

    /// Removes the destination, but only from a full set.
    pub fn evict_destination(&mut self) -> Option<Waypoint> {
        if !self.is_full() {
            return None;
        }

        self.entries.pop()
    }

    /// Removes the first waypoint at `point`. No-op when nothing matches.
    pub fn remove_matching(&mut self, point: &GeoPoint) -> Option<Waypoint> {
        let index = self.entries.iter().position(|w| &w.point == point)?;
        Some(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(lat: f64, lon: f64, marker: u64) -> Waypoint {
        Waypoint::new(GeoPoint::new(lat, lon), MarkerId(marker))
    }

    #[test]
    fn add_evicts_destination_not_origin() {
        let mut set = WaypointSet::new();
        assert_eq!(set.add(waypoint(10.0, 10.0, 1)), None);
        assert_eq!(set.add(waypoint(20.0, 20.0, 2)), None);

        let evicted = set.add(waypoint(30.0, 30.0, 3));

        assert_eq!(evicted, Some(waypoint(20.0, 20.0, 2)));
        assert_eq!(
            set.endpoints(),
            Some((GeoPoint::new(10.0, 10.0), GeoPoint::new(30.0, 30.0)))
        );
    }

    #[test]
    fn remove_missing_point_leaves_set_unchanged() {
        let mut set = WaypointSet::new();
        set.add(waypoint(10.0, 10.0, 1));
        let before = set.clone();

        assert_eq!(set.remove_matching(&GeoPoint::new(1.0, 1.0)), None);
        assert_eq!(set, before);
    }

    #[test]
    fn remove_origin_promotes_destination() {
        let mut set = WaypointSet::new();
        set.add(waypoint(10.0, 10.0, 1));
        set.add(waypoint(20.0, 20.0, 2));

        let removed = set.remove_matching(&GeoPoint::new(10.0, 10.0));

        assert_eq!(removed.map(|w| w.marker), Some(MarkerId(1)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.endpoints(), None);
        assert!(set.contains(&GeoPoint::new(20.0, 20.0)));
    }

    #[test]
    fn size_stays_bounded() {
        let mut set = WaypointSet::new();

        for i in 0..50u64 {
            let point = GeoPoint::new((i % 7) as f64, (i % 3) as f64);
            if i % 4 == 0 {
                set.remove_matching(&point);
            } else {
                set.add(Waypoint::new(point, MarkerId(i)));
            }
            assert!(set.len() <= CAPACITY);
        }
    }

    #[test]
    fn evict_destination_needs_a_full_set() {
        let mut set = WaypointSet::new();
        set.add(waypoint(10.0, 10.0, 1));
        assert_eq!(set.evict_destination(), None);

        set.add(waypoint(20.0, 20.0, 2));
        assert_eq!(set.evict_destination(), Some(waypoint(20.0, 20.0, 2)));
        assert_eq!(set.len(), 1);
    }
}
