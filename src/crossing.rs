//! Border crossing detection.
//!
//! Containment per zone is tri-state: `None` until the first observation,
//! then `Some(inside)`. The first observation only establishes state; later
//! ones raise a [`BorderCrossingAlert`] whenever the state flips.
//!
//! State belongs to one vessel session. [`CrossingTracker`] holds it for a
//! single session and [`TrackerRegistry`] keys trackers by session id, so no
//! two sessions ever share a containment map.

use crate::algorithms::contains_any;
use crate::config::DetectorConfig;
use crate::{BorderCrossingAlert, CrossingDirection, Location, Severity, Zone, ZoneKind};
use chrono::{DateTime, Utc};
use log::{debug, trace};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub containment: bool,
    pub alert: Option<BorderCrossingAlert>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrossingDetector {
    severity: Severity,
}

impl From<&DetectorConfig> for CrossingDetector {
    fn from(config: &DetectorConfig) -> Self {
        CrossingDetector::with_severity(config.severity)
    }
}

impl CrossingDetector {
    pub fn new() -> Self {
        CrossingDetector::default()
    }

    pub fn with_severity(severity: Severity) -> Self {
        CrossingDetector { severity }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn evaluate(&self, location: Location, zone: &Zone, previous: Option<bool>) -> Evaluation {
        self.evaluate_at(location, zone, previous, Utc::now())
    }

    /// As [`CrossingDetector::evaluate`], stamping any alert with `now`.
    pub fn evaluate_at(
        &self,
        location: Location,
        zone: &Zone,
        previous: Option<bool>,
        now: DateTime<Utc>,
    ) -> Evaluation {
        let containment = contains_any(location, &zone.polygons);
        let alert = match previous {
            Some(was_inside) if was_inside != containment => {
                debug!(
                    "{} {} zone {:?} at {}",
                    if containment { "entered" } else { "left" },
                    zone.kind,
                    zone.name,
                    location
                );
                Some(BorderCrossingAlert {
                    timestamp: now,
                    location,
                    border_name: zone.name.clone(),
                    border_type: zone.kind,
                    severity: self.severity,
                    message: zone.kind.crossing_message().to_string(),
                    direction: CrossingDirection::from_containment(containment),
                })
            }
            _ => None,
        };
        Evaluation { containment, alert }
    }
}

/// Evaluate with the default detector (warning severity).
pub fn evaluate(location: Location, zone: &Zone, previous: Option<bool>) -> Evaluation {
    CrossingDetector::default().evaluate(location, zone, previous)
}

/// Zones are told apart by name and kind: a country's EEZ and its
/// territorial waters share a territory name.
type ZoneKey = (String, ZoneKind);

fn zone_key(name: &str, kind: ZoneKind) -> ZoneKey {
    (name.to_string(), kind)
}

/// Last known containment per zone, for one vessel session.
#[derive(Debug, Clone, Default)]
pub struct CrossingTracker {
    detector: CrossingDetector,
    states: HashMap<ZoneKey, bool>,
}

impl CrossingTracker {
    pub fn new(detector: CrossingDetector) -> Self {
        CrossingTracker {
            detector,
            states: HashMap::new(),
        }
    }

    /// Evaluate `location` against every zone, recording the new state and
    /// returning alerts in zone order.
    pub fn observe(&mut self, location: Location, zones: &[Zone]) -> Vec<BorderCrossingAlert> {
        let now = Utc::now();
        let mut alerts = Vec::new();
        for zone in zones {
            let key = zone_key(&zone.name, zone.kind);
            let previous = self.states.get(&key).copied();
            let evaluation = self.detector.evaluate_at(location, zone, previous, now);
            trace!(
                "{:?} ({}): {:?} -> {}",
                zone.name,
                zone.kind,
                previous,
                evaluation.containment
            );
            self.states.insert(key, evaluation.containment);
            alerts.extend(evaluation.alert);
        }
        alerts
    }

    /// `None` until the zone has been observed.
    pub fn containment(&self, zone_name: &str, kind: ZoneKind) -> Option<bool> {
        self.states.get(&zone_key(zone_name, kind)).copied()
    }

    /// Drop state for a zone, e.g. when its boundary data is refreshed or
    /// becomes unavailable. The next observation will not alert.
    pub fn forget(&mut self, zone_name: &str, kind: ZoneKind) -> Option<bool> {
        self.states.remove(&zone_key(zone_name, kind))
    }

    pub fn reset(&mut self) {
        self.states.clear();
    }
}

/// Caller-owned map of session id to that session's tracker.
#[derive(Debug, Clone)]
pub struct TrackerRegistry<K> {
    detector: CrossingDetector,
    sessions: HashMap<K, CrossingTracker>,
}

impl<K: Eq + Hash> Default for TrackerRegistry<K> {
    fn default() -> Self {
        TrackerRegistry::new(CrossingDetector::default())
    }
}

impl<K: Eq + Hash> TrackerRegistry<K> {
    pub fn new(detector: CrossingDetector) -> Self {
        TrackerRegistry {
            detector,
            sessions: HashMap::new(),
        }
    }

    pub fn tracker_mut(&mut self, session: K) -> &mut CrossingTracker {
        let detector = self.detector;
        self.sessions
            .entry(session)
            .or_insert_with(|| CrossingTracker::new(detector))
    }

    pub fn tracker(&self, session: &K) -> Option<&CrossingTracker> {
        self.sessions.get(session)
    }

    pub fn end_session(&mut self, session: &K) -> Option<CrossingTracker> {
        self.sessions.remove(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryPolygon;
    use chrono::TimeZone;
    use rstest::rstest;

    fn square_zone(name: &str, kind: ZoneKind) -> Zone {
        Zone::new(
            name,
            kind,
            vec![BoundaryPolygon::from(vec![
                (0., 0.),
                (0., 10.),
                (10., 10.),
                (10., 0.),
            ])],
        )
    }

    const INSIDE: (f64, f64) = (5., 5.);
    const OUTSIDE: (f64, f64) = (20., 20.);

    #[rstest]
    #[case(INSIDE)]
    #[case(OUTSIDE)]
    fn check_first_observation_is_silent(#[case] point: (f64, f64)) {
        let zone = square_zone("India", ZoneKind::Eez);
        let evaluation = evaluate(point.into(), &zone, None);
        assert_eq!(evaluation.containment, point == INSIDE);
        assert_eq!(evaluation.alert, None);
    }

    #[rstest]
    #[case(ZoneKind::Eez, "Entered Exclusive Economic Zone. Fishing regulations may apply.")]
    #[case(ZoneKind::Territorial, "Entered territorial waters. Special permits may be required.")]
    #[case(ZoneKind::International, "Entered international waters. International fishing laws apply.")]
    fn check_transition_alert(#[case] kind: ZoneKind, #[case] message: &str) {
        let zone = square_zone("Border", kind);
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 4, 0, 0).unwrap();
        let detector = CrossingDetector::new();

        let entered = detector.evaluate_at(INSIDE.into(), &zone, Some(false), now);
        assert!(entered.containment);
        let alert = entered.alert.expect("entering should alert");
        assert_eq!(alert.border_type, kind);
        assert_eq!(alert.border_name, "Border");
        assert_eq!(alert.message, message);
        assert_eq!(alert.severity, Severity::Warning);
        assert_eq!(alert.timestamp, now);
        assert_eq!(alert.location, Location::from(INSIDE));
        assert_eq!(alert.direction, CrossingDirection::Entered);

        let exited = detector.evaluate_at(OUTSIDE.into(), &zone, Some(true), now);
        assert!(!exited.containment);
        let alert = exited.alert.expect("leaving should alert");
        assert_eq!(alert.message, message);
        assert_eq!(alert.direction, CrossingDirection::Exited);
    }

    #[test]
    fn check_unchanged_is_silent() {
        let zone = square_zone("India", ZoneKind::Eez);
        assert_eq!(evaluate(INSIDE.into(), &zone, Some(true)).alert, None);
        assert_eq!(evaluate(OUTSIDE.into(), &zone, Some(false)).alert, None);
    }

    #[test]
    fn check_severity_override() {
        let zone = square_zone("India", ZoneKind::Territorial);
        let detector = CrossingDetector::from(&DetectorConfig {
            severity: Severity::Critical,
        });
        let alert = detector
            .evaluate(INSIDE.into(), &zone, Some(false))
            .alert
            .unwrap();
        assert_eq!(alert.severity, Severity::Critical);
    }

    #[test]
    fn check_tracker_sequence() {
        let zones = vec![
            square_zone("India", ZoneKind::Eez),
            Zone::new(
                "Far",
                ZoneKind::Territorial,
                vec![BoundaryPolygon::from(vec![(50., 50.), (50., 51.), (51., 51.)])],
            ),
        ];
        let mut tracker = CrossingTracker::default();
        assert_eq!(tracker.containment("India", ZoneKind::Eez), None);

        assert!(tracker.observe(OUTSIDE.into(), &zones).is_empty());
        assert_eq!(tracker.containment("India", ZoneKind::Eez), Some(false));
        assert_eq!(tracker.containment("Far", ZoneKind::Territorial), Some(false));

        assert!(tracker.observe(OUTSIDE.into(), &zones).is_empty());

        let alerts = tracker.observe(INSIDE.into(), &zones);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].border_name, "India");
        assert_eq!(alerts[0].direction, CrossingDirection::Entered);

        assert!(tracker.observe(INSIDE.into(), &zones).is_empty());

        let alerts = tracker.observe(OUTSIDE.into(), &zones);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].direction, CrossingDirection::Exited);
    }

    #[test]
    fn check_same_name_zones_tracked_apart() {
        let zones = vec![
            square_zone("India", ZoneKind::Eez),
            Zone::new(
                "India",
                ZoneKind::Territorial,
                vec![BoundaryPolygon::from(vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.)])],
            ),
        ];
        let mut tracker = CrossingTracker::default();
        assert!(tracker.observe(INSIDE.into(), &zones).is_empty());
        assert!(tracker.observe(INSIDE.into(), &zones).is_empty());
        assert_eq!(tracker.containment("India", ZoneKind::Eez), Some(true));
        assert_eq!(tracker.containment("India", ZoneKind::Territorial), Some(false));

        let alerts = tracker.observe((0.5, 0.5).into(), &zones);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].border_type, ZoneKind::Territorial);
        assert_eq!(alerts[0].direction, CrossingDirection::Entered);

        assert_eq!(tracker.forget("India", ZoneKind::Territorial), Some(true));
        assert_eq!(tracker.containment("India", ZoneKind::Eez), Some(true));
    }

    #[test]
    fn check_forget_reestablishes_state() {
        let zones = vec![square_zone("India", ZoneKind::Eez)];
        let mut tracker = CrossingTracker::default();
        tracker.observe(OUTSIDE.into(), &zones);
        assert_eq!(tracker.forget("India", ZoneKind::Eez), Some(false));
        assert!(tracker.observe(INSIDE.into(), &zones).is_empty());
        tracker.reset();
        assert_eq!(tracker.containment("India", ZoneKind::Eez), None);
    }

    #[test]
    fn check_sessions_are_isolated() {
        let zones = vec![square_zone("India", ZoneKind::Eez)];
        let mut registry: TrackerRegistry<u32> = TrackerRegistry::default();
        registry.tracker_mut(1).observe(OUTSIDE.into(), &zones);
        // Session 2 has never been observed, so its first fix is silent.
        assert!(registry.tracker_mut(2).observe(INSIDE.into(), &zones).is_empty());
        assert_eq!(registry.tracker_mut(1).observe(INSIDE.into(), &zones).len(), 1);
        assert_eq!(registry.len(), 2);

        assert!(registry.end_session(&1).is_some());
        assert!(registry.tracker(&1).is_none());
        let tracker = registry.tracker(&2).unwrap();
        assert_eq!(tracker.containment("India", ZoneKind::Eez), Some(true));
    }
}
