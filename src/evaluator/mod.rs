// Evaluator module - per-record distance/status pass and nearest selection

use chrono::{Local, NaiveTime};

use crate::models::{Kilometers, Location, Pharmacy, Weekday};

/// Marker classification for map rendering.
///
/// Matches the front-end color scheme: green for the nearest open
/// pharmacy, red for today's on-duty pharmacy, blue for open, gray
/// for closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    /// Nearest to the reference point and currently open
    Nearest,
    /// Open and designated on-duty for the current day
    OnDuty,
    /// Open right now
    Open,
    /// Closed, or schedule unknown
    Closed,
}

/// A pharmacy record annotated by an evaluation pass
#[derive(Debug, Clone)]
pub struct EvaluatedPharmacy {
    pub pharmacy: Pharmacy,

    /// Distance from the reference point; `None` when the record has
    /// no coordinates
    pub distance_km: Option<Kilometers>,

    pub is_open: bool,

    /// `None` when the record has no coordinates (no marker is drawn)
    pub marker: Option<MarkerStatus>,
}

/// Result of evaluating the full record set against a reference point
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// One entry per input record, in input order
    pub entries: Vec<EvaluatedPharmacy>,

    /// Index into `entries` of the nearest coordinate-bearing record
    nearest: Option<usize>,
}

impl Evaluation {
    /// The nearest pharmacy, open or not; `None` when no record has
    /// coordinates
    pub fn nearest(&self) -> Option<&EvaluatedPharmacy> {
        self.nearest.map(|i| &self.entries[i])
    }

    /// Entries that have a distance, sorted ascending. Records without
    /// coordinates are left out, as in the rendered list.
    pub fn sorted_by_distance(&self) -> Vec<&EvaluatedPharmacy> {
        let mut ranked: Vec<&EvaluatedPharmacy> = self
            .entries
            .iter()
            .filter(|e| e.distance_km.is_some())
            .collect();
        ranked.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

/// Evaluates every record against a reference point at the given time
/// and duty day.
///
/// Distance and the nearest pick only consider records with both
/// coordinates present; ties keep the first-encountered record.
pub fn evaluate(
    records: &[Pharmacy],
    reference: Location,
    time: NaiveTime,
    today: Weekday,
) -> Evaluation {
    let mut entries: Vec<EvaluatedPharmacy> = records
        .iter()
        .map(|pharmacy| EvaluatedPharmacy {
            distance_km: pharmacy
                .coordinates()
                .map(|loc| reference.distance_to(&loc)),
            is_open: pharmacy.schedule().is_open_at(time),
            marker: None,
            pharmacy: pharmacy.clone(),
        })
        .collect();

    let mut nearest: Option<usize> = None;
    let mut min_distance = f64::INFINITY;
    for (i, entry) in entries.iter().enumerate() {
        if let Some(distance) = entry.distance_km {
            if distance < min_distance {
                nearest = Some(i);
                min_distance = distance;
            }
        }
    }

    for (i, entry) in entries.iter_mut().enumerate() {
        if entry.distance_km.is_none() {
            continue;
        }
        entry.marker = Some(if !entry.is_open {
            MarkerStatus::Closed
        } else if nearest == Some(i) {
            MarkerStatus::Nearest
        } else if entry.pharmacy.duty == today {
            MarkerStatus::OnDuty
        } else {
            MarkerStatus::Open
        });
    }

    Evaluation { entries, nearest }
}

/// Evaluates against the local system clock
pub fn evaluate_now(records: &[Pharmacy], reference: Location) -> Evaluation {
    evaluate(records, reference, Local::now().time(), Weekday::today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn pharmacy(name: &str, lat: Option<f64>, lon: Option<f64>) -> Pharmacy {
        Pharmacy::new(
            name.to_string(),
            "Main Street 4".to_string(),
            lat,
            lon,
            Weekday::Monday,
            "08:00".to_string(),
            "22:00".to_string(),
        )
    }

    #[test]
    fn test_nearest_picks_minimum_distance() {
        let records = vec![
            pharmacy("B", Some(1.0), Some(1.0)),
            pharmacy("C", Some(0.01), Some(0.01)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        assert_eq!(result.nearest().unwrap().pharmacy.name, "C");
    }

    #[test]
    fn test_record_at_reference_point_wins() {
        let records = vec![
            pharmacy("A", Some(0.0), Some(0.0)),
            pharmacy("B", Some(1.0), Some(1.0)),
            pharmacy("C", Some(0.01), Some(0.01)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        let nearest = result.nearest().unwrap();
        assert_eq!(nearest.pharmacy.name, "A");
        assert_eq!(nearest.distance_km, Some(0.0));
    }

    #[test]
    fn test_ties_keep_first_encountered_record() {
        let records = vec![
            pharmacy("First", Some(0.5), Some(0.5)),
            pharmacy("Twin", Some(0.5), Some(0.5)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        assert_eq!(result.nearest().unwrap().pharmacy.name, "First");
    }

    #[test]
    fn test_missing_coordinates_are_excluded_from_ranking() {
        // The record without lat would be closest if it counted
        let records = vec![
            pharmacy("NoCoords", None, Some(0.0)),
            pharmacy("Far", Some(1.0), Some(1.0)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        assert_eq!(result.nearest().unwrap().pharmacy.name, "Far");
        assert_eq!(result.entries[0].distance_km, None);
        assert_eq!(result.entries[0].marker, None);

        let ranked = result.sorted_by_distance();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].pharmacy.name, "Far");
    }

    #[test]
    fn test_no_coordinates_anywhere_means_no_nearest() {
        let records = vec![pharmacy("NoCoords", None, None)];
        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        assert!(result.nearest().is_none());
    }

    #[test]
    fn test_sorted_listing_is_ascending() {
        let records = vec![
            pharmacy("Far", Some(1.0), Some(1.0)),
            pharmacy("Near", Some(0.01), Some(0.01)),
            pharmacy("Mid", Some(0.5), Some(0.5)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        let names: Vec<&str> = result
            .sorted_by_distance()
            .iter()
            .map(|e| e.pharmacy.name.as_str())
            .collect();
        assert_eq!(names, ["Near", "Mid", "Far"]);
    }

    #[test]
    fn test_marker_precedence() {
        let mut duty = pharmacy("Duty", Some(0.5), Some(0.5));
        duty.duty = Weekday::Friday;
        let mut closed = pharmacy("Closed", Some(0.9), Some(0.9));
        closed.open = "23:00".to_string();
        closed.close = "23:30".to_string();

        let mut nearest_on_duty = pharmacy("Near", Some(0.3), Some(0.3));
        nearest_on_duty.duty = Weekday::Friday;

        let records = vec![
            closed,
            nearest_on_duty,
            duty,
            pharmacy("Plain", Some(0.6), Some(0.6)),
        ];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );

        assert_eq!(result.entries[0].marker, Some(MarkerStatus::Closed));
        // Nearest takes precedence over the on-duty color
        assert_eq!(result.entries[1].marker, Some(MarkerStatus::Nearest));
        assert_eq!(result.entries[2].marker, Some(MarkerStatus::OnDuty));
        assert_eq!(result.entries[3].marker, Some(MarkerStatus::Open));
    }

    #[test]
    fn test_nearest_marker_requires_open() {
        // Nearest by distance but closed: stays gray, and nobody gets green
        let mut nearest_closed = pharmacy("NearClosed", Some(0.1), Some(0.1));
        nearest_closed.open = "bad".to_string();
        let records = vec![nearest_closed, pharmacy("FarOpen", Some(1.0), Some(1.0))];

        let result = evaluate(
            &records,
            Location::new(0.0, 0.0),
            at(10, 0),
            Weekday::Friday,
        );
        assert_eq!(result.nearest().unwrap().pharmacy.name, "NearClosed");
        assert_eq!(result.entries[0].marker, Some(MarkerStatus::Closed));
        assert_eq!(result.entries[1].marker, Some(MarkerStatus::Open));
    }
}
