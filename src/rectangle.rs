use crate::Location;

/// Latitude/longitude bounding box. An empty rectangle has NaN bounds.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.lat_min == other.lat_min
                && self.lng_min == other.lng_min
                && self.lat_max == other.lat_max
                && self.lng_max == other.lng_max
        }
    }
}

impl Rectangle {
    pub fn new(p1: Location, p2: Location) -> Self {
        Rectangle {
            lat_min: p1.latitude.min(p2.latitude),
            lng_min: p1.longitude.min(p2.longitude),
            lat_max: p1.latitude.max(p2.latitude),
            lng_max: p1.longitude.max(p2.longitude),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            lat_min: f64::NAN,
            lng_min: f64::NAN,
            lat_max: f64::NAN,
            lng_max: f64::NAN,
        }
    }

    pub fn of(points: &[Location]) -> Self {
        points.iter().fold(Rectangle::new_empty(), |mut s, p| {
            s.expand(Rectangle::new(*p, *p));
            s
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lat_min.is_nan()
            || self.lng_min.is_nan()
            || self.lat_max.is_nan()
            || self.lng_max.is_nan()
    }

    pub fn contains(&self, point: Location) -> bool {
        self.lat_min <= point.latitude
            && point.latitude <= self.lat_max
            && self.lng_min <= point.longitude
            && point.longitude <= self.lng_max
    }

    /// Grow to cover `other`. NaN bounds on either side are ignored by
    /// `f64::min`/`f64::max`, so expanding an empty rectangle adopts `other`.
    pub fn expand(&mut self, other: Rectangle) {
        self.lat_min = self.lat_min.min(other.lat_min);
        self.lng_min = self.lng_min.min(other.lng_min);
        self.lat_max = self.lat_max.max(other.lat_max);
        self.lng_max = self.lng_max.max(other.lng_max);
    }
}
