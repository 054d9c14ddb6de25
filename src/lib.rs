mod alert;
mod boundary_polygon;
mod location;
mod rectangle;
mod zone;

pub mod algorithms;
pub mod config;
pub mod crossing;
pub mod errors;
pub mod fetch;
pub mod from_wkt;
pub mod geojson;
pub mod utils;

pub use alert::{BorderCrossingAlert, CrossingDirection, Severity};
pub use boundary_polygon::BoundaryPolygon;
pub use crossing::{evaluate, CrossingDetector, CrossingTracker, Evaluation, TrackerRegistry};
pub use errors::BoundaryError;
pub use fetch::BoundaryClient;
pub use location::Location;
pub use rectangle::Rectangle;
pub use utils::distance;
pub use zone::{Zone, ZoneKind, ZoneProperties};
