mod point_in_polygon;
mod proximity;

pub use point_in_polygon::{contains, contains_any};
pub use proximity::{
    distance_to_boundary, distance_to_zone, is_in_international_waters, nearest_zone,
};
