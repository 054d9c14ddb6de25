use crate::errors::BoundaryError;
use crate::{BoundaryPolygon, Location, Zone, ZoneKind};
use wkt::types;
use wkt::types::Coord;

/// WKT puts longitude in x and latitude in y.
impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Location {
            latitude: coord.y,
            longitude: coord.x,
        }
    }
}

fn linestring_to_polygon(linestring: types::LineString<f64>) -> BoundaryPolygon {
    BoundaryPolygon::new(linestring.0.into_iter().map(Location::from).collect())
}

fn shell_of(poly: types::Polygon<f64>) -> Option<BoundaryPolygon> {
    poly.0.into_iter().next().map(linestring_to_polygon)
}

/// Exterior rings of every POLYGON and MULTIPOLYGON in `wkt_str`. Other
/// geometry types carry no area and are skipped.
pub fn parse_wkt(wkt_str: &str) -> Result<Vec<BoundaryPolygon>, BoundaryError> {
    let wkt_geoms =
        wkt::Wkt::from_str(wkt_str).map_err(|e| BoundaryError::Wkt(e.to_string()))?;
    let mut polygons = Vec::new();
    for geom in wkt_geoms.items {
        match geom {
            wkt::Geometry::Polygon(p) => polygons.extend(shell_of(p)),
            wkt::Geometry::MultiPolygon(mp) => {
                polygons.extend(mp.0.into_iter().filter_map(shell_of))
            }
            _ => {}
        }
    }
    Ok(polygons)
}

pub fn zone_from_wkt(name: &str, kind: ZoneKind, wkt_str: &str) -> Result<Zone, BoundaryError> {
    Ok(Zone::new(name, kind, parse_wkt(wkt_str)?))
}
