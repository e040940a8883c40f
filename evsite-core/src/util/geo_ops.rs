use geo::{Distance, Haversine, Point};
use rstar::AABB;

/// mean meridional length of one degree of latitude, in meters. only used to size
/// search envelopes, never to report a distance.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// widens search envelopes so rounding at the envelope edge never drops a true match.
const ENVELOPE_PADDING: f64 = 1.01;

/// great-circle distance in meters between two WGS84 coordinates.
pub fn haversine_meters(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    Haversine.distance(Point::new(a_lon, a_lat), Point::new(b_lon, b_lat))
}

/// creates an (x=lon, y=lat) envelope guaranteed to contain every coordinate within
/// `radius_meters` great-circle distance of the origin. the envelope is conservative,
/// so callers are expected to filter the matches with [`haversine_meters`].
///
/// near the poles the longitude span degenerates, in which case the envelope covers
/// every longitude.
///
/// # Arguments
///
/// * `lat` - origin latitude in degrees
/// * `lon` - origin longitude in degrees
/// * `radius_meters` - search radius
///
/// # Returns
///
/// * an envelope in degree space
pub fn envelope_around(lat: f64, lon: f64, radius_meters: f64) -> AABB<[f64; 2]> {
    let radius = radius_meters.max(0.0) * ENVELOPE_PADDING;
    let dlat = radius / METERS_PER_DEGREE;
    let lat_lo = (lat - dlat).max(-90.0);
    let lat_hi = (lat + dlat).min(90.0);
    // the longitude span is widest at the latitude closest to a pole
    let widest_lat = lat_lo.abs().max(lat_hi.abs());
    let cos = widest_lat.to_radians().cos();
    let dlon = if cos <= 1e-9 {
        360.0
    } else {
        (radius / (METERS_PER_DEGREE * cos)).min(360.0)
    };
    AABB::from_corners([lon - dlon, lat_lo], [lon + dlon, lat_hi])
}

/// the envelope of [`envelope_around`] split at the antimeridian. parts extending past
/// ±180 degrees are shifted by ∓360 so that every returned envelope lies within
/// [-180, 180]. the parts never overlap, so each stored coordinate matches at most one.
pub fn envelopes_around(lat: f64, lon: f64, radius_meters: f64) -> Vec<AABB<[f64; 2]>> {
    let envelope = envelope_around(lat, lon, radius_meters);
    let ([x_lo, y_lo], [x_hi, y_hi]) = (envelope.lower(), envelope.upper());
    if x_hi - x_lo >= 360.0 {
        return vec![AABB::from_corners([-180.0, y_lo], [180.0, y_hi])];
    }
    let mut envelopes = vec![AABB::from_corners(
        [x_lo.max(-180.0), y_lo],
        [x_hi.min(180.0), y_hi],
    )];
    if x_lo < -180.0 {
        envelopes.push(AABB::from_corners([x_lo + 360.0, y_lo], [180.0, y_hi]));
    }
    if x_hi > 180.0 {
        envelopes.push(AABB::from_corners([-180.0, y_lo], [x_hi - 360.0, y_hi]));
    }
    envelopes
}

/// north-south and east-west size in meters of a lattice cell with the given degree
/// steps, measured through the cell centered at (lat, lon).
pub fn cell_size_meters(lat: f64, lon: f64, lat_step: f64, lon_step: f64) -> (f64, f64) {
    let height = haversine_meters(lat - lat_step / 2.0, lon, lat + lat_step / 2.0, lon);
    let width = haversine_meters(lat, lon - lon_step / 2.0, lat, lon + lon_step / 2.0);
    (height, width)
}
