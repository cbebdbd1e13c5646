use crate::geopoint::GeoPoint;

/// Returns the point lying at `progress` (0..=1) of the polyline length.
///
/// Segment lengths are great-circle distances, the position inside a segment
/// is a plain linear interpolation of latitude and longitude.
pub fn point_at_progress(waypoints: &[GeoPoint], progress: f64) -> GeoPoint {
    let (Some(first), Some(last)) = (waypoints.first(), waypoints.last()) else {
        return GeoPoint::ORIGIN;
    };

    if progress <= 0.0 {
        return *first;
    }

    if progress >= 1.0 {
        return *last;
    }

    let segment_lengths: Vec<f64> = waypoints
        .windows(2)
        .map(|pair| pair[0].haversine_distance(&pair[1]))
        .collect();
    let total: f64 = segment_lengths.iter().sum();

    let target = progress * total;
    let mut accumulated = 0.0;

    for (index, &segment_length) in segment_lengths.iter().enumerate() {
        if accumulated + segment_length >= target {
            let from = waypoints[index];
            let to = waypoints[index + 1];

            if segment_length == 0.0 {
                return from;
            }

            let t = (target - accumulated) / segment_length;
            if t >= 1.0 {
                return to;
            }

            return GeoPoint {
                lat: from.lat + (to.lat - from.lat) * t,
                lng: from.lng + (to.lng - from.lng) * t,
            };
        }

        accumulated += segment_length;
    }

    *last
}
