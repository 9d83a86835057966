use crate::models::vehicle::TrackingSample;

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let lat1 = lat_a.to_radians();
    let lat2 = lat_b.to_radians();
    let delta_lat = (lat_b - lat_a).to_radians();
    let delta_lng = (lng_b - lng_a).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

/// Length of a vehicle's recorded route: the sum of great-circle distances
/// between consecutive samples.
pub fn route_length_km(samples: &[TrackingSample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| {
            haversine_km(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{haversine_km, route_length_km};
    use crate::models::vehicle::TrackingSample;

    fn sample(lat: f64, lng: f64) -> TrackingSample {
        TrackingSample {
            vehicle_id: Uuid::from_u128(1),
            latitude: lat,
            longitude: lng,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn zero_distance_for_same_point() {
        let distance = haversine_km(53.5511, 9.9937, 53.5511, 9.9937);
        assert!(distance < 1e-9);
    }

    #[test]
    fn london_to_paris_is_around_343_km() {
        let distance = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 343.0).abs() < 5.0);
    }

    #[test]
    fn route_length_of_fewer_than_two_samples_is_zero() {
        assert_eq!(route_length_km(&[]), 0.0);
        assert_eq!(route_length_km(&[sample(51.5, -0.1)]), 0.0);
    }

    #[test]
    fn route_length_sums_consecutive_legs() {
        let route = [
            sample(51.5074, -0.1278),
            sample(48.8566, 2.3522),
            sample(51.5074, -0.1278),
        ];
        let length = route_length_km(&route);
        assert!((length - 686.0).abs() < 10.0);
    }
}
