/// `[longitude, latitude]` in degrees
pub type Coordinates = [f64; 2];

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let [lon1, lat1] = from.map(f64::to_radians);
    let [lon2, lat2] = to.map(f64::to_radians);

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

pub fn path_length_km(path: &[Coordinates]) -> f64 {
    path.windows(2)
        .map(|segment| haversine_km(segment[0], segment[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{haversine_km, path_length_km};

    const SHANGHAI: [f64; 2] = [121.4737, 31.2304];
    const NEW_YORK: [f64; 2] = [-74.006, 40.7128];
    const AMSTERDAM: [f64; 2] = [4.9041, 52.3676];
    const BERLIN: [f64; 2] = [13.405, 52.52];

    #[test]
    fn same_point_is_zero() {
        assert!(haversine_km(SHANGHAI, SHANGHAI).abs() < 1e-9);
    }

    #[test]
    fn known_distances() {
        let amsterdam_berlin = haversine_km(AMSTERDAM, BERLIN);
        assert!((570.0..585.0).contains(&amsterdam_berlin), "{amsterdam_berlin}");

        let shanghai_new_york = haversine_km(SHANGHAI, NEW_YORK);
        assert!(
            (11_700.0..12_000.0).contains(&shanghai_new_york),
            "{shanghai_new_york}"
        );
    }

    #[test]
    fn path_length_sums_segments() {
        let direct = haversine_km(AMSTERDAM, BERLIN);
        let path = path_length_km(&[AMSTERDAM, AMSTERDAM, BERLIN]);

        assert!((direct - path).abs() < 1e-9);
        assert!(path_length_km(&[BERLIN]).abs() < f64::EPSILON);
        assert!(path_length_km(&[]).abs() < f64::EPSILON);
    }
}
