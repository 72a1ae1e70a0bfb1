//! 球面距离计算。

use crate::value_objects::Coordinates;

/// 地球平均半径（公里）。
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine 大圆距离，单位公里。
pub fn distance_between_coordinates(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude().to_radians();
    let to_lat = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
