// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Observer locations and the built-in city table.

use chrono_tz::Tz;

use crate::error::CalError;

/// A place on earth with a resolved timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tz: Tz,
}

impl Location {
    /// Validates coordinates and resolves the timezone identifier against
    /// the host tzdb.
    pub fn new(
        name: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
        tzid: &str,
    ) -> Result<Location, CalError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalError::InvalidCoordinate(format!(
                "latitude {latitude} not in [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalError::InvalidCoordinate(format!(
                "longitude {longitude} not in [-180, 180]"
            )));
        }
        let tz: Tz = tzid
            .parse()
            .map_err(|_| CalError::TimezoneLoadFailed(tzid.to_string()))?;
        Ok(Location {
            name: name.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
            tz,
        })
    }
}

/// (name, country, latitude, longitude, tzid)
#[rustfmt::skip]
pub static CITIES: &[(&str, &str, f64, f64, &str)] = &[
    ("Amsterdam", "NL", 52.37403, 4.88969, "Europe/Amsterdam"),
    ("Baghdad", "IQ", 33.34058, 44.40088, "Asia/Baghdad"),
    ("Beer Sheva", "IL", 31.25181, 34.7913, "Asia/Jerusalem"),
    ("Berlin", "DE", 52.52437, 13.41053, "Europe/Berlin"),
    ("Boston", "US", 42.35843, -71.05977, "America/New_York"),
    ("Buenos Aires", "AR", -34.61315, -58.37723, "America/Argentina/Buenos_Aires"),
    ("Chicago", "US", 41.85003, -87.65005, "America/Chicago"),
    ("Denver", "US", 39.73915, -104.9847, "America/Denver"),
    ("Eilat", "IL", 29.55805, 34.94821, "Asia/Jerusalem"),
    ("Gibraltar", "GI", 36.14474, -5.35257, "Europe/Gibraltar"),
    ("Haifa", "IL", 32.81841, 34.9885, "Asia/Jerusalem"),
    ("Jerusalem", "IL", 31.76904, 35.21633, "Asia/Jerusalem"),
    ("Johannesburg", "ZA", -26.20227, 28.04363, "Africa/Johannesburg"),
    ("Kiev", "UA", 50.45466, 30.5238, "Europe/Kiev"),
    ("London", "GB", 51.50853, -0.12574, "Europe/London"),
    ("Los Angeles", "US", 34.05223, -118.24368, "America/Los_Angeles"),
    ("Melbourne", "AU", -37.814, 144.96332, "Australia/Melbourne"),
    ("Mexico City", "MX", 19.42847, -99.12766, "America/Mexico_City"),
    ("Miami", "US", 25.77427, -80.19366, "America/New_York"),
    ("Montreal", "CA", 45.50884, -73.58781, "America/Toronto"),
    ("Moscow", "RU", 55.75222, 37.61556, "Europe/Moscow"),
    ("New York", "US", 40.71427, -74.00597, "America/New_York"),
    ("Paris", "FR", 48.85341, 2.3488, "Europe/Paris"),
    ("Philadelphia", "US", 39.95233, -75.16379, "America/New_York"),
    ("Phoenix", "US", 33.44838, -112.07404, "America/Phoenix"),
    ("Pittsburgh", "US", 40.44062, -79.99589, "America/New_York"),
    ("San Francisco", "US", 37.77493, -122.41942, "America/Los_Angeles"),
    ("Sao Paulo", "BR", -23.5475, -46.63611, "America/Sao_Paulo"),
    ("Seattle", "US", 47.60621, -122.33207, "America/Los_Angeles"),
    ("Sydney", "AU", -33.86785, 151.20732, "Australia/Sydney"),
    ("Tel Aviv", "IL", 32.08088, 34.78057, "Asia/Jerusalem"),
    ("Tiberias", "IL", 32.79221, 35.53124, "Asia/Jerusalem"),
    ("Toronto", "CA", 43.70011, -79.4163, "America/Toronto"),
    ("Vancouver", "CA", 49.24966, -123.11934, "America/Vancouver"),
    ("Washington DC", "US", 38.89511, -77.03637, "America/New_York"),
];

/// Case-insensitive lookup in the built-in city table.
pub fn lookup_city(name: &str) -> Result<Location, CalError> {
    CITIES
        .iter()
        .find(|(n, ..)| n.eq_ignore_ascii_case(name))
        .map(|&(n, c, lat, lon, tzid)| {
            Location::new(n, c, lat, lon, tzid).expect("city table entries are valid")
        })
        .ok_or_else(|| CalError::UnknownCity(name.to_string()))
}
