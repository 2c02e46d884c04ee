use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Display metadata for a timezone identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityInfo {
    pub city: &'static str,
    pub country: &'static str,
}

/// A city search hit over the curated timezone list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityMatch {
    pub timezone: &'static str,
    pub city: String,
    pub country: String,
    pub display_name: String,
}

/// Curated list of identifiers the city search runs over
pub const COMMON_TIMEZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Anchorage",
    "America/Toronto",
    "America/Vancouver",
    "America/Mexico_City",
    "America/Bogota",
    "America/Lima",
    "America/Sao_Paulo",
    "America/Argentina/Buenos_Aires",
    "Europe/London",
    "Europe/Dublin",
    "Europe/Lisbon",
    "Europe/Madrid",
    "Europe/Paris",
    "Europe/Amsterdam",
    "Europe/Berlin",
    "Europe/Rome",
    "Europe/Zurich",
    "Europe/Stockholm",
    "Europe/Helsinki",
    "Europe/Warsaw",
    "Europe/Athens",
    "Europe/Istanbul",
    "Europe/Kyiv",
    "Europe/Moscow",
    "Africa/Cairo",
    "Africa/Lagos",
    "Africa/Nairobi",
    "Africa/Johannesburg",
    "Asia/Dubai",
    "Asia/Karachi",
    "Asia/Kolkata",
    "Asia/Dhaka",
    "Asia/Bangkok",
    "Asia/Jakarta",
    "Asia/Singapore",
    "Asia/Hong_Kong",
    "Asia/Shanghai",
    "Asia/Taipei",
    "Asia/Seoul",
    "Asia/Tokyo",
    "Asia/Manila",
    "Australia/Perth",
    "Australia/Sydney",
    "Australia/Melbourne",
    "Australia/Brisbane",
    "Pacific/Auckland",
    "Pacific/Honolulu",
    "UTC",
];

lazy_static! {
    /// Timezone identifier to city/country display metadata
    static ref TIMEZONE_CITY_MAP: HashMap<&'static str, CityInfo> = {
        let mut map = HashMap::new();
        let mut add = |tz, city, country| {
            map.insert(tz, CityInfo { city, country });
        };
        add("America/New_York", "New York", "United States");
        add("America/Chicago", "Chicago", "United States");
        add("America/Denver", "Denver", "United States");
        add("America/Los_Angeles", "Los Angeles", "United States");
        add("America/Anchorage", "Anchorage", "United States");
        add("America/Toronto", "Toronto", "Canada");
        add("America/Vancouver", "Vancouver", "Canada");
        add("America/Mexico_City", "Mexico City", "Mexico");
        add("America/Bogota", "Bogotá", "Colombia");
        add("America/Lima", "Lima", "Peru");
        add("America/Sao_Paulo", "São Paulo", "Brazil");
        add("America/Argentina/Buenos_Aires", "Buenos Aires", "Argentina");
        add("Europe/London", "London", "United Kingdom");
        add("Europe/Dublin", "Dublin", "Ireland");
        add("Europe/Lisbon", "Lisbon", "Portugal");
        add("Europe/Madrid", "Madrid", "Spain");
        add("Europe/Paris", "Paris", "France");
        add("Europe/Amsterdam", "Amsterdam", "Netherlands");
        add("Europe/Berlin", "Berlin", "Germany");
        add("Europe/Rome", "Rome", "Italy");
        add("Europe/Zurich", "Zurich", "Switzerland");
        add("Europe/Stockholm", "Stockholm", "Sweden");
        add("Europe/Helsinki", "Helsinki", "Finland");
        add("Europe/Warsaw", "Warsaw", "Poland");
        add("Europe/Athens", "Athens", "Greece");
        add("Europe/Istanbul", "Istanbul", "Türkiye");
        add("Europe/Kyiv", "Kyiv", "Ukraine");
        add("Europe/Moscow", "Moscow", "Russia");
        add("Africa/Cairo", "Cairo", "Egypt");
        add("Africa/Lagos", "Lagos", "Nigeria");
        add("Africa/Nairobi", "Nairobi", "Kenya");
        add("Africa/Johannesburg", "Johannesburg", "South Africa");
        add("Asia/Dubai", "Dubai", "United Arab Emirates");
        add("Asia/Karachi", "Karachi", "Pakistan");
        add("Asia/Kolkata", "Mumbai", "India");
        add("Asia/Dhaka", "Dhaka", "Bangladesh");
        add("Asia/Bangkok", "Bangkok", "Thailand");
        add("Asia/Jakarta", "Jakarta", "Indonesia");
        add("Asia/Singapore", "Singapore", "Singapore");
        add("Asia/Hong_Kong", "Hong Kong", "Hong Kong");
        add("Asia/Shanghai", "Shanghai", "China");
        add("Asia/Taipei", "Taipei", "Taiwan");
        add("Asia/Seoul", "Seoul", "South Korea");
        add("Asia/Tokyo", "Tokyo", "Japan");
        add("Asia/Manila", "Manila", "Philippines");
        add("Australia/Perth", "Perth", "Australia");
        add("Australia/Sydney", "Sydney", "Australia");
        add("Australia/Melbourne", "Melbourne", "Australia");
        add("Australia/Brisbane", "Brisbane", "Australia");
        add("Pacific/Auckland", "Auckland", "New Zealand");
        add("Pacific/Honolulu", "Honolulu", "United States");
        map
    };
}

/// Maximum number of hits returned by [`search_cities`]
const MAX_SEARCH_RESULTS: usize = 10;

/// Look up display metadata for a timezone identifier
pub fn city_info(timezone: &str) -> Option<&'static CityInfo> {
    TIMEZONE_CITY_MAP.get(timezone)
}

/// Display name for a timezone identifier.
///
/// Falls back to deriving a name from the identifier itself (last path
/// segment, underscores replaced with spaces) when no entry exists, so an
/// unmapped identifier still renders something readable.
pub fn display_name(timezone: &str) -> String {
    match city_info(timezone) {
        Some(info) if !info.country.is_empty() => format!("{} ({})", info.city, info.country),
        Some(info) => info.city.to_string(),
        None => derive_city_name(timezone),
    }
}

/// Mechanical fallback: "America/New_York" becomes "New York"
fn derive_city_name(timezone: &str) -> String {
    timezone
        .rsplit('/')
        .next()
        .unwrap_or(timezone)
        .replace('_', " ")
}

/// Case-insensitive substring search over city, country, and identifier
pub fn search_cities(query: &str) -> Vec<CityMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    COMMON_TIMEZONES
        .iter()
        .filter_map(|&timezone| {
            let (city, country) = match city_info(timezone) {
                Some(info) => (info.city.to_string(), info.country.to_string()),
                None => (derive_city_name(timezone), String::new()),
            };
            let matches = city.to_lowercase().contains(&query)
                || country.to_lowercase().contains(&query)
                || timezone.to_lowercase().contains(&query);
            matches.then(|| CityMatch {
                timezone,
                display_name: display_name(timezone),
                city,
                country,
            })
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
