use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Search request
// ============================================================================

/// The five search form fields, serialized with the wire's camelCase names.
///
/// No validation happens here beyond uppercasing the location codes;
/// malformed values are forwarded to the backend as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "departureDate")]
    pub departure_date: String,
    #[serde(rename = "returnDate", default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub passengers: String,
}

impl SearchQuery {
    pub fn new(
        origin: &str,
        destination: &str,
        departure_date: &str,
        return_date: Option<&str>,
        passengers: &str,
    ) -> Self {
        Self {
            origin: origin.to_uppercase(),
            destination: destination.to_uppercase(),
            departure_date: departure_date.to_string(),
            return_date: return_date.map(str::to_string),
            passengers: passengers.to_string(),
        }
    }
}

// ============================================================================
// Search response
// ============================================================================

/// Top level of the search response. The two flight lists stay as raw JSON
/// so a present-but-malformed list is representable and can degrade at the
/// column level instead of failing the whole decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub departure_flights: Option<Value>,
    #[serde(default)]
    pub return_flights: Option<Value>,
}

impl SearchResult {
    /// A result is structurally invalid only when both lists are absent.
    pub fn is_invalid(&self) -> bool {
        self.departure_flights.is_none() && self.return_flights.is_none()
    }
}

/// One priced flight option. Only the first itinerary is ever consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffer {
    #[serde(default)]
    pub itineraries: Option<Vec<Itinerary>>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// One direction of travel. Only the first segment is ever consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub segments: Option<Vec<Segment>>,
}

/// A single non-stop leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    #[serde(rename = "carrierCode", default)]
    pub carrier_code: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub departure: Option<FlightEndpoint>,
    #[serde(default)]
    pub arrival: Option<FlightEndpoint>,
}

/// Departure or arrival point of a segment. `at` is a raw timestamp string
/// with a date and a time separated by "T".
#[derive(Debug, Clone, Deserialize)]
pub struct FlightEndpoint {
    #[serde(rename = "iataCode", default)]
    pub iata_code: Option<String>,
    #[serde(rename = "cityName", default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    /// Total price as a numeric string, e.g. "245.90".
    #[serde(default)]
    pub total: Option<String>,
}

// ============================================================================
// Autocomplete
// ============================================================================

/// One entry of the location autocomplete response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSuggestion {
    #[serde(rename = "iataCode")]
    pub iata_code: String,
    pub name: String,
}
