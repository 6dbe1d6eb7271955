use farelens_core::model::{FlightEndpoint, FlightOffer, SearchResult};
use farelens_core::{carrier_name, format_duration};
use serde_json::Value;

/// Which results column a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Departure,
    Return,
}

impl Direction {
    pub fn heading(&self) -> &'static str {
        match self {
            Direction::Departure => "Departure Flights",
            Direction::Return => "Return Flights",
        }
    }

    pub fn empty_notice(&self) -> &'static str {
        match self {
            Direction::Departure => "No departure flights found for your search criteria.",
            Direction::Return => "No return flights found for your search criteria.",
        }
    }

    pub fn failure_notice(&self) -> &'static str {
        match self {
            Direction::Departure => "Error processing departure flights.",
            Direction::Return => "Error processing return flights.",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Direction::Departure => "departure",
            Direction::Return => "return",
        }
    }
}

/// One side of a flight card: airport code, city (with the "Airport"
/// fallback already applied) and the HH:MM clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointView {
    pub iata_code: String,
    pub city: String,
    pub clock_time: String,
}

/// Everything needed to render one flight card, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub carrier: String,
    pub price: String,
    pub departure: EndpointView,
    pub arrival: EndpointView,
    pub duration: String,
}

/// Body of one results column. `Cards` may be shorter than the offer list
/// when malformed offers were skipped, and may even be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnBody {
    Empty,
    Cards(Vec<CardView>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub direction: Direction,
    pub body: ColumnBody,
}

/// The whole results area for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Payload absent, or neither flight list present. Terminal for this
    /// search; no columns are shown.
    Invalid,
    Columns {
        outbound: ColumnView,
        inbound: ColumnView,
    },
}

/// Builds the view for one search result. The two columns are built
/// independently, so a failure in one never suppresses the other.
pub fn build_results(payload: Option<&SearchResult>) -> ResultsView {
    let result = match payload {
        Some(result) if !result.is_invalid() => result,
        _ => return ResultsView::Invalid,
    };

    ResultsView::Columns {
        outbound: build_column(Direction::Departure, result.departure_flights.as_ref()),
        inbound: build_column(Direction::Return, result.return_flights.as_ref()),
    }
}

/// Builds one column from a raw flight list. An absent list counts as
/// empty; a present list that is not an array degrades the whole column.
pub fn build_column(direction: Direction, list: Option<&Value>) -> ColumnView {
    let body = match list {
        None => ColumnBody::Empty,
        Some(Value::Array(offers)) if offers.is_empty() => ColumnBody::Empty,
        Some(Value::Array(offers)) => {
            ColumnBody::Cards(offers.iter().filter_map(build_card).collect())
        }
        Some(other) => {
            tracing::warn!(
                "{} flight list is not an array (got {:?})",
                direction.label(),
                value_kind(other)
            );
            ColumnBody::Failed
        }
    };
    ColumnView { direction, body }
}

/// Builds the card for one raw offer, or None when the offer is malformed
/// in any way. A bad offer contributes nothing; it must never suppress its
/// siblings.
pub fn build_card(raw: &Value) -> Option<CardView> {
    let offer: FlightOffer = match serde_json::from_value(raw.clone()) {
        Ok(offer) => offer,
        Err(err) => {
            tracing::debug!("skipping offer that failed to decode: {}", err);
            return None;
        }
    };

    let card = card_from_offer(&offer);
    if card.is_none() {
        tracing::debug!("skipping structurally incomplete offer");
    }
    card
}

fn card_from_offer(offer: &FlightOffer) -> Option<CardView> {
    // First itinerary, first segment. Connections beyond the first leg are
    // deliberately not shown.
    let itinerary = offer.itineraries.as_ref()?.first()?;
    let segment = itinerary.segments.as_ref()?.first()?;

    let total = offer.price.as_ref()?.total.as_deref()?;
    let amount: f64 = total.trim().parse().ok()?;

    Some(CardView {
        carrier: carrier_name(segment.carrier_code.as_deref()?).to_string(),
        price: format!("${:.2}", amount),
        departure: endpoint_view(segment.departure.as_ref()?)?,
        arrival: endpoint_view(segment.arrival.as_ref()?)?,
        duration: format_duration(segment.duration.as_deref()?),
    })
}

fn endpoint_view(endpoint: &FlightEndpoint) -> Option<EndpointView> {
    let at = endpoint.at.as_deref()?;
    // Clock time is the substring after the date separator, HH:MM only.
    let (_, time) = at.split_once('T')?;

    Some(EndpointView {
        iata_code: endpoint.iata_code.clone()?,
        city: endpoint
            .city_name
            .clone()
            .unwrap_or_else(|| "Airport".to_string()),
        clock_time: time.chars().take(5).collect(),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer(carrier: &str, total: &str) -> Value {
        json!({
            "itineraries": [{
                "segments": [{
                    "carrierCode": carrier,
                    "duration": "PT2H30M",
                    "departure": {"iataCode": "JFK", "cityName": "New York", "at": "2026-09-01T08:15:00"},
                    "arrival": {"iataCode": "LHR", "at": "2026-09-01T20:45:00"}
                }]
            }],
            "price": {"total": total}
        })
    }

    #[test]
    fn test_card_formats_every_field() {
        let card = build_card(&offer("LH", "512.4")).expect("card should build");
        assert_eq!(card.carrier, "Lufthansa");
        assert_eq!(card.price, "$512.40");
        assert_eq!(card.duration, "2h 30min");
        assert_eq!(card.departure.iata_code, "JFK");
        assert_eq!(card.departure.city, "New York");
        assert_eq!(card.departure.clock_time, "08:15");
        // Missing city falls back to the literal "Airport".
        assert_eq!(card.arrival.city, "Airport");
        assert_eq!(card.arrival.clock_time, "20:45");
    }

    #[test]
    fn test_unknown_carrier_renders_raw_code() {
        let card = build_card(&offer("Q9", "100")).expect("card should build");
        assert_eq!(card.carrier, "Q9");
    }

    #[test]
    fn test_malformed_offers_are_skipped() {
        assert_eq!(build_card(&json!({})), None);
        assert_eq!(build_card(&json!({"itineraries": []})), None);
        assert_eq!(build_card(&json!({"itineraries": "bogus"})), None);
        assert_eq!(build_card(&json!(42)), None);

        // Timestamp without the date separator.
        let mut bad_time = offer("LH", "100");
        bad_time["itineraries"][0]["segments"][0]["departure"]["at"] = json!("08:15:00");
        assert_eq!(build_card(&bad_time), None);

        // Unparseable price.
        assert_eq!(build_card(&offer("LH", "free!")), None);
    }

    #[test]
    fn test_one_bad_offer_does_not_suppress_siblings() {
        let list = json!([offer("LH", "100"), {"price": {"total": "50"}}, offer("BA", "200")]);
        let column = build_column(Direction::Departure, Some(&list));
        match column.body {
            ColumnBody::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].carrier, "Lufthansa");
                assert_eq!(cards[1].carrier, "British Airways");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_absent_lists_are_empty_columns() {
        let empty = build_column(Direction::Return, Some(&json!([])));
        assert_eq!(empty.body, ColumnBody::Empty);

        let absent = build_column(Direction::Return, None);
        assert_eq!(absent.body, ColumnBody::Empty);
    }

    #[test]
    fn test_non_array_list_fails_the_column_only() {
        let column = build_column(Direction::Departure, Some(&json!({"oops": true})));
        assert_eq!(column.body, ColumnBody::Failed);
    }

    #[test]
    fn test_results_invalid_when_both_lists_absent() {
        let result: SearchResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(build_results(Some(&result)), ResultsView::Invalid);
        assert_eq!(build_results(None), ResultsView::Invalid);
    }

    #[test]
    fn test_results_builds_both_columns_independently() {
        let result: SearchResult = serde_json::from_value(json!({
            "departure_flights": [offer("LH", "100")],
            "return_flights": "not-a-list"
        }))
        .unwrap();

        match build_results(Some(&result)) {
            ResultsView::Columns { outbound, inbound } => {
                assert!(matches!(outbound.body, ColumnBody::Cards(ref cards) if cards.len() == 1));
                assert_eq!(inbound.body, ColumnBody::Failed);
            }
            other => panic!("expected columns, got {:?}", other),
        }
    }
}
