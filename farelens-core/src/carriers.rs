use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Carrier code to display name. Fixed data maintained by hand; there is no
/// dynamic update path.
static CARRIER_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("D8", "Norwegian Air"),
        ("LH", "Lufthansa"),
        ("BA", "British Airways"),
        ("AF", "Air France"),
        ("LY", "El Al"),
        ("TK", "Turkish Airlines"),
        ("EK", "Emirates"),
        ("DL", "Delta Airlines"),
        ("AA", "American Airlines"),
        ("UA", "United Airlines"),
        ("UX", "Air Europa"),
        ("DY", "Norwegian Air Shuttle"),
        ("BT", "Air Baltic"),
        ("A3", "Aegean Airlines"),
        ("VY", "Vueling Airlines"),
        ("LX", "Swiss International Air Lines"),
        ("KM", "KM Malta Airlines"),
    ])
});

/// Display name for a 2-character carrier code. Unknown codes come back
/// unchanged, so the lookup is total and never empty.
pub fn carrier_name(code: &str) -> &str {
    CARRIER_NAMES.get(code).copied().unwrap_or(code)
}
