//! HTML fragment rendering. Every interpolated field routes through
//! [`escape`]; nothing else in the codebase builds markup.

use farelens_core::model::LocationSuggestion;

use crate::view::{CardView, ColumnBody, ColumnView, EndpointView, ResultsView};

/// Escapes text for interpolation into an HTML fragment.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the whole results area. The output replaces whatever fragment a
/// previous search produced; it is never merged into it.
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Invalid => render_error_panel("No flights found or invalid data received."),
        ResultsView::Columns { outbound, inbound } => {
            format!("{}{}", render_column(outbound), render_column(inbound))
        }
    }
}

/// The single error panel that replaces the whole results area.
pub fn render_error_panel(message: &str) -> String {
    format!(
        "<div class=\"col-span-full p-4 bg-red-100 text-red-700 rounded-md\">{}</div>",
        escape(message)
    )
}

/// One column: fixed heading, then exactly one of cards, empty notice or
/// failure notice.
pub fn render_column(column: &ColumnView) -> String {
    let mut fragment = format!(
        "<div class=\"w-full md:w-1/2 p-2\"><h2 class=\"text-2xl font-bold mb-4\">{}</h2>",
        escape(column.direction.heading())
    );

    match &column.body {
        ColumnBody::Empty => {
            fragment.push_str(&notice(
                "bg-yellow-100 text-yellow-700",
                column.direction.empty_notice(),
            ));
        }
        ColumnBody::Cards(cards) => {
            for card in cards {
                fragment.push_str(&render_card(card));
            }
        }
        ColumnBody::Failed => {
            fragment.push_str(&notice(
                "bg-red-100 text-red-700",
                column.direction.failure_notice(),
            ));
        }
    }

    fragment.push_str("</div>");
    fragment
}

pub fn render_card(card: &CardView) -> String {
    format!(
        "<div class=\"bg-white rounded-lg shadow-md p-4 mb-4\">\
         <div class=\"flex justify-between items-center mb-4\">\
         <span class=\"text-lg font-semibold\">{carrier}</span>\
         <span class=\"text-xl font-bold text-blue-600\">{price}</span>\
         </div>\
         <div class=\"flex justify-between\">\
         {departure}\
         <div class=\"text-center text-gray-400 self-center\">\
         <div class=\"text-xs\">{duration}</div>\
         </div>\
         {arrival}\
         </div>\
         </div>",
        carrier = escape(&card.carrier),
        price = escape(&card.price),
        departure = render_endpoint(&card.departure, ""),
        duration = escape(&card.duration),
        arrival = render_endpoint(&card.arrival, " text-right"),
    )
}

fn render_endpoint(endpoint: &EndpointView, align: &str) -> String {
    format!(
        "<div class=\"endpoint{align}\">\
         <div class=\"font-medium\">{code}</div>\
         <div class=\"text-sm font-medium text-gray-700\">{city}</div>\
         <div class=\"text-sm text-gray-500\">{time}</div>\
         </div>",
        align = align,
        code = escape(&endpoint.iata_code),
        city = escape(&endpoint.city),
        time = escape(&endpoint.clock_time),
    )
}

/// One `<option>` per suggestion, value set to the IATA code.
pub fn render_suggestions(suggestions: &[LocationSuggestion]) -> String {
    suggestions
        .iter()
        .map(|suggestion| {
            format!(
                "<option value=\"{}\">{} ({})</option>",
                escape(&suggestion.iata_code),
                escape(&suggestion.name),
                escape(&suggestion.iata_code),
            )
        })
        .collect()
}

fn notice(tone: &str, message: &str) -> String {
    format!(
        "<div class=\"p-4 {} rounded-md\">{}</div>",
        tone,
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Direction;

    fn card() -> CardView {
        CardView {
            carrier: "Lufthansa".to_string(),
            price: "$512.40".to_string(),
            departure: EndpointView {
                iata_code: "JFK".to_string(),
                city: "New York".to_string(),
                clock_time: "08:15".to_string(),
            },
            arrival: EndpointView {
                iata_code: "LHR".to_string(),
                city: "Airport".to_string(),
                clock_time: "20:45".to_string(),
            },
            duration: "2h 30min".to_string(),
        }
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>&"it's"</b>"#),
            "&lt;b&gt;&amp;&quot;it&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_card_fields_are_escaped() {
        let mut evil = card();
        evil.carrier = "<script>alert(1)</script>".to_string();
        let html = render_card(&evil);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_invalid_view_is_a_single_panel() {
        let html = render_results(&ResultsView::Invalid);
        assert!(html.contains("No flights found or invalid data received."));
        assert!(!html.contains("Departure Flights"));
        assert!(!html.contains("Return Flights"));
    }

    #[test]
    fn test_column_bodies_are_mutually_exclusive() {
        let empty = render_column(&ColumnView {
            direction: Direction::Return,
            body: ColumnBody::Empty,
        });
        assert!(empty.contains("Return Flights"));
        assert!(empty.contains("No return flights found for your search criteria."));

        let failed = render_column(&ColumnView {
            direction: Direction::Departure,
            body: ColumnBody::Failed,
        });
        assert!(failed.contains("Error processing departure flights."));

        let populated = render_column(&ColumnView {
            direction: Direction::Departure,
            body: ColumnBody::Cards(vec![card(), card()]),
        });
        assert_eq!(populated.matches("$512.40").count(), 2);
        assert!(!populated.contains("No departure flights"));
    }

    #[test]
    fn test_columns_render_in_outbound_inbound_order() {
        let html = render_results(&ResultsView::Columns {
            outbound: ColumnView {
                direction: Direction::Departure,
                body: ColumnBody::Empty,
            },
            inbound: ColumnView {
                direction: Direction::Return,
                body: ColumnBody::Empty,
            },
        });
        let departure = html.find("Departure Flights").expect("missing heading");
        let ret = html.find("Return Flights").expect("missing heading");
        assert!(departure < ret);
    }

    #[test]
    fn test_suggestions_render_one_option_each() {
        let suggestions = vec![
            LocationSuggestion {
                iata_code: "MAD".to_string(),
                name: "Adolfo Suarez Barajas".to_string(),
            },
            LocationSuggestion {
                iata_code: "BCN".to_string(),
                name: "El Prat \"Josep Tarradellas\"".to_string(),
            },
        ];
        let html = render_suggestions(&suggestions);
        assert!(html.contains("<option value=\"MAD\">Adolfo Suarez Barajas (MAD)</option>"));
        // Quotes in names must not break the attribute.
        assert!(html.contains("&quot;Josep Tarradellas&quot;"));
        assert_eq!(html.matches("<option").count(), 2);
    }
}
