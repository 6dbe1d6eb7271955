use once_cell::sync::Lazy;
use regex::Regex;

static HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)H").expect("hours pattern"));
static MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)M").expect("minutes pattern"));

/// Formats an ISO-8601 duration token such as "PT2H30M" into "2h 30min".
///
/// Hours and minutes each default to "0" when their component is missing,
/// so "PT45M" gives "45min" and "PT3H" gives "3h". Tokens outside this
/// shape degrade to "0min" or partial output rather than an error; callers
/// must tolerate approximate output for garbage input.
pub fn format_duration(token: &str) -> String {
    let token = token.strip_prefix("PT").unwrap_or(token);
    let hours = component(&HOURS, token);
    let minutes = component(&MINUTES, token);

    if hours == "0" {
        format!("{}min", minutes)
    } else if minutes == "0" {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, minutes)
    }
}

fn component(pattern: &Regex, token: &str) -> String {
    pattern
        .captures(token)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "0".to_string())
}
