/// The input field a suggestion list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Field {
    Origin,
    Destination,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
        }
    }
}

/// Render targets injected into the controllers. The page (or here, the
/// CLI driver) owns the real output; controllers only ever talk to this
/// trait, which keeps them testable against a recording implementation.
///
/// Each `set_*` call replaces the target's previous content outright.
pub trait ViewSurface: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn set_results(&self, html: &str);
    fn set_suggestions(&self, field: Field, html: &str);
}

/// Surface for the CLI driver: fragments go to stdout, loading transitions
/// to the log.
pub struct ConsoleSurface;

impl ViewSurface for ConsoleSurface {
    fn show_loading(&self) {
        tracing::info!("searching...");
    }

    fn hide_loading(&self) {
        tracing::info!("search settled");
    }

    fn set_results(&self, html: &str) {
        if !html.is_empty() {
            println!("{}", html);
        }
    }

    fn set_suggestions(&self, field: Field, html: &str) {
        println!("<!-- {} suggestions -->{}", field.label(), html);
    }
}
