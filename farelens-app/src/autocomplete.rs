use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use farelens_client::SearchBackend;
use farelens_render::html::render_suggestions;

use crate::surface::{Field, ViewSurface};

/// Fires one suggestion lookup per keystroke per field and replaces that
/// field's suggestion list. Overlapping requests for the same field are
/// disambiguated with a generation counter: only the response matching the
/// latest issued request is applied, stale ones are discarded.
pub struct AutocompleteController {
    backend: Arc<dyn SearchBackend>,
    surface: Arc<dyn ViewSurface>,
    origin_generation: AtomicU64,
    destination_generation: AtomicU64,
}

impl AutocompleteController {
    pub fn new(backend: Arc<dyn SearchBackend>, surface: Arc<dyn ViewSurface>) -> Self {
        Self {
            backend,
            surface,
            origin_generation: AtomicU64::new(0),
            destination_generation: AtomicU64::new(0),
        }
    }

    /// Handles one input event. No debouncing and no minimum length; the
    /// raw text goes straight to the backend.
    pub async fn input(&self, field: Field, text: &str) {
        let counter = self.generation(field);
        let issued = counter.fetch_add(1, Ordering::SeqCst) + 1;

        match self.backend.autocomplete(text).await {
            Ok(suggestions) => {
                if counter.load(Ordering::SeqCst) != issued {
                    tracing::debug!(
                        "dropping stale {} suggestions for {:?}",
                        suggestions.len(),
                        field
                    );
                    return;
                }
                self.surface
                    .set_suggestions(field, &render_suggestions(&suggestions));
            }
            Err(err) => {
                // A failed lookup leaves the current list in place.
                tracing::debug!("autocomplete lookup for {} failed: {}", field.label(), err);
            }
        }
    }

    fn generation(&self, field: Field) -> &AtomicU64 {
        match field {
            Field::Origin => &self.origin_generation,
            Field::Destination => &self.destination_generation,
        }
    }
}
