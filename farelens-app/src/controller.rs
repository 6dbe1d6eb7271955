use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use farelens_client::SearchBackend;
use farelens_core::model::SearchQuery;
use farelens_render::html::{render_error_panel, render_results};
use farelens_render::view::build_results;

use crate::surface::ViewSurface;

/// Owns the top-level submit flow: in-flight guard, loading state, one
/// request, and dispatch to the results renderer or the error panel.
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    surface: Arc<dyn ViewSurface>,
    in_flight: AtomicBool,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>, surface: Arc<dyn ViewSurface>) -> Self {
        Self {
            backend,
            surface,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs one search to settlement. A submission made while another is
    /// still pending is ignored.
    pub async fn submit(&self, query: &SearchQuery) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("ignoring submission while a search is pending");
            return;
        }

        self.surface.show_loading();
        self.surface.set_results("");

        // Hides the loading indicator and releases the in-flight flag
        // exactly once on every exit path.
        let _settled = SettleGuard {
            surface: self.surface.as_ref(),
            in_flight: &self.in_flight,
        };

        match self.backend.search_flights(query).await {
            Ok(result) => {
                let view = build_results(Some(&result));
                self.surface.set_results(&render_results(&view));
            }
            Err(err) => {
                tracing::error!("flight search failed: {}", err);
                self.surface
                    .set_results(&render_error_panel(err.user_message()));
            }
        }
    }
}

struct SettleGuard<'a> {
    surface: &'a dyn ViewSurface,
    in_flight: &'a AtomicBool,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.surface.hide_loading();
        self.in_flight.store(false, Ordering::SeqCst);
    }
}
