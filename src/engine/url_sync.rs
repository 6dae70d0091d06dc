//! Keeps a [`UrlPort`] in step with the catalog state.
//!
//! The port is read once, when the initial state is decoded, and written
//! after every transition that [`CatalogAction::affects_url`]. Writes are
//! best-effort: a failed write is logged and not retried.

use super::reducer::{reduce, CatalogAction, CatalogState};
use crate::config::FilterConfig;
use crate::core::FilterDimension;
use crate::url_state::{decode, encode, DecodedState, QueryParams, UrlPort};

/// Drives the URL codec against a navigation target.
#[derive(Debug)]
pub struct UrlSync<P: UrlPort> {
    port: P,
    dimensions: Vec<FilterDimension>,
}

impl<P: UrlPort> UrlSync<P> {
    pub fn new(port: P, config: &FilterConfig) -> Self {
        Self {
            port,
            dimensions: config.dimensions().to_vec(),
        }
    }

    /// Decodes the navigation target's current query string.
    pub fn initial_state(&self) -> DecodedState {
        decode(&QueryParams::parse(&self.port.read()), &self.dimensions)
    }

    /// Writes the state into the current query string.
    ///
    /// Unrelated parameters are preserved. Returns whether the write
    /// succeeded.
    pub fn publish(&mut self, state: &CatalogState) -> bool {
        let current = self.port.read();
        let mut params = QueryParams::parse(&current);
        encode(
            &mut params,
            &state.keyword,
            &state.catalog,
            state.view,
            state.sort,
        );
        let query = params.to_query_string();

        match self.port.write(&query) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to update URL query {:?}: {}", query, e);
                false
            }
        }
    }

    /// Reduces an action and publishes the result if the URL tracks it.
    pub fn dispatch(
        &mut self,
        state: &CatalogState,
        action: &CatalogAction,
        config: &FilterConfig,
    ) -> CatalogState {
        let next = reduce(state, action, config);
        if action.affects_url() {
            self.publish(&next);
        }
        next
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}
