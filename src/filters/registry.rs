//! Filter registry resolving renderers and highlighters by name

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::filters::{Highlighter, Renderer};

/// Lookup tables for the named content filters
pub struct FilterRegistry {
    renderers: HashMap<String, Arc<dyn Renderer>>,
    highlighters: HashMap<String, Arc<dyn Highlighter>>,
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FilterRegistry {
            renderers: HashMap::new(),
            highlighters: HashMap::new(),
        }
    }

    /// Register a renderer under a format key
    pub fn register_renderer(
        &mut self,
        name: &str,
        renderer: Arc<dyn Renderer>,
    ) -> Result<(), String> {
        if self.renderers.contains_key(name) {
            return Err(format!("Renderer '{}' is already registered", name));
        }

        debug!("Registering renderer: {}", name);
        self.renderers.insert(name.to_string(), renderer);

        Ok(())
    }

    /// Register a highlighter under a name
    pub fn register_highlighter(
        &mut self,
        name: &str,
        highlighter: Arc<dyn Highlighter>,
    ) -> Result<(), String> {
        if self.highlighters.contains_key(name) {
            return Err(format!("Highlighter '{}' is already registered", name));
        }

        debug!("Registering highlighter: {}", name);
        self.highlighters.insert(name.to_string(), highlighter);

        Ok(())
    }

    /// Get a renderer by format key
    pub fn renderer(&self, name: &str) -> Option<Arc<dyn Renderer>> {
        self.renderers.get(name).cloned()
    }

    /// Get a highlighter by name
    pub fn highlighter(&self, name: &str) -> Option<Arc<dyn Highlighter>> {
        self.highlighters.get(name).cloned()
    }

    /// Number of registered filters
    pub fn len(&self) -> usize {
        self.renderers.len() + self.highlighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty() && self.highlighters.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
