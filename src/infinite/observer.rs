//! Viewport-based visibility observer.
//!
//! The renderer reports the scrolled viewport and where observable elements
//! sit in content coordinates (lines). [`ViewportObserver::evaluate`] then
//! compares the two and fires callbacks for elements that have crossed into
//! view since the last check.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{ElementId, Subscription, VisibilityObserver, VisibleCallback};

/// A vertical span of content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub top: usize,
    pub height: usize,
}

impl Region {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Fraction of this region that lies inside `viewport`, in `0.0..=1.0`.
    pub fn visible_ratio(&self, viewport: Region) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        let top = self.top.max(viewport.top);
        let bottom = self.bottom().min(viewport.bottom());
        if bottom <= top {
            return 0.0;
        }
        (bottom - top) as f32 / self.height as f32
    }
}

struct Observation {
    element: ElementId,
    threshold: f32,
    callback: VisibleCallback,
    /// Whether the element was at or above threshold at the last evaluation
    intersecting: bool,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    observations: HashMap<u64, Observation>,
    viewport: Option<Region>,
    regions: HashMap<ElementId, Region>,
}

/// Observer fed by the renderer.
///
/// Cloning shares the same registry. Callbacks run while the registry is
/// locked and must not call back into the observer; sending on a channel is
/// the intended use.
#[derive(Clone, Default)]
pub struct ViewportObserver {
    registry: Arc<Mutex<Registry>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_viewport(&self, viewport: Region) {
        self.lock().viewport = Some(viewport);
    }

    pub fn set_region(&self, element: ElementId, region: Region) {
        self.lock().regions.insert(element, region);
    }

    /// Forget an element's position (it is no longer rendered).
    pub fn remove_region(&self, element: ElementId) {
        self.lock().regions.remove(&element);
    }

    pub fn observation_count(&self) -> usize {
        self.lock().observations.len()
    }

    /// Fire callbacks for every observed element that has become visible
    /// since the previous evaluation. Returns how many callbacks fired.
    pub fn evaluate(&self) -> usize {
        let mut registry = self.lock();
        let Some(viewport) = registry.viewport else {
            return 0;
        };

        let Registry {
            observations,
            regions,
            ..
        } = &mut *registry;

        let mut fired = 0;
        for observation in observations.values_mut() {
            let ratio = regions
                .get(&observation.element)
                .map(|region| region.visible_ratio(viewport))
                .unwrap_or(0.0);
            let visible = ratio > 0.0 && ratio >= observation.threshold;

            if visible && !observation.intersecting {
                tracing::debug!(element = %observation.element, ratio, "Element became visible");
                (observation.callback)();
                fired += 1;
            }
            observation.intersecting = visible;
        }
        fired
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(
        &self,
        element: ElementId,
        threshold: f32,
        on_visible: VisibleCallback,
    ) -> Subscription {
        let id = {
            let mut registry = self.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observations.insert(
                id,
                Observation {
                    element,
                    threshold: threshold.clamp(0.0, 1.0),
                    callback: on_visible,
                    intersecting: false,
                },
            );
            id
        };

        let registry = Arc::downgrade(&self.registry);
        Subscription::new(id, move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .observations
                    .remove(&id);
            }
        })
    }
}
