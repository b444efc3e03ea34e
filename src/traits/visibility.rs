//! Element visibility subscriptions.
//!
//! Visibility-triggered side effects are modelled as explicit subscriptions
//! rather than being wired into rendering. An observer is told (elsewhere)
//! where elements and the viewport are; subscribers only hear "this element
//! became visible".

use std::fmt;

/// Stable identifier of an observable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub &'static str);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Callback invoked each time an observed element crosses into view.
pub type VisibleCallback = Box<dyn FnMut() + Send>;

/// Something that can report when elements become visible.
pub trait VisibilityObserver {
    /// Start watching `element`. `on_visible` fires whenever at least
    /// `threshold` (0.0..=1.0) of the element's area enters the viewport,
    /// including right away if it is already visible at the next check.
    fn observe(
        &self,
        element: ElementId,
        threshold: f32,
        on_visible: VisibleCallback,
    ) -> Subscription;
}

/// Handle returned by [`VisibilityObserver::observe`].
///
/// Dropping the handle unsubscribes, so a subscription cannot outlive the
/// component that owns it.
pub struct Subscription {
    id: u64,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(id: u64, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stop receiving callbacks.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}
