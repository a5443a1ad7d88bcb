//! Focus Mask Tracking
//!
//! While focus mode is on, the tracker holds a pointer-move subscription
//! and derives the geometry of the overlay that keeps a band around the
//! pointer unobscured. While off it holds no subscription at all.

/// Height of the unobscured band around the pointer, in CSS pixels
pub const FOCUS_BAND_HEIGHT: f32 = 120.0;

/// Pointer-move subscription id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Registry of pointer-move subscribers
///
/// Stands in for the host's pointer event source; the engine forwards
/// each pointer sample to it.
#[derive(Debug, Default)]
pub struct PointerEvents {
    subscribers: Vec<SubscriptionId>,
    next_id: u64,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self { subscribers: Vec::new(), next_id: 1 }
    }

    /// Register a subscriber
    pub fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(id);
        id
    }

    /// Remove a subscriber; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|s| *s != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Overlay geometry for one pointer sample
///
/// Derived, never stored: the top mask covers `[0, mask_top_height)` and
/// the bottom mask starts at `mask_bottom_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusMaskGeometry {
    pub mask_top_height: f32,
    pub mask_bottom_start: f32,
}

impl FocusMaskGeometry {
    /// Geometry for a pointer at vertical position `y`
    pub fn at(y: f32) -> Self {
        let half = FOCUS_BAND_HEIGHT / 2.0;
        Self {
            mask_top_height: (y - half).max(0.0),
            mask_bottom_start: y + half,
        }
    }
}

/// Pointer-following reading mask tracker
#[derive(Debug, Default)]
pub struct FocusMaskTracker {
    subscription: Option<SubscriptionId>,
}

impl FocusMaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Align the tracker with the focus-mode setting, synchronously.
    /// Activating twice keeps a single subscription.
    pub fn set_active(&mut self, active: bool, pointer: &mut PointerEvents) {
        match (active, self.subscription) {
            (true, None) => {
                self.subscription = Some(pointer.subscribe());
                log::debug!("focus mask tracker subscribed");
            }
            (false, Some(id)) => {
                pointer.unsubscribe(id);
                self.subscription = None;
                log::debug!("focus mask tracker unsubscribed");
            }
            _ => {}
        }
    }

    /// Geometry for the latest pointer sample; None while inactive
    pub fn sample(&self, y: f32) -> Option<FocusMaskGeometry> {
        self.subscription.map(|_| FocusMaskGeometry::at(y))
    }
}
