//! # Order Actions
//!
//! Lifecycle operations on a stored order, beyond create and get.

/// Actions the order actor performs on a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Sum the item prices. Read-only.
    CalculatePrice,
    /// Wait out every item's baking time, one after another, then mark the order baked.
    Bake,
    /// Mark the order completed.
    Complete,
}

/// Results corresponding to [`OrderAction`] variants.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    CalculatePrice(f64),
    Bake(()),
    Complete(()),
}
