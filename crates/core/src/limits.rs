//! Fixed purchase limits.

/// Most tickets a single purchase (and a single line item) may contain.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// A reservation must be for strictly more seats than this.
pub const MIN_SEATS: u32 = 0;
