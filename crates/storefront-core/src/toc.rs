//! # Table-of-Contents Scroll Tracker
//!
//! Determines which document heading is "active" for a synchronized
//! table-of-contents highlight, given the current scroll offset.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  viewport top ─────────────────────────────                             │
//! │        ↑ threshold (100 logical px)                                     │
//! │  ──────┼───────────────────────────────────                             │
//! │        │   Walk headings last → first and pick the first whose          │
//! │  ■ H2  │   viewport-relative top is at or above (<=) the threshold.     │
//! │        │   With several headings already passed, the one closest to     │
//! │  □ H3  │   the threshold wins - the most recently passed heading.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Before any heading has crossed the threshold the **first** heading is
//! active by convention, so the TOC never renders an empty highlight.
//!
//! The scan is O(number of headings) per scroll event (typically a few
//! dozen), cheap enough to run undebounced on the UI thread; callers may
//! throttle without changing observable behavior.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Heading
// =============================================================================

/// A document heading anchor with its measured position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Stable anchor id (`#introduction`).
    pub id: String,

    /// Text shown in the table of contents.
    pub title: String,

    /// Document-relative top offset in logical pixels, as measured by the
    /// rendering layer when the article mounts.
    pub top: f64,
}

impl Heading {
    pub fn new(id: impl Into<String>, title: impl Into<String>, top: f64) -> Self {
        Heading {
            id: id.into(),
            title: title.into(),
            top,
        }
    }
}

// =============================================================================
// Tracker
// =============================================================================

/// Tracks the active section across scroll events.
///
/// Holds the heading list for the lifetime of the article view; the
/// rendering layer feeds it scroll offsets and re-highlights the TOC only
/// when [`TocTracker::on_scroll`] reports a change.
#[derive(Debug, Clone)]
pub struct TocTracker {
    headings: Vec<Heading>,
    threshold: f64,
    active: Option<usize>,
}

impl TocTracker {
    /// Creates a tracker with the default threshold
    /// ([`crate::SCROLL_ACTIVE_THRESHOLD_PX`]).
    ///
    /// Headings must be in document order. Initial active section is the
    /// first heading (position zero, before any scroll).
    pub fn new(headings: Vec<Heading>) -> Self {
        TocTracker::with_threshold(headings, crate::SCROLL_ACTIVE_THRESHOLD_PX)
    }

    /// Creates a tracker with a custom activation threshold.
    pub fn with_threshold(headings: Vec<Heading>, threshold: f64) -> Self {
        let active = if headings.is_empty() { None } else { Some(0) };
        TocTracker {
            headings,
            threshold,
            active,
        }
    }

    /// The tracked headings, in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Pure scan: index of the active heading at a given scroll offset.
    ///
    /// Walks last → first and picks the first heading whose viewport-relative
    /// top (`top - scroll_y`) is at or above the threshold; the backward scan
    /// with early exit makes the most recently passed heading win. When no
    /// heading qualifies yet, the first heading is active. `None` only for an
    /// empty heading list.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::toc::{Heading, TocTracker};
    ///
    /// let tracker = TocTracker::new(vec![
    ///     Heading::new("intro", "Introduction", 0.0),
    ///     Heading::new("setup", "Setup", 500.0),
    ///     Heading::new("usage", "Usage", 1000.0),
    /// ]);
    ///
    /// // Second heading sits 50 px from the viewport top: active
    /// assert_eq!(tracker.active_at(450.0), Some(1));
    /// ```
    pub fn active_at(&self, scroll_y: f64) -> Option<usize> {
        for idx in (0..self.headings.len()).rev() {
            let viewport_top = self.headings[idx].top - scroll_y;
            if viewport_top <= self.threshold {
                return Some(idx);
            }
        }
        // Nothing reached yet: first section by convention
        if self.headings.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Handles a scroll event; returns whether the active section changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let next = self.active_at(scroll_y);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    /// The currently active heading, if any headings exist.
    pub fn active(&self) -> Option<&Heading> {
        self.active.and_then(|idx| self.headings.get(idx))
    }

    /// Anchor id of the currently active heading.
    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|h| h.id.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
