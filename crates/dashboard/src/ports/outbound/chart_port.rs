//! Chart Port - lifecycle of rendered charts
//!
//! A rendered chart holds rendering resources until it is disposed. Owners
//! must dispose a handle before rendering its replacement and when they are
//! torn down; handles are never mutated in place.

use scoutdesk_domain::RadarChartSpec;

/// Builds a live chart from a declarative spec.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ChartRenderer {
    fn render(&self, spec: &RadarChartSpec) -> Box<dyn ChartHandle>;
}

/// A live chart instance.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ChartHandle {
    /// Release every resource held by the chart. Called exactly once.
    fn dispose(&mut self);
}
