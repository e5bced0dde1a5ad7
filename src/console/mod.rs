//! Console rendering for the dashboard. What the browser laid out as a
//! widget grid becomes a set of titled text blocks on stdout.

mod widgets;


pub(crate) use widgets::{DashboardWidget, build_widgets, render_widgets};
