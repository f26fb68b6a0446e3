//! Ring and pie geometry shared by the dashboard charts.
//!
//! The values are stroke parameters for a circle of a given radius, not pixels.
//! A consumer maps them onto its own drawing primitive (e.g. an SVG circle's
//! `stroke-dasharray` and `stroke-dashoffset`).

use std::f64::consts::PI;

use serde::Serialize;

/// The circumference of a circle with `radius`.
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// A single arc drawn over a ring, e.g. expenses as a share of income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGeometry {
    /// The radius of the ring.
    pub radius: f64,
    /// The full length of the ring.
    pub circumference: f64,
    /// The length of the filled arc.
    pub filled_length: f64,
    /// The length of the unfilled remainder. Strokes are drawn in reverse, so
    /// this is the offset to draw the filled arc with.
    pub stroke_offset: f64,
}

impl RingGeometry {
    /// The geometry of a ring of `radius` filled to `percentage` (0-100).
    ///
    /// The percentage is not clamped, e.g. 150% gives a negative offset.
    pub fn new(radius: f64, percentage: f64) -> Self {
        let circumference = circumference(radius);
        let filled_length = circumference * (percentage / 100.0);

        Self {
            radius,
            circumference,
            filled_length,
            stroke_offset: circumference - filled_length,
        }
    }
}

/// One segment of a pie drawn as contiguous arcs around a ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSegment {
    /// The arc length of the segment.
    pub length: f64,
    /// The stroke offset, i.e. the negated length of every segment drawn
    /// before this one.
    pub offset: f64,
}

/// Lay out one segment per share of `total` around a ring of `radius`,
/// starting at angle zero in the order given.
///
/// `total` must be positive.
pub fn pie_segments(
    amounts: impl IntoIterator<Item = f64>,
    total: f64,
    radius: f64,
) -> Vec<PieSegment> {
    let circumference = circumference(radius);
    let mut accumulated = 0.0;

    amounts
        .into_iter()
        .map(|amount| {
            let length = circumference * (amount / total);
            let segment = PieSegment {
                length,
                offset: -accumulated,
            };
            accumulated += length;
            segment
        })
        .collect()
}
