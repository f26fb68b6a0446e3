//! Tunable constants for the dashboard and charts.

use serde::{Deserialize, Serialize};

/// The radius used for the expense ring and the expense pie chart unless
/// otherwise configured.
pub const DEFAULT_CHART_RADIUS: f64 = 40.0;

/// How many categories the expense legend lists unless otherwise configured.
pub const DEFAULT_LEGEND_SIZE: usize = 4;

/// Chart geometry, in the same units the renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// The radius of the expense-of-income ring.
    pub ring_radius: f64,
    /// The radius of the expense breakdown pie chart.
    pub pie_radius: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ring_radius: DEFAULT_CHART_RADIUS,
            pie_radius: DEFAULT_CHART_RADIUS,
        }
    }
}

/// Settings shared by the dashboard and breakdown engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Chart geometry.
    pub charts: ChartConfig,
    /// How many categories the expense legend lists.
    pub legend_size: usize,
    /// The most recent transactions to show on the dashboard. `None` shows
    /// every transaction in the snapshot.
    pub recent_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            charts: ChartConfig::default(),
            legend_size: DEFAULT_LEGEND_SIZE,
            recent_limit: None,
        }
    }
}
