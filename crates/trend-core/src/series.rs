// File: crates/trend-core/src/series.rs
// Summary: Series store: datasets keyed by time range plus display formatters.

use std::collections::HashMap;

use crate::format::ValueFormatter;

/// Selects which sub-dataset (by time span) is displayed for a metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeKey {
    Short,
    Medium,
    Full,
}

impl RangeKey {
    pub const ALL: [RangeKey; 3] = [RangeKey::Short, RangeKey::Medium, RangeKey::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeKey::Short => "short",
            RangeKey::Medium => "medium",
            RangeKey::Full => "full",
        }
    }

    /// Parse a selector value coming from the range control.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short" => Some(RangeKey::Short),
            "medium" => Some(RangeKey::Medium),
            "full" => Some(RangeKey::Full),
            _ => None,
        }
    }
}

/// Ordered (label, value) pairs for one time range. Order is chronological
/// and significant; a dataset is immutable once built and replaced
/// wholesale when the active range changes.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from parallel labels and values. Pairs whose value
    /// is non-finite are dropped so min/max never see NaN; extra entries on
    /// either side are ignored.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let mut out = Self {
            labels: Vec::with_capacity(values.len()),
            values: Vec::with_capacity(values.len()),
        };
        for (label, value) in labels.into_iter().zip(values) {
            if value.is_finite() {
                out.labels.push(label);
                out.values.push(value);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// One logical metric: a dataset per range key plus its two formatters.
/// Built once at page setup and never mutated afterwards; only the
/// *selected* key changes.
pub struct SeriesDefinition {
    ranges: HashMap<RangeKey, Dataset>,
    pub axis_format: ValueFormatter,
    pub tooltip_format: ValueFormatter,
}

impl SeriesDefinition {
    pub fn new(axis_format: ValueFormatter, tooltip_format: ValueFormatter) -> Self {
        Self { ranges: HashMap::new(), axis_format, tooltip_format }
    }

    pub fn with_range(mut self, key: RangeKey, dataset: Dataset) -> Self {
        self.ranges.insert(key, dataset);
        self
    }

    pub fn dataset(&self, key: RangeKey) -> Option<&Dataset> {
        self.ranges.get(&key)
    }
}

/// Selected range per chart instance, for pages hosting several charts.
/// Process-lifetime; written only by range-selector input.
pub struct ActiveRanges {
    selected: HashMap<String, RangeKey>,
    default: RangeKey,
}

impl ActiveRanges {
    pub fn new(default: RangeKey) -> Self {
        Self { selected: HashMap::new(), default }
    }

    pub fn select(&mut self, chart_id: &str, key: RangeKey) {
        self.selected.insert(chart_id.to_string(), key);
    }

    pub fn active(&self, chart_id: &str) -> RangeKey {
        self.selected.get(chart_id).copied().unwrap_or(self.default)
    }
}
