use serde::{Deserialize, Serialize};

/// Display period of the chart. Drives label formatting and label counts,
/// never numeric scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

/// Month views show every label up to this many samples.
pub const MAX_MONTH_X_AXIS_LABELS: usize = 8;

/// Which samples receive an X-axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XLabelSelection {
    All,
    FirstAndLast,
}

impl Granularity {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Display name for period selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    #[must_use]
    pub fn x_label_selection(self, sample_count: usize) -> XLabelSelection {
        match self {
            Self::Day if sample_count >= 2 => XLabelSelection::FirstAndLast,
            Self::Month if sample_count > MAX_MONTH_X_AXIS_LABELS => XLabelSelection::FirstAndLast,
            Self::Day | Self::Week | Self::Month | Self::Year => XLabelSelection::All,
        }
    }
}
