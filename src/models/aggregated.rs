/// Totals for one calendar group (day, ISO week, month or year).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRecord {
    pub group: String,
    pub total_hours: f64,
    /// Distinct calendar dates (by check-in) that contributed to the group.
    pub dates: Vec<String>,
    pub notes: Vec<String>,
    pub average_hours: f64,
}

impl AggregatedRecord {
    pub fn active_days(&self) -> usize {
        self.dates.len()
    }
}
