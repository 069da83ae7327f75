/// Time primitives
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64); // epoch milliseconds

impl Timestamp {
    pub fn millis(&self) -> i64 {
        self.0
    }

    /// The key used when ordering events by time.
    ///
    /// Absent timestamps sort as the earliest possible value, so they sink to
    /// the end of a newest-first ordering.
    pub fn sort_key(t: Option<Timestamp>) -> i64 {
        t.map(|t| t.0).unwrap_or(i64::MIN)
    }
}
