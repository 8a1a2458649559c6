/// Number of questions per listing page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// A 1-based page request over the question listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1 }
    }
}

impl Page {
    pub fn new(number: i64) -> Self {
        Self { number }
    }

    /// Parse the raw `page` query value. Absent or non-integer values fall
    /// back to the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }

    pub fn offset(&self) -> i64 {
        self.number
            .saturating_sub(1)
            .saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// Pages below 1 can never contain rows.
    pub fn is_empty(&self) -> bool {
        self.number < 1
    }
}
