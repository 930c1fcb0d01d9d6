use chrono::Datelike;
use thiserror::Error;

use crate::day_index;

/// Captions shown under the day's entry, rotated by day of year.
pub const DEFAULT_MESSAGES: &[&str] = &[
    "See Your Investment Grow",
    "Yes, Your Money Was Well Spent",
    "Watch Your Cards Appreciate",
    "Your Collection = Your Retirement Fund",
    "Totally Not an Addiction, It's Investing",
    "Better Than Stocks (Probably)",
    "Your Future Self Will Thank You",
    "Turning Cards into Cash Flow",
    "Chat you are cooked",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("message pool must contain at least one entry")]
    EmptyPool,
}

/// Picks one caption per day from a fixed pool.
///
/// Selection is `pool[day_index % len]`, so any pool of length ≥ 1 is safe
/// for every date; emptiness is rejected at construction. Independent of the
/// entry fetch and may run before it.
#[derive(Debug, Clone)]
pub struct MessageRotator {
    pool: Vec<String>,
}

impl MessageRotator {
    pub fn new(pool: Vec<String>) -> Result<Self, MessageError> {
        if pool.is_empty() {
            return Err(MessageError::EmptyPool);
        }
        Ok(Self { pool })
    }

    pub fn pick(&self, date: impl Datelike) -> &str {
        let index = day_index(date) as usize % self.pool.len();
        &self.pool[index]
    }
}

impl Default for MessageRotator {
    fn default() -> Self {
        Self {
            pool: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}
