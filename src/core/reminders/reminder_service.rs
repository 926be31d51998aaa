// Reminder business logic.
//
// Turns the raw `<amount> <unit>` arguments into a validated reminder and
// keeps a per-user count of reminders still waiting to fire. Actually waiting
// and pinging is the Discord layer's job.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;
use thiserror::Error;

/// Default cap on reminders waiting to fire for one user.
pub const DEFAULT_MAX_PENDING: u32 = 10;

/// Default cap on how far ahead a reminder may be set.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(365 * 86_400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    /// A 30 day month.
    Months,
}

impl ReminderUnit {
    /// Unit codes are case-sensitive: `m` is minutes, `M` is months.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Self::Seconds),
            "m" => Some(Self::Minutes),
            "h" => Some(Self::Hours),
            "d" => Some(Self::Days),
            "M" => Some(Self::Months),
            _ => None,
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
            Self::Months => 30 * 86_400,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Months => "month",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReminderError {
    #[error("`{0}` is not a whole number")]
    InvalidAmount(String),

    #[error("The amount must be at least 1")]
    ZeroAmount,

    #[error("Unknown unit `{0}`. Use one of s, m, h, d, M")]
    InvalidUnit(String),

    #[error("Reminders can be at most {max_days} days away")]
    TooFar { max_days: u64 },

    #[error("You already have {0} reminders waiting")]
    TooManyPending(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub user_id: u64,
    pub amount: u64,
    pub unit: ReminderUnit,
    pub delay: Duration,
    pub due_at: DateTime<Utc>,
}

impl Reminder {
    /// Human-readable delay, e.g. "5 minutes".
    pub fn describe(&self) -> String {
        format!(
            "{} {}{}",
            self.amount,
            self.unit.name(),
            if self.amount == 1 { "" } else { "s" }
        )
    }
}

pub struct ReminderService {
    /// user_id -> reminders not yet delivered
    pending: DashMap<u64, u32>,
    max_pending: u32,
    max_delay: Duration,
}

impl ReminderService {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_PENDING, DEFAULT_MAX_DELAY)
    }

    pub fn with_limits(max_pending: u32, max_delay: Duration) -> Self {
        Self {
            pending: DashMap::new(),
            max_pending,
            max_delay,
        }
    }

    /// Validate the raw arguments and reserve a pending slot for the user.
    ///
    /// Every successful call must eventually be matched by [`Self::complete`].
    pub fn schedule(
        &self,
        user_id: u64,
        amount: &str,
        unit: &str,
        now: DateTime<Utc>,
    ) -> Result<Reminder, ReminderError> {
        let amount_value: u64 = amount
            .trim()
            .parse()
            .map_err(|_| ReminderError::InvalidAmount(amount.to_string()))?;
        if amount_value == 0 {
            return Err(ReminderError::ZeroAmount);
        }

        let unit_value = ReminderUnit::from_code(unit.trim())
            .ok_or_else(|| ReminderError::InvalidUnit(unit.to_string()))?;

        let max_days = self.max_delay.as_secs() / 86_400;
        let delay = amount_value
            .checked_mul(unit_value.seconds())
            .map(Duration::from_secs)
            .filter(|delay| *delay <= self.max_delay)
            .ok_or(ReminderError::TooFar { max_days })?;
        let offset = chrono::Duration::from_std(delay)
            .map_err(|_| ReminderError::TooFar { max_days })?;

        // Check and reserve under the same entry guard.
        let mut slot = self.pending.entry(user_id).or_insert(0);
        if *slot >= self.max_pending {
            return Err(ReminderError::TooManyPending(*slot));
        }
        *slot += 1;

        Ok(Reminder {
            user_id,
            amount: amount_value,
            unit: unit_value,
            delay,
            due_at: now + offset,
        })
    }

    /// Release the slot taken by [`Self::schedule`] once the reminder has fired.
    pub fn complete(&self, user_id: u64) {
        if let Some(mut slot) = self.pending.get_mut(&user_id) {
            *slot = slot.saturating_sub(1);
        }
        self.pending.remove_if(&user_id, |_, count| *count == 0);
    }

    pub fn pending_for(&self, user_id: u64) -> u32 {
        self.pending.get(&user_id).map(|c| *c).unwrap_or(0)
    }
}

impl Default for ReminderService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn unit_codes_are_case_sensitive() {
        assert_eq!(ReminderUnit::from_code("m"), Some(ReminderUnit::Minutes));
        assert_eq!(ReminderUnit::from_code("M"), Some(ReminderUnit::Months));
        assert_eq!(ReminderUnit::from_code("H"), None);
        assert_eq!(ReminderUnit::from_code("w"), None);
    }

    #[test]
    fn schedule_computes_delay_and_due_time() {
        let service = ReminderService::new();

        let reminder = service.schedule(7, "5", "m", noon()).unwrap();

        assert_eq!(reminder.delay, Duration::from_secs(300));
        assert_eq!(reminder.due_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap());
        assert_eq!(reminder.describe(), "5 minutes");
        assert_eq!(service.pending_for(7), 1);
    }

    #[test]
    fn a_month_is_thirty_days() {
        let service = ReminderService::new();

        let reminder = service.schedule(7, "1", "M", noon()).unwrap();

        assert_eq!(reminder.delay, Duration::from_secs(30 * 86_400));
        assert_eq!(reminder.describe(), "1 month");
    }

    #[test]
    fn rejects_bad_arguments() {
        let service = ReminderService::new();

        assert_eq!(
            service.schedule(7, "soon", "m", noon()),
            Err(ReminderError::InvalidAmount("soon".to_string()))
        );
        assert_eq!(
            service.schedule(7, "-3", "m", noon()),
            Err(ReminderError::InvalidAmount("-3".to_string()))
        );
        assert_eq!(service.schedule(7, "0", "s", noon()), Err(ReminderError::ZeroAmount));
        assert_eq!(
            service.schedule(7, "3", "w", noon()),
            Err(ReminderError::InvalidUnit("w".to_string()))
        );
        assert_eq!(service.pending_for(7), 0);
    }

    #[test]
    fn rejects_delays_past_the_cap_and_overflow() {
        let service = ReminderService::new();

        assert_eq!(
            service.schedule(7, "13", "M", noon()),
            Err(ReminderError::TooFar { max_days: 365 })
        );
        assert_eq!(
            service.schedule(7, &u64::MAX.to_string(), "d", noon()),
            Err(ReminderError::TooFar { max_days: 365 })
        );
    }

    #[test]
    fn pending_reminders_are_capped_per_user() {
        let service = ReminderService::with_limits(2, DEFAULT_MAX_DELAY);

        service.schedule(7, "1", "s", noon()).unwrap();
        service.schedule(7, "1", "s", noon()).unwrap();
        assert_eq!(
            service.schedule(7, "1", "s", noon()),
            Err(ReminderError::TooManyPending(2))
        );

        // Other users are unaffected
        assert!(service.schedule(8, "1", "s", noon()).is_ok());

        service.complete(7);
        assert_eq!(service.pending_for(7), 1);
        assert!(service.schedule(7, "1", "s", noon()).is_ok());
    }

    #[test]
    fn completing_the_last_reminder_clears_the_entry() {
        let service = ReminderService::new();
        service.schedule(7, "10", "s", noon()).unwrap();

        service.complete(7);
        service.complete(7);

        assert_eq!(service.pending_for(7), 0);
        assert!(service.pending.get(&7).is_none());
    }
}
