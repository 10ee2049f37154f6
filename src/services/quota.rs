use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySql, Transaction};

/// The kinds of quota-gated writes. Limits are policy values from config, not
/// structural constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Completion,
    Replacement,
}

#[derive(Debug, Clone, Copy)]
pub struct QuotaLimits {
    pub completions_per_day: i64,
    pub replacements_per_day: i64,
}

impl QuotaLimits {
    pub fn limit_for(&self, kind: ActionKind) -> i64 {
        match kind {
            ActionKind::Completion => self.completions_per_day,
            ActionKind::Replacement => self.replacements_per_day,
        }
    }
}

/// The one definition of a calendar day used by every quota count and period
/// listing: [00:00:00.000000, 23:59:59.999999] UTC.
pub fn utc_day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let end = day.and_hms_micro_opt(23, 59, 59, 999_999).unwrap().and_utc();
    (start, end)
}

/// Serialize quota-gated writes for one user by taking a row lock on the user
/// inside the caller's transaction. Two concurrent check-then-insert attempts
/// cannot both observe the pre-insert count; the second blocks until the
/// first commits or rolls back.
pub async fn lock_user_row(
    tx: &mut Transaction<'_, MySql>,
    user_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT id FROM users WHERE id = ? FOR UPDATE")
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(())
}
