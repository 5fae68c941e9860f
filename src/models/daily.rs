use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of aggregates, the root every other table hangs off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyStatistics {
  pub id: i64,
  pub entry_date: NaiveDate,
  pub max_hr: Option<i64>,
  pub min_hr: Option<i64>,
  pub resting_hr: Option<i64>,
  pub total_sleep: Option<i64>,
  pub total_steps: Option<i64>,
  pub highly_active_seconds: Option<i64>,
  pub active_seconds: Option<i64>,
  pub sedentary_seconds: Option<i64>,
  pub sleeping_seconds: Option<i64>,
  pub max_stress_level: Option<i64>,
  pub low_stress_duration: Option<i64>,
  pub medium_stress_duration: Option<i64>,
  pub high_stress_duration: Option<i64>,
}

/// For inserting a new day (without id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDailyStatistics {
  pub entry_date: NaiveDate,
  pub heart_rate: HeartRateSummary,
  pub total_sleep: Option<i64>,
  pub activity: ActivitySummary,
}

impl NewDailyStatistics {
  /// A day with nothing but its date, as created before any export lands
  pub fn bare(entry_date: NaiveDate) -> Self {
    Self {
      entry_date,
      ..Default::default()
    }
  }
}

/// Heart-rate extremes and resting rate for a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateSummary {
  pub max_hr: Option<i64>,
  pub min_hr: Option<i64>,
  pub resting_hr: Option<i64>,
}

/// Steps, activity buckets and stress buckets from the daily summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
  pub total_steps: Option<i64>,
  pub highly_active_seconds: Option<i64>,
  pub active_seconds: Option<i64>,
  pub sedentary_seconds: Option<i64>,
  pub sleeping_seconds: Option<i64>,
  pub max_stress_level: Option<i64>,
  pub low_stress_duration: Option<i64>,
  pub medium_stress_duration: Option<i64>,
  pub high_stress_duration: Option<i64>,
}

impl DailyStatistics {
  pub fn heart_rate(&self) -> HeartRateSummary {
    HeartRateSummary {
      max_hr: self.max_hr,
      min_hr: self.min_hr,
      resting_hr: self.resting_hr,
    }
  }

  pub fn activity(&self) -> ActivitySummary {
    ActivitySummary {
      total_steps: self.total_steps,
      highly_active_seconds: self.highly_active_seconds,
      active_seconds: self.active_seconds,
      sedentary_seconds: self.sedentary_seconds,
      sleeping_seconds: self.sleeping_seconds,
      max_stress_level: self.max_stress_level,
      low_stress_duration: self.low_stress_duration,
      medium_stress_duration: self.medium_stress_duration,
      high_stress_duration: self.high_stress_duration,
    }
  }

  /// True when no measurement column has been filled yet
  pub fn is_bare(&self) -> bool {
    self.heart_rate() == HeartRateSummary::default()
      && self.total_sleep.is_none()
      && self.activity() == ActivitySummary::default()
  }
}
