pub mod daily;
pub mod samples;
pub mod sleep;

pub use daily::{ActivitySummary, DailyStatistics, HeartRateSummary, NewDailyStatistics};
pub use samples::{
  timestamp_from_epoch_millis, HrSample, MovementSample, NewHrSample, NewMovementSample,
};
pub use sleep::{NewSleep, NewSleepMovement, Sleep, SleepMovement};
