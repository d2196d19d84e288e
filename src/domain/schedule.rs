use chrono::{DateTime, Local};

/// Live status of an expected train. A delay only exists on the `Delayed` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalStatus {
    OnTime,
    Arriving,
    Delayed { minutes: u8 },
}

/// One row of the arrival board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainScheduleEntry {
    pub time: DateTime<Local>,
    pub destination: String,
    /// 1 or 2
    pub platform: u8,
    pub status: ArrivalStatus,
}

impl TrainScheduleEntry {
    /// Scheduled time as local `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn delay(&self) -> Option<u8> {
        match self.status {
            ArrivalStatus::Delayed { minutes } => Some(minutes),
            _ => None,
        }
    }
}
