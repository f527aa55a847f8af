mod entry;
mod repository;
mod streak;
mod value_objects;

#[cfg(test)]
mod streak_test;

pub use entry::WakeLogEntry;
pub use repository::WakeLogRepository;
pub use streak::StreakEngine;
pub use value_objects::CutoffHour;
