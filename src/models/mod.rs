pub mod aggregated;
pub mod event;
pub mod event_type;
pub mod period;
