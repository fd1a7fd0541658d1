use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    In,
    Out,
}

impl EventType {
    /// Convert enum → ledger string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::In => "in",
            EventType::Out => "out",
        }
    }

    /// The kind a new check event gets, given the newest event in the ledger.
    pub fn toggle_after(last: Option<EventType>) -> Self {
        match last {
            Some(EventType::In) => EventType::Out,
            Some(EventType::Out) | None => EventType::In,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }
}

/// Convert ledger string → enum. Matching is exact: `IN` or `Out` are rejected.
impl FromStr for EventType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(EventType::In),
            "out" => Ok(EventType::Out),
            other => Err(AppError::InvalidEventType(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
