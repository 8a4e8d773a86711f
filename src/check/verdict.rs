//! Check outcome reporting.
//!
//! Results are printed as `<name> <STATUS>: <message>` and the process exits
//! with the status code the monitoring agent expects.

use std::fmt;

/// Outcome class of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reported result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub name: String,
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    pub fn unknown(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Unknown, message)
    }

    /// OK when nothing failed, otherwise CRITICAL listing the queue names.
    pub fn from_failing_queues(name: impl Into<String>, failing: &[String]) -> Self {
        if failing.is_empty() {
            Self::new(name, Status::Ok, "")
        } else {
            Self::new(name, Status::Critical, failing.join(" "))
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.name, self.status, self.message)
    }
}
