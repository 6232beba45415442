// ============================================================================
// Multiplication Job Domain Model
// ============================================================================

use crate::numeric::{ArithmeticResult, DecimalString};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Job
// ============================================================================

/// One multiplication request, as submitted to a batch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiplicationJob {
    /// Unique job identifier
    pub id: JobId,

    /// Left operand
    pub left: DecimalString,

    /// Right operand
    pub right: DecimalString,

    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl MultiplicationJob {
    pub fn new(left: DecimalString, right: DecimalString) -> Self {
        Self {
            id: JobId::new(),
            left,
            right,
            submitted_at: Utc::now(),
        }
    }

    /// Parse both operands from text.
    ///
    /// # Errors
    /// Propagates the first operand's parse error, then the second's.
    pub fn parse(left: &str, right: &str) -> ArithmeticResult<Self> {
        Ok(Self::new(left.parse()?, right.parse()?))
    }

    /// Width `n` the recursion starts from
    pub fn width(&self) -> usize {
        self.left.len().max(self.right.len())
    }
}

/// Result of one job in a batch. Failures are isolated per job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    /// Job this outcome belongs to
    pub job_id: JobId,

    /// Product, or the error that aborted this job only
    pub result: ArithmeticResult<DecimalString>,

    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

impl JobOutcome {
    pub fn new(job_id: JobId, result: ArithmeticResult<DecimalString>) -> Self {
        Self {
            job_id,
            result,
            completed_at: Utc::now(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
