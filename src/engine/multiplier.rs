// ============================================================================
// Karatsuba Multiplier
// Public entry point: canonicalization, events, batches
// ============================================================================

use super::karatsuba::Recursion;
use super::stats::{RecursionStats, StatsSnapshot};
use crate::domain::{JobId, JobOutcome, MultiplicationJob, MultiplierConfig};
use crate::interfaces::{EventHandler, MultiplicationEvent};
use crate::numeric::{ArithmeticResult, DecimalString};
use chrono::Utc;
use std::sync::Arc;

/// Product together with the statistics of the recursion that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub value: DecimalString,
    pub stats: StatsSnapshot,
}

/// Stateless Karatsuba multiplier with configurable execution and output form
pub struct KaratsubaMultiplier {
    /// Execution strategy and output form
    config: MultiplierConfig,

    /// Event handler for lifecycle events
    event_handler: Arc<dyn EventHandler>,
}

impl KaratsubaMultiplier {
    /// Create a new multiplier
    pub fn new(config: MultiplierConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &MultiplierConfig {
        &self.config
    }

    /// Multiply two decimal strings.
    ///
    /// With `canonicalize_output` (the default) leading zeros are stripped
    /// once, here; the recursion itself never trims.
    pub fn multiply(&self, a: &DecimalString, b: &DecimalString) -> ArithmeticResult<DecimalString> {
        self.multiply_with_stats(a, b).map(|product| product.value)
    }

    /// Parse both operands and multiply them.
    ///
    /// # Errors
    /// `EmptyDigitString` or `InvalidDigitString` for malformed operands.
    pub fn multiply_str(&self, a: &str, b: &str) -> ArithmeticResult<String> {
        let a: DecimalString = a.parse()?;
        let b: DecimalString = b.parse()?;
        self.multiply(&a, &b).map(|product| product.to_string())
    }

    /// Multiply and report recursion statistics
    pub fn multiply_with_stats(
        &self,
        a: &DecimalString,
        b: &DecimalString,
    ) -> ArithmeticResult<Product> {
        self.run(JobId::new(), a, b)
    }

    /// Run every job independently; a failed job does not affect the others
    pub fn multiply_batch(&self, jobs: &[MultiplicationJob]) -> Vec<JobOutcome> {
        tracing::debug!(jobs = jobs.len(), "Running multiplication batch");

        jobs.iter()
            .map(|job| {
                let result = self
                    .run(job.id, &job.left, &job.right)
                    .map(|product| product.value);
                JobOutcome::new(job.id, result)
            })
            .collect()
    }

    fn run(&self, job_id: JobId, a: &DecimalString, b: &DecimalString) -> ArithmeticResult<Product> {
        self.event_handler.on_event(MultiplicationEvent::Started {
            job_id,
            left_digits: a.len(),
            right_digits: b.len(),
            timestamp: Utc::now(),
        });

        let stats = RecursionStats::new();
        let result = Recursion::new(&self.config, &stats).multiply(a, b, 0);

        match result {
            Ok(raw) => {
                let value = if self.config.canonicalize_output {
                    raw.trimmed()
                } else {
                    raw
                };
                let stats = stats.snapshot();

                tracing::debug!(
                    %job_id,
                    product_digits = value.len(),
                    calls = stats.calls,
                    max_depth = stats.max_depth,
                    "Multiplication completed"
                );
                self.event_handler.on_event(MultiplicationEvent::Completed {
                    job_id,
                    product_digits: value.len(),
                    stats,
                    timestamp: Utc::now(),
                });

                Ok(Product { value, stats })
            },
            Err(error) => {
                tracing::error!(%job_id, %error, "Multiplication failed");
                self.event_handler.on_event(MultiplicationEvent::Failed {
                    job_id,
                    error,
                    timestamp: Utc::now(),
                });

                Err(error)
            },
        }
    }
}

impl Default for KaratsubaMultiplier {
    fn default() -> Self {
        Self::new(
            MultiplierConfig::default(),
            Arc::new(crate::interfaces::NoOpEventHandler),
        )
    }
}

// ============================================================================
// Async Integration
// ============================================================================

#[cfg(feature = "async")]
impl KaratsubaMultiplier {
    /// Multiply on tokio's blocking pool so large operands never stall the runtime.
    ///
    /// # Errors
    /// Arithmetic errors as for [`multiply`](Self::multiply); a panicked or
    /// cancelled blocking task surfaces as `WorkerPanicked`.
    pub async fn multiply_async(
        self: Arc<Self>,
        a: DecimalString,
        b: DecimalString,
    ) -> ArithmeticResult<DecimalString> {
        tokio::task::spawn_blocking(move || self.multiply(&a, &b))
            .await
            .map_err(|_| crate::numeric::ArithmeticError::WorkerPanicked)?
    }
}
