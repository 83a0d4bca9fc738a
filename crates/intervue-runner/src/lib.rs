//! intervue-runner — Simulated code execution.
//!
//! Coding-challenge submissions are not actually run: this crate fabricates
//! a test outcome behind the `CodeExecutor` seam, with a short artificial
//! delay so the flow feels like a real run. A sandboxed executor with real
//! timeouts and resource limits could replace it without touching scoring.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use intervue_core::results::ExecutionReport;
use intervue_core::traits::{CodeExecutor, ExecutionRequest};

/// Render the per-case PASS/FAIL transcript for a run where the first
/// `tests_passed` cases passed.
fn render_output(request: &ExecutionRequest, tests_passed: u32) -> Vec<String> {
    request
        .test_cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let mark = if (i as u32) < tests_passed {
                "\u{2713} PASS"
            } else {
                "\u{2717} FAIL"
            };
            format!("Test {}: {} - {}", i + 1, mark, case.description)
        })
        .collect()
}

/// Executor that draws a random pass count instead of running code.
pub struct SimulatedExecutor {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(500),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed the pass-count draw, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Override the artificial run delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeExecutor for SimulatedExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> anyhow::Result<ExecutionReport> {
        let start = Instant::now();
        tokio::time::sleep(self.delay).await;

        let total_tests = request.test_cases.len() as u32;
        let tests_passed = self.rng.lock().unwrap().gen_range(0..=total_tests);
        tracing::debug!(
            language = %request.language,
            tests_passed,
            total_tests,
            "simulated run finished"
        );

        Ok(ExecutionReport {
            tests_passed,
            total_tests,
            output: render_output(request, tests_passed),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Executor that always reports a preset pass count. For tests and demos
/// that need a deterministic outcome.
pub struct FixedExecutor {
    tests_passed: u32,
}

impl FixedExecutor {
    pub fn passing(tests_passed: u32) -> Self {
        Self { tests_passed }
    }
}

#[async_trait]
impl CodeExecutor for FixedExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> anyhow::Result<ExecutionReport> {
        let total_tests = request.test_cases.len() as u32;
        let tests_passed = self.tests_passed.min(total_tests);
        Ok(ExecutionReport {
            tests_passed,
            total_tests,
            output: render_output(request, tests_passed),
            duration_ms: 0,
        })
    }
}
