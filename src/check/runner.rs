//! Orchestrates one check run.

use crate::check::verdict::Verdict;
use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};
use crate::snapshot::{failing_queues, SnapshotStore};
use crate::stats::StatsFetcher;

/// Runs fetch, delta and save against one service and one snapshot file.
#[derive(Debug, Clone)]
pub struct CheckRunner {
    name: String,
    fetcher: StatsFetcher,
    store: SnapshotStore,
}

impl CheckRunner {
    pub fn new(name: impl Into<String>, fetcher: StatsFetcher, store: SnapshotStore) -> Self {
        Self {
            name: name.into(),
            fetcher,
            store,
        }
    }

    /// Build a runner from validated configuration.
    pub fn from_config(config: &CheckConfig) -> CheckResult<Self> {
        let origin = config.origin().map_err(|e| CheckError::Config(e.into()))?;
        let fetcher = StatsFetcher::for_origin(&origin).map_err(|e| CheckError::Config(e.into()))?;
        let store = SnapshotStore::new(config.snapshot_path());
        Ok(Self::new(config.name.clone(), fetcher, store))
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Compute the queues with new failures and persist the new baseline.
    pub async fn failing_queues(&self) -> CheckResult<Vec<String>> {
        let current = self.fetcher.fetch().await?;
        let previous = self.store.load()?;

        let failing = failing_queues(&current, &previous);
        tracing::debug!(
            queues = current.len(),
            previous = previous.len(),
            failing = failing.len(),
            "Computed failure delta"
        );

        self.store.save(&current)?;
        Ok(failing)
    }

    /// Run the check and turn the outcome into a verdict.
    pub async fn run(&self) -> Verdict {
        match self.failing_queues().await {
            Ok(failing) => {
                if !failing.is_empty() {
                    tracing::info!(failing = ?failing, "Queues recorded new failures");
                }
                Verdict::from_failing_queues(&self.name, &failing)
            }
            Err(e) => {
                tracing::error!(error = %e, "Check failed");
                Verdict::unknown(&self.name, e.to_string())
            }
        }
    }
}

/// Build a runner from `config` and run it once.
pub async fn run_check(config: &CheckConfig) -> Verdict {
    match CheckRunner::from_config(config) {
        Ok(runner) => runner.run().await,
        Err(e) => Verdict::unknown(&config.name, e.to_string()),
    }
}
