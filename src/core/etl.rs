use crate::core::{ConsolidationReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConsolidationEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> ConsolidationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Load, Merge, Persist. Any error aborts before the output is touched.
    pub fn run(&self) -> Result<ConsolidationReport> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::debug!("Starting consolidation");

        let (mut words, primary_missing) = self.pipeline.load_primary()?;
        let primary_count = words.len();
        monitor.log_stats("Load");

        let added_count = self.pipeline.merge_additional(&mut words)?;
        monitor.log_stats("Merge");

        let output_path = self.pipeline.persist(&words)?;
        monitor.log_stats("Persist");
        tracing::info!(
            "✅ Consolidation complete, file saved to: {}",
            output_path.display()
        );
        monitor.log_final_stats();

        let config = self.pipeline.config();
        Ok(ConsolidationReport {
            primary_path: config.primary_path().to_path_buf(),
            additional_path: config.additional_path().to_path_buf(),
            output_path,
            primary_missing,
            primary_count,
            added_count,
            total_count: words.len(),
        })
    }
}
