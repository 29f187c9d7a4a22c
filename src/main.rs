use clap::Parser;
use vocab_consolidator::utils::{logger, validation::Validate};
use vocab_consolidator::{
    CliConfig, ConsolidationEngine, ConsolidationReport, LocalStorage, ReportFormat,
    VocabularyPipeline,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vocab-consolidator");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let report_format = config.report;
    let monitor_enabled = config.monitor;
    let pipeline = VocabularyPipeline::new(LocalStorage::default(), config);
    let engine = ConsolidationEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(report) => print_report(&report, report_format)?,
        Err(e) => {
            tracing::error!(
                "❌ Consolidation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn print_report(report: &ConsolidationReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        ReportFormat::Text => {
            if report.primary_missing {
                println!(
                    "⚠️ {} not found, started from an empty set",
                    report.primary_path.display()
                );
            } else {
                println!("Primary words loaded: {}", report.primary_count);
            }
            println!("New words added: {}", report.added_count);
            println!(
                "✅ Done! {} words saved to: {}",
                report.total_count,
                report.output_path.display()
            );
        }
    }
    Ok(())
}
