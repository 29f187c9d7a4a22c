use clap::Parser;
use vocab_consolidator::config::toml_config::JobConfig;
use vocab_consolidator::utils::{logger, validation::Validate};
use vocab_consolidator::{
    ConsolidationEngine, ConsolidationReport, JobsConfig, LocalStorage, VocabularyPipeline,
};

#[derive(Parser)]
#[command(name = "toml-consolidate")]
#[command(about = "Run a batch of vocabulary consolidations described in a TOML file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "vocab-jobs.toml")]
    config: String,

    /// Run only the named job (even if disabled)
    #[arg(short, long)]
    job: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// List the jobs that would run without touching any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading jobs from: {}", args.config);

    let config = match JobsConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let jobs: Vec<&JobConfig> = match &args.job {
        Some(name) => match config.job(name) {
            Some(job) => vec![job],
            None => {
                eprintln!("❌ No job named '{}' in {}", name, args.config);
                std::process::exit(1);
            }
        },
        None => config.enabled_jobs().collect(),
    };

    if args.dry_run {
        print_dry_run(&config, &jobs);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let mut reports = Vec::with_capacity(jobs.len());

    for job in jobs {
        tracing::info!("▶️ Running job '{}'", job.name);
        let storage = LocalStorage::new(config.base_dir());
        let pipeline = VocabularyPipeline::new(storage, job.source_paths());
        let engine = ConsolidationEngine::new_with_monitoring(pipeline, monitor_enabled);

        match engine.run() {
            Ok(report) => reports.push((job.name.as_str(), report)),
            Err(e) => {
                tracing::error!(
                    "❌ Job '{}' failed: {} (Category: {:?}, Severity: {:?})",
                    job.name,
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ [{}] {}", job.name, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                print_summary(&reports);
                std::process::exit(e.exit_code());
            }
        }
    }

    print_summary(&reports);
    Ok(())
}

fn print_dry_run(config: &JobsConfig, jobs: &[&JobConfig]) {
    println!("🔍 Dry run, base directory: {}", config.base_dir().display());
    for job in jobs {
        println!("  {}:", job.name);
        println!("    primary:    {}", job.primary.display());
        println!("    additional: {}", job.additional.display());
        println!("    output:     {}", job.output.display());
    }
    if jobs.is_empty() {
        println!("  (no enabled jobs)");
    }
}

fn print_summary(reports: &[(&str, ConsolidationReport)]) {
    if reports.is_empty() {
        return;
    }
    println!("📋 Summary:");
    for (name, report) in reports {
        println!(
            "  {}: {} primary, {} added, {} total -> {}",
            name,
            report.primary_count,
            report.added_count,
            report.total_count,
            report.output_path.display()
        );
    }
}
