use anyhow::Context;
use clap::Parser;
use ui_translate::config::{mapping_config::MappingConfig, LogFormat};
use ui_translate::utils::{logger, validation::Validate};
use ui_translate::{CliConfig, LocalStorage, SubstitutionReport, Translator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let (mapping, table_info) = match config.load_table() {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to load phrase table: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    for (earlier, later) in mapping.chained_entries() {
        tracing::warn!(
            "'{}' is replaced by '{}', which the later entry '{}' rewrites to '{}'",
            earlier.source,
            earlier.target,
            later.source,
            later.target
        );
    }

    if config.print_mapping {
        let toml = MappingConfig::from_mapping(&mapping, table_info)
            .to_toml_string()
            .context("failed to serialize the phrase table")?;
        print!("{}", toml);
        return Ok(());
    }

    let output_path = config.output_path();
    let translator = Translator::new(LocalStorage::current_dir(), &mapping);

    tracing::info!(
        "Translating {} with {} phrases",
        config.input.display(),
        mapping.len()
    );

    let result = if config.dry_run {
        translator.preview(&config.input).map(|(_, report)| {
            print_report(&report);
            report
        })
    } else {
        translator.translate(&config.input, &output_path)
    };

    match result {
        Ok(report) => {
            tracing::info!(
                "{} replacement(s) across {} phrase(s)",
                report.total_replacements(),
                report.matched_entries().count()
            );
        }
        Err(e) => {
            tracing::error!("Translation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(report: &SubstitutionReport) {
    println!("🔍 Dry run, nothing written:");
    for hits in report.matched_entries() {
        println!(
            "  {} -> {}  ('': {}, \"\": {}, ><: {})",
            hits.source, hits.target, hits.single_quoted, hits.double_quoted, hits.tag_bounded
        );
    }
    println!("  Total replacements: {}", report.total_replacements());
}
