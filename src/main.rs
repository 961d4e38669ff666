use clap::Parser;
use discover_d7_contrib::core::ConfigProvider;
use discover_d7_contrib::utils::{logger, validation::Validate};
use discover_d7_contrib::{
    discover_requires, CliConfig, DiscoverError, Result, RootManifest, TracingNotes,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        fail(&e);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    // 驗證配置
    config.validate()?;

    let mut manifest = RootManifest::from_file(config.manifest_path())?;
    let discovery = discover_requires(&manifest, config, &TracingNotes)?;

    if config.report {
        for record in &discovery.report.records {
            eprintln!("{}", record);
        }
    }

    let added = manifest.merge_requires(&discovery.requires)?;
    for name in &added {
        if let Some(link) = discovery.requires.get(name) {
            tracing::info!("➕ {}", link);
        }
    }

    if config.write {
        manifest.save()?;
        tracing::info!(
            "✅ Added {} require(s) to {}",
            added.len(),
            manifest.path().display()
        );
    } else {
        print!("{}", manifest.to_pretty_string()?);
    }

    Ok(())
}

fn fail(e: &DiscoverError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
