use clap::Parser;
use course_gen::utils::{logger, validation::Validate};
use course_gen::{
    BatchEngine, CliConfig, Command, CourseGenerator, GeneratorConfig, LocalStorage,
    NavigationHelper, Result,
};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting course-gen");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ course-gen failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let storage = LocalStorage::default();

    match cli.command() {
        Command::Generate => generate(&storage, &config, cli.dry_run),
        Command::Nav => print_nav(&storage, &config),
        Command::All => {
            generate(&storage, &config, cli.dry_run)?;
            print_nav(&storage, &config)
        }
    }
}

fn generate(storage: &LocalStorage, config: &GeneratorConfig, dry_run: bool) -> Result<()> {
    let engine = BatchEngine::new(CourseGenerator::new(storage, config));

    if dry_run {
        let artifacts = engine.dry_run()?;
        println!("🔍 {} documents would be generated", artifacts.len());
        return Ok(());
    }

    let report = engine.run()?;
    println!(
        "✅ Generated {} course folders under {}",
        report.artifacts_written,
        report.output_root.display()
    );
    Ok(())
}

fn print_nav(storage: &LocalStorage, config: &GeneratorConfig) -> Result<()> {
    let helper = NavigationHelper::new(storage, config);
    for entry in helper.entries()? {
        println!("{}", entry);
    }
    tracing::info!("Navigation listing completed.");
    Ok(())
}
