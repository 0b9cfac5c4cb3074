use clap::Parser;
use road_neighborhoods::config::cli::{prompt_input_path, prompt_mode};
use road_neighborhoods::core::ConfigProvider;
use road_neighborhoods::utils::{logger, validation::Validate};
use road_neighborhoods::{
    CliConfig, LocalStorage, OutputFormat, QueryEngine, QueryMode, TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // The file may pick the output format, which also selects the log format.
    let file_config = config.config.clone().map(|path| {
        let loaded = TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file));
        (path, loaded)
    });
    if let Some((_, Ok(file))) = &file_config {
        config.apply_file_config(file);
    }

    match config.output_format() {
        OutputFormat::Json => logger::init_json_logger(config.verbose),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    if let Some((path, loaded)) = &file_config {
        match loaded {
            Ok(_) => tracing::info!("Loaded configuration from: {}", path),
            Err(e) => {
                tracing::error!("Failed to load config file '{}': {}", path, e);
                eprintln!("{}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    tracing::debug!("CLI config: {:?}", config);

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = std::io::stdout();

    if config.input.is_none() {
        config.input = prompt_input_path(&mut reader, &mut stdout).ok();
    }
    if config.mode.is_none() {
        config.mode = Some(prompt_mode(&mut reader, &mut stdout).unwrap_or_default());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let Some(mode) = config.mode.as_deref().and_then(QueryMode::from_selector) else {
        println!("Invalid option.");
        return Ok(());
    };

    let format = config.output_format();
    let precision = config.precision();
    let storage = LocalStorage::new(config.base_dir().to_string());
    let engine = QueryEngine::new(storage, config);

    match engine.run_or_none(mode) {
        Some(outcome) => match format {
            OutputFormat::Text => println!("{}", outcome.render_text(precision)),
            OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
        },
        None => {
            println!("Error processing the file.");
            std::process::exit(1);
        }
    }

    Ok(())
}
