use anyhow::Context;
use clap::Parser;
use wellness_core::adapters::history::read_history;
use wellness_core::config::cli::{Cli, Command};
use wellness_core::utils::logger;
use wellness_core::{summarize, WellnessEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時忽略
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded config: {:?}", config);

    match &cli.command {
        Command::Score(args) => {
            let engine = WellnessEngine::from_config(&config)?;
            let result = match engine
                .evaluate_fields(args.mood, args.energy, args.sleep, args.stress, &args.symptoms)
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(2);
                }
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Summary(args) => {
            let reports = read_history(&args.input)
                .with_context(|| format!("failed to read {}", args.input.display()))?;

            match summarize(&reports, args.days) {
                Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
                None => {
                    eprintln!("No reports found in {}", args.input.display());
                    std::process::exit(3);
                }
            }
        }
    }

    Ok(())
}
