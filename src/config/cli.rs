use crate::config::toml_config::WellnessConfig;
use crate::config::InsightConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wellness")]
#[command(about = "Score daily wellness check-ins and summarize history")]
pub struct Cli {
    /// Path to a TOML configuration file; WELLNESS_* environment variables are used otherwise
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Score one report and print the result as JSON
    Score(ScoreArgs),
    /// Summarize recorded reports from a CSV or JSON file
    Summary(SummaryArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScoreArgs {
    #[arg(long)]
    pub mood: u8,

    #[arg(long)]
    pub energy: u8,

    #[arg(long)]
    pub sleep: u8,

    #[arg(long)]
    pub stress: u8,

    /// Free-text description of physical symptoms
    #[arg(long, default_value = "")]
    pub symptoms: String,

    /// Never call the remote language model
    #[arg(long)]
    pub local_only: bool,
}

#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Recorded reports (.csv or .json)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of most recent reports to include
    #[arg(long, default_value_t = 30)]
    pub days: usize,
}

impl Cli {
    /// 載入並驗證配置
    pub fn load_config(&self) -> Result<WellnessConfig> {
        let mut config = match &self.config {
            Some(path) => WellnessConfig::from_file(path)?,
            None => WellnessConfig {
                insight: InsightConfig::from_env()?,
                ..WellnessConfig::default()
            },
        };

        if let Command::Score(args) = &self.command {
            if args.local_only {
                config.insight.remote_enabled = false;
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "wellness",
            "score",
            "--mood",
            "8",
            "--energy",
            "7",
            "--sleep",
            "6",
            "--stress",
            "3",
            "--symptoms",
            "sore knee",
            "--local-only",
        ])
        .unwrap();

        match cli.command {
            Command::Score(args) => {
                assert_eq!((args.mood, args.energy, args.sleep, args.stress), (8, 7, 6, 3));
                assert_eq!(args.symptoms, "sore knee");
                assert!(args.local_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_local_only_disables_remote() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[insight]\nremote_enabled = true\nremote_credential = \"sk-test\"\n",
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "wellness", "--config", path.as_str(), "score", "--mood", "5", "--energy", "5", "--sleep",
            "5", "--stress", "5", "--local-only",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert!(!config.insight.is_remote_configured());
    }

    #[test]
    fn test_parse_summary_command() {
        let cli = Cli::try_parse_from(["wellness", "summary", "--input", "history.csv"]).unwrap();
        match cli.command {
            Command::Summary(args) => {
                assert_eq!(args.input, PathBuf::from("history.csv"));
                assert_eq!(args.days, 30);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
