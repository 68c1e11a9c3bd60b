use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "worklog")]
#[command(about = "Worklog client", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to <data_local_dir>/worklog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Complete company onboarding from an invitation link
    Onboard {
        /// Invitation link, absolute or a bare `/onboarding?...` path
        link: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_onboard_command() {
        let cli = Cli::try_parse_from([
            "worklog",
            "onboard",
            "/onboarding?onboarding_token=tok123",
            "--config",
            "/etc/worklog.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/etc/worklog.toml")));
        let Commands::Onboard { link } = cli.command;
        assert_eq!(link, "/onboarding?onboarding_token=tok123");
    }

    #[test]
    fn onboard_requires_link() {
        assert!(Cli::try_parse_from(["worklog", "onboard"]).is_err());
    }
}
