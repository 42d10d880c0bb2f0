//! 命令行参数
//!
//! 没有子命令：唯一的用户界面是全屏 TUI，这里只有启动选项。

use clap::Parser;

#[derive(Parser)]
#[command(name = "coredo")]
#[command(version)]
#[command(about = "CORE task list in the terminal")]
pub struct Cli {
    /// Remote record store endpoint (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Theme for this run: Auto / Core / Dark / Light
    #[arg(long)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["coredo"]);
        assert!(cli.api_url.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "coredo",
            "--api-url",
            "https://example.test/api/v1/Todo",
            "--theme",
            "Dark",
        ]);
        assert_eq!(
            cli.api_url.as_deref(),
            Some("https://example.test/api/v1/Todo")
        );
        assert_eq!(cli.theme.as_deref(), Some("Dark"));
    }
}
