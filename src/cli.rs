use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch the configuration file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_username.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// MLS Live schedule and stream lookup
///
/// Lists the games of a week (this week by default), the league's teams, or
/// the stream URLs published for a game.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Week to list, relative to the current one (-1 = last week, 1 = next week).
    #[arg(
        short = 'w',
        long = "week",
        default_value_t = 0,
        allow_hyphen_values = true,
        help_heading = "Schedule"
    )]
    pub week: i64,

    /// Word placed between the visiting and home side.
    #[arg(long = "separator", default_value = "at", help_heading = "Schedule")]
    pub separator: String,

    /// Show team abbreviations instead of full names (fetches the team list).
    #[arg(short = 'a', long = "abbr", help_heading = "Schedule")]
    pub abbreviations: bool,

    /// List team IDs and abbreviations.
    #[arg(short = 't', long = "teams", help_heading = "Schedule")]
    pub teams: bool,

    /// Show the stream URLs published for a game.
    #[arg(short = 's', long = "streams", value_name = "GAME_ID", help_heading = "Streams")]
    pub streams: Option<String>,

    /// With --streams: print only the live stream URL.
    #[arg(long = "live", requires = "streams", help_heading = "Streams")]
    pub live: bool,

    /// With --streams: relabel this title with each archive type.
    #[arg(long = "title", requires = "streams", help_heading = "Streams")]
    pub title: Option<String>,

    /// Log in before fetching. Uses the configured username and the
    /// MLS_LIVE_PASSWORD environment variable, prompting for whatever is missing.
    #[arg(short = 'L', long = "login", help_heading = "Account")]
    pub login: bool,

    /// Store the username used by --login.
    #[arg(long = "set-username", help_heading = "Configuration")]
    pub new_username: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write log output to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Write logs to this file instead of the configured or default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["mls_live"]);
        assert_eq!(args.week, 0);
        assert_eq!(args.separator, "at");
        assert!(!args.teams);
        assert!(args.streams.is_none());
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_negative_week_offset() {
        let args = Args::parse_from(["mls_live", "--week", "-1"]);
        assert_eq!(args.week, -1);
    }

    #[test]
    fn test_live_requires_streams() {
        assert!(Args::try_parse_from(["mls_live", "--live"]).is_err());

        let args = Args::try_parse_from(["mls_live", "--streams", "32341", "--live"]).unwrap();
        assert_eq!(args.streams.as_deref(), Some("32341"));
        assert!(args.live);
    }

    #[test]
    fn test_config_operations() {
        let args = Args::parse_from(["mls_live", "--set-username", "fan@example.com"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["mls_live", "-l"]);
        assert!(is_config_operation(&args));
    }
}
