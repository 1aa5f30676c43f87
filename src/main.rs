//! farescout - Entry Point

use chrono::Local;
use clap::Parser;
use farescout::search::SortOrder;
use std::path::PathBuf;
use tracing::info;

/// Terminal flight-deal browser
#[derive(Parser, Debug)]
#[command(name = "farescout")]
#[command(version)]
#[command(about = "Browse flight deals and keep a saved-deals list")]
pub struct Args {
    /// Path to the ticket catalog JSON
    #[arg(long)]
    pub tickets: Option<PathBuf>,

    /// Path to the airport lists JSON
    #[arg(long)]
    pub airports: Option<PathBuf>,

    /// Result ordering on entering the results screen
    #[arg(long, value_parser = ["asc", "desc"])]
    pub sort: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), farescout::model::AppError> {
    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = farescout::config::load_config_with_precedence(args.config.clone())?;
        let merged = farescout::config::merge_config(config_file);
        let with_env = farescout::config::apply_env_overrides(merged);

        let sort_override = args.sort.as_deref().map(|s| match s {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        });

        farescout::config::apply_cli_overrides(
            with_env,
            sort_override,
            args.tickets.clone(),
            args.airports.clone(),
        )
    };

    farescout::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Fire-and-forget startup load: either file failing leaves its
    // collection empty and the UI shows the empty states.
    let (tickets, airports) =
        farescout::source::load_or_empty(&config.tickets_path, &config.airports_path);

    let today = Local::now().date_naive();
    let app_state = farescout::state::AppState::new(tickets, airports, today, config.sort);
    let colors = farescout::view::ColorConfig::from_env_and_args(args.no_color);

    farescout::view::run_with_state(app_state, colors)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["farescout", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["farescout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["farescout"]);
        assert_eq!(args.tickets, None);
        assert_eq!(args.airports, None);
        assert_eq!(args.sort, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_data_path_flags() {
        let args = Args::parse_from([
            "farescout",
            "--tickets",
            "/srv/tickets.json",
            "--airports",
            "/srv/airports.json",
        ]);
        assert_eq!(args.tickets, Some(PathBuf::from("/srv/tickets.json")));
        assert_eq!(args.airports, Some(PathBuf::from("/srv/airports.json")));
    }

    #[test]
    fn test_sort_accepts_asc_and_desc() {
        let args = Args::parse_from(["farescout", "--sort", "desc"]);
        assert_eq!(args.sort.as_deref(), Some("desc"));

        let args = Args::parse_from(["farescout", "--sort", "asc"]);
        assert_eq!(args.sort.as_deref(), Some("asc"));
    }

    #[test]
    fn test_sort_rejects_other_values() {
        let result = Args::try_parse_from(["farescout", "--sort", "sideways"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["farescout", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["farescout", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_sort_flows_through_config_precedence_chain() {
        use farescout::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            sort: Some(SortOrder::Descending),
            ..Default::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(
            merged.sort,
            SortOrder::Descending,
            "Config file should override default sort"
        );

        let with_cli = apply_cli_overrides(merged, Some(SortOrder::Ascending), None, None);
        assert_eq!(
            with_cli.sort,
            SortOrder::Ascending,
            "CLI sort should override all other sources"
        );
    }

    #[test]
    fn test_default_sort_is_ascending() {
        use farescout::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.sort, SortOrder::Ascending);
    }
}
