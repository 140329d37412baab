// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use mls_live::config::{Config, Credentials};
use mls_live::data_fetcher::{
    Game, Session, Team, adjust_archive_string, game_string, get_final_streams,
    get_game_live_stream, get_games, get_team_abbr, get_teams, login,
};
use mls_live::error::AppError;
use std::path::Path;
use tracing::{error, info, warn};

/// Applies `--set-*`/`--clear-*`/`--list-config` and exits.
/// Environment overrides are not written back to the file.
async fn handle_config_operation(args: Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(username) = args.new_username {
        config.username = Some(username);
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Replaces team names with abbreviations where the team list knows the ID.
fn with_abbreviations(game: &Game, teams: &[Team]) -> Game {
    let mut game = game.clone();
    if let Some(abbr) = get_team_abbr(teams, &game.visitor_team_id) {
        game.visitor_team_name = abbr.to_string();
    }
    if let Some(abbr) = get_team_abbr(teams, &game.home_team_id) {
        game.home_team_name = abbr.to_string();
    }
    game
}

async fn print_week(session: &Session, args: &Args) -> Result<(), AppError> {
    let games = get_games(session, args.week).await?;
    if games.is_empty() {
        println!("No games scheduled for this week.");
        return Ok(());
    }

    let teams = if args.abbreviations {
        get_teams(session).await.unwrap_or_else(|e| {
            warn!("Team list unavailable, showing full names: {e}");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    for game in &games {
        let line = if args.abbreviations {
            game_string(&with_abbreviations(game, &teams), &args.separator)
        } else {
            game_string(game, &args.separator)
        };
        println!("{:>8}  {line}", game.game_id);
    }
    Ok(())
}

async fn print_teams(session: &Session) -> Result<(), AppError> {
    for team in get_teams(session).await? {
        println!("{:>8}  {}", team.team_id, team.abbr);
    }
    Ok(())
}

async fn print_streams(session: &Session, game_id: &str, args: &Args) -> Result<(), AppError> {
    if args.live {
        let url = get_game_live_stream(session, game_id).await?;
        if url.is_empty() {
            println!("No live stream published for game {game_id}.");
        } else {
            println!("{url}");
        }
        return Ok(());
    }

    let streams = get_final_streams(session, game_id).await?;
    if streams.is_empty() {
        println!("No archived streams published for game {game_id}.");
    }
    for (kind, url) in &streams {
        match &args.title {
            Some(title) => println!("{}: {url}", adjust_archive_string(title, kind)),
            None => println!("{kind}: {url}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        return handle_config_operation(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config)?;
    info!("Logs are being written to: {log_file_path}");

    let session = Session::new(&config)?;
    let credentials = if args.login {
        Some(config.credentials().await?)
    } else {
        None
    };

    run(&session, &args, credentials).await
}

/// Logs in when credentials are given, then prints the requested listing.
/// Any failure is returned so the process exits non-zero.
async fn run(
    session: &Session,
    args: &Args,
    credentials: Option<Credentials>,
) -> Result<(), AppError> {
    if let Some(credentials) = credentials {
        login(session, &credentials.username, &credentials.password)
            .await
            .inspect_err(|e| error!("Login failed for {}: {e}", credentials.username))?;
    }

    let result = if args.teams {
        print_teams(session).await
    } else if let Some(game_id) = &args.streams {
        print_streams(session, game_id, args).await
    } else {
        print_week(session, args).await
    };

    result.inspect_err(|e| error!("Request failed: {e}"))
}
