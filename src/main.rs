use clap::Parser;

use herald::{
    cli::{Args, Command},
    command,
    config::Config,
    result::Result,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("herald")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let config = Config::from_env();

    match args.command {
        Command::NextRelease => command::next_release::execute(),
        Command::NextVersion { version, bump } => {
            command::next_version::execute(&version, bump)
        }
        Command::ProcessChangelog => {
            command::process_changelog::execute(&config)
        }
        Command::SlackMessage { changelog } => {
            command::slack_message::execute(&config, &changelog).await
        }
    }
}
