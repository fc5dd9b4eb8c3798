use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::cli::Cli;
use connect_four::config::AppConfig;
use connect_four::console::ConsoleRenderer;
use connect_four::engine::Game;
use connect_four::game::Checker;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(&cli.config)?;
    let yellow = cli.yellow.build(Checker::Yellow, &config);
    let red = cli.red.build(Checker::Red, &config);

    let mut game = Game::new(yellow, red, Box::new(ConsoleRenderer::new()))?
        .with_error_handler(Box::new(|_err| {
            println!("That move was not possible, try again");
        }));
    game.play(cli.starting.checker());
    Ok(())
}
