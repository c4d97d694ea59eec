use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use foxhole_cli::Cli;
use foxhole_engine::Engine;

fn run() -> Result<()> {
    let cli = Cli::parse();
    let params = cli.resolve()?;
    info!(holes = params.holes(), visits = params.visits(), poison = params.poison(), "starting search");

    let engine = Engine::new(params);
    let update = cli.update;
    let result = engine.search(|day_limit, won| {
        if update {
            println!("probing day limit {day_limit}: {}", if won { "won" } else { "no win yet" });
        }
    })?;

    if cli.wants_json() {
        let json = foxhole_cli::json::render(engine.params(), &result);
        match &cli.json_file {
            Some(path) => fs::write(path, json)?,
            None => println!("{json}"),
        }
    } else if result.solved {
        println!("Solved in {} days:", result.days.unwrap());
        for (day, mv) in result.moves.iter().enumerate() {
            println!("day {}:\n{}", day + 1, foxhole_cli::render::render_board(engine.params(), *mv));
        }
    } else {
        println!("No solution exists for these parameters.");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
