use clap::Parser;
use colored::Colorize;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;
use tumble_lib::roll::Aggregation;
use tumble_lib::solver::Solver;

mod cli;

#[tracing::instrument]
fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let solver = match Solver::new(&args.dice) {
        Ok(solver) => solver,
        Err(_) => {
            eprintln!(
                "{}",
                format!("Invalid format for argument 'dice': `{}`", args.dice)
                    .bold()
                    .red()
            );
            eprintln!("{}", "Try `tumble-cli --help` for the notation.".dimmed());
            std::process::exit(1);
        }
    };
    if solver.roll().count == 0 {
        eprintln!(
            "{}",
            "The number of dice rolled must be positive".bold().red()
        );
        std::process::exit(1);
    }

    let aggregation = Aggregation::from_flags(args.max, args.min);
    tracing::debug!("rolling {} with {:?}", solver.roll(), aggregation);
    let outcome = solver.solve(aggregation);

    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    println!(
        "{}",
        skin.inline(&format!("`{}`: {}", args.dice, outcome))
    );
}
