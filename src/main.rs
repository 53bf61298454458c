use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use advent_grids::analysis::boundary::{count_corners, count_sides, perimeter};
use advent_grids::analysis::reach::{first_blocking, Blockage};
use advent_grids::analysis::region::regions;
use advent_grids::bench::run_puzzles;
use advent_grids::config::{Config, DEFAULT_CONFIG_FILE};
use advent_grids::core::Coord;
use advent_grids::input::parse::{parse_char_grid, parse_coords};
use advent_grids::input::read_input;
use advent_grids::puzzles::{self, example_input, Answer, SolveParams, SUPPORTED_DAYS};

#[derive(Parser, Debug)]
#[command(name = "advent-grids")]
#[command(about = "Advent of Code 2024 solvers: grid regions, fences, patrols, falling bytes and race cheats")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one day's puzzle from an input file
    Solve {
        day: u8,
        input: PathBuf,
        /// Grid side length for day 18
        #[arg(long)]
        size: Option<usize>,
        /// Bytes fallen before the day 18 part-one walk
        #[arg(long)]
        bytes: Option<usize>,
        /// Minimum picoseconds a day 20 cheat must save
        #[arg(long)]
        min_saving: Option<usize>,
        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every puzzle listed in the config file
    Run {
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Solve the worked examples from the puzzle statements
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command.unwrap_or(Command::Demo) {
        Command::Solve { day, input, size, bytes, min_saving, json } => {
            let mut params = SolveParams::default();
            params.ram_run.size = size.unwrap_or(params.ram_run.size);
            params.ram_run.byte_count = bytes.unwrap_or(params.ram_run.byte_count);
            params.race.min_saving = min_saving.unwrap_or(params.race.min_saving);
            let text = read_input(&input).with_context(|| format!("day {}", day))?;
            let answer = puzzles::solve(day, &text, &params)
                .with_context(|| format!("solving day {} from {}", day, input.display()))?;
            print_answer(&answer, json)?;
        }
        Command::Run { config, json } => {
            let config = Config::load(&config).context("loading run configuration")?;
            let report = run_puzzles(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print_detail();
            }
            if !report.all_solved() {
                anyhow::bail!("{} of {} puzzles failed", report.total - report.solved, report.total);
            }
        }
        Command::Demo => run_demo()?,
    }
    Ok(())
}

fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
    } else {
        println!("{}", answer);
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    info!("running built-in examples");
    demo_regions()?;
    demo_blocking();
    println!("\n--- Worked examples ---");
    let params = SolveParams::example();
    for day in SUPPORTED_DAYS {
        if let Some(text) = example_input(day) {
            println!("{}", puzzles::solve(day, text, &params)?);
        }
    }
    Ok(())
}

fn demo_regions() -> Result<()> {
    println!("--- Regions ---");
    let grid = parse_char_grid("AAAA\nBBCD\nBBCC\nEEEC\n")?;
    println!("{}", grid);
    for r in regions(&grid) {
        println!(
            "  {} area={} perimeter={} sides={} corners={}",
            r.label,
            r.area(),
            perimeter(&grid, &r),
            count_sides(&grid, &r),
            count_corners(&grid, &r),
        );
    }
    Ok(())
}

fn demo_blocking() {
    println!("\n--- Falling bytes ---");
    let bytes = parse_coords(puzzles::ram_run::EXAMPLE).items;
    let report = first_blocking(7, 7, &bytes, Coord::new(0, 0), Coord::new(6, 6));
    match report.outcome {
        Blockage::Blocked { index, at } => {
            println!("  byte #{} at {},{} cuts (0,0) off from (6,6)", index + 1, at.col, at.row)
        }
        Blockage::Open => println!("  path stays open after {} bytes", report.applied),
        Blockage::Disconnected => println!("  endpoints lie off the grid"),
    }
}
