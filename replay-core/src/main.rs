use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use replay_core::{
    config::Settings,
    data::{load_signal_codes, load_ticks},
    simulation::{ReplayEngine, RunReport, SimulationConfig},
    strategy::{SmaCrossStrategy, Strategy},
};

#[derive(Parser)]
#[command(name = "replay-core")]
#[command(about = "A tick-by-tick trading simulator")]
enum Commands {
    /// Generate SMA crossover signals for a tick series and replay them
    Backtest {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(long)]
        short_period: Option<usize>,
        #[arg(long)]
        long_period: Option<usize>,
        #[arg(short, long)]
        initial_cash: Option<f64>,
    },
    /// Replay caller-supplied signal codes (1 buy, -1 sell, other hold)
    Replay {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        signals: PathBuf,
        #[arg(short, long)]
        initial_cash: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;
    let command = Commands::parse();

    match command {
        Commands::Backtest {
            data,
            short_period,
            long_period,
            initial_cash,
        } => {
            let ticks = load_ticks(&data)?;
            if ticks.is_empty() {
                bail!("No ticks found in {}", data.display());
            }

            let short = short_period.unwrap_or(settings.strategy.short_period);
            let long = long_period.unwrap_or(settings.strategy.long_period);
            if short >= long {
                bail!("short-period ({}) must be less than long-period ({})", short, long);
            }

            let mut strategy = SmaCrossStrategy::new(short, long);
            let signals = strategy.generate(&ticks);
            info!(strategy = strategy.name(), short, long, "Signals generated");

            let engine = ReplayEngine::new(SimulationConfig {
                initial_cash: initial_cash.unwrap_or(settings.simulation.initial_cash),
            });
            let report = engine.run(&ticks, &signals)?;
            print_report(&report, &ticks);
        }

        Commands::Replay {
            data,
            signals,
            initial_cash,
        } => {
            let ticks = load_ticks(&data)?;
            let codes = load_signal_codes(&signals)?;

            let engine = ReplayEngine::new(SimulationConfig {
                initial_cash: initial_cash.unwrap_or(settings.simulation.initial_cash),
            });
            let report = engine.run_codes(&ticks, &codes)?;
            print_report(&report, &ticks);
        }
    }

    Ok(())
}

fn print_report(report: &RunReport, ticks: &[replay_core::data::Tick]) {
    println!("\nReplay Results:");
    println!("Ticks: {}", report.equity_curve.len());
    if let (Some(first), Some(last)) = (ticks.first(), ticks.last()) {
        println!(
            "Period: {} .. {}",
            first.format_timestamp(),
            last.format_timestamp()
        );
    }
    println!("Final Equity: {:.2}", report.metrics.final_equity);
    println!("Total Return: {:.2}%", report.metrics.total_return * 100.0);
    println!("Max Drawdown: {:.2}%", report.metrics.max_drawdown * 100.0);
    println!("Fills: {}", report.metrics.fills);
    println!(
        "Rejected Orders: {} buys, {} sells",
        report.metrics.rejected_buys, report.metrics.rejected_sells
    );
}
