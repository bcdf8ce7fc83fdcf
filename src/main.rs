use std::io::{self, Write};

use anyhow::Result;
use cashbox::{Bundle, DigitLedger};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Demonstrates banknote bundles and digit ledgers.
#[derive(Parser, Debug)]
#[command(name = "cashbox", version, about)]
struct Cli {
    /// Which demonstration to run.
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    Bundle,
    Ledger,
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Csv,
}

/// Bundles produced by the bundle demonstration, with comparison outcomes.
struct BundleDemo {
    bundles: Vec<(&'static str, Bundle)>,
    comparisons: Vec<(&'static str, bool)>,
}

/// One row of the ledger CSV report.
#[derive(Serialize)]
struct LedgerSnapshot {
    step: &'static str,
    amount: String,
    count: usize,
    size: usize,
}

impl LedgerSnapshot {
    fn new(step: &'static str, ledger: &DigitLedger) -> Self {
        LedgerSnapshot {
            step,
            amount: ledger.to_string(),
            count: ledger.count(),
            size: ledger.size(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches!(cli.demo, Demo::Bundle | Demo::All) {
        let demo = bundle_demo()?;
        match cli.format {
            Format::Text => {
                for (label, bundle) in &demo.bundles {
                    writeln!(out, "{label}: {bundle} (Total: {})", bundle.total_value())?;
                }
                for (label, outcome) in &demo.comparisons {
                    writeln!(out, "{label}: {outcome}")?;
                }
            }
            Format::Csv => {
                let mut writer = csv::Writer::from_writer(&mut out);
                for (_, bundle) in &demo.bundles {
                    writer.serialize(bundle)?;
                }
                writer.flush()?;
            }
        }
    }

    if matches!(cli.demo, Demo::Ledger | Demo::All) {
        let snapshots = ledger_demo()?;
        match cli.format {
            Format::Text => {
                for snapshot in &snapshots {
                    writeln!(
                        out,
                        "{}: {} (count {}, size {})",
                        snapshot.step, snapshot.amount, snapshot.count, snapshot.size
                    )?;
                }
            }
            Format::Csv => {
                let mut writer = csv::Writer::from_writer(&mut out);
                for snapshot in &snapshots {
                    writer.serialize(snapshot)?;
                }
                writer.flush()?;
            }
        }
    }

    Ok(())
}

/// Builds and combines a few bundles, logging the operations that are rejected.
fn bundle_demo() -> Result<BundleDemo> {
    let money1 = Bundle::new(100, 5)?;
    let money2 = Bundle::new(100, 3)?;
    let money3 = Bundle::new(50, 10)?;
    info!(%money1, %money2, %money3, "bundles created");

    let bundles = vec![
        ("money1", money1),
        ("money2", money2),
        ("money3", money3),
        ("money1 + money2", money1.add(&money2)?),
        ("money1 - money2", money1.subtract(&money2)?),
        ("money1 * 2", money1.multiply(2)?),
    ];
    let comparisons = vec![
        ("money1 == money2", money1 == money2),
        ("money1 > money2", money1 > money2),
        ("money1 < money3", money1 < money3),
        ("money1 == money3", money1 == money3),
    ];

    if let Err(err) = Bundle::new(3, 5) {
        warn!("Rejected bundle: {err}");
    }
    if let Err(err) = money1.add(&money3) {
        warn!("Rejected addition: {err}");
    }
    if let Err(err) = money2.subtract(&money1) {
        warn!("Rejected subtraction: {err}");
    }

    Ok(BundleDemo {
        bundles,
        comparisons,
    })
}

/// Walks a ledger through indexing and growth, recording each state.
fn ledger_demo() -> Result<Vec<LedgerSnapshot>> {
    let mut money = DigitLedger::from_number(1234.56)?;
    info!(?money, first = money.get(0)?, third = money.get(2)?, "ledger created");
    let mut snapshots = vec![LedgerSnapshot::new("created", &money)];

    money.set(0, 9)?;
    snapshots.push(LedgerSnapshot::new("set index 0 to 9", &money));

    money.append_digit(7)?;
    snapshots.push(LedgerSnapshot::new("appended 7", &money));

    money.remove_last_digit()?;
    snapshots.push(LedgerSnapshot::new("removed last digit", &money));

    let cents: DigitLedger = "5".parse()?;
    snapshots.push(LedgerSnapshot::new("parsed \"5\"", &cents));

    if let Err(err) = money.get(money.count()) {
        warn!("Rejected read: {err}");
    }
    if let Err(err) = "12a.00".parse::<DigitLedger>() {
        warn!("Rejected amount: {err}");
    }

    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::{bundle_demo, ledger_demo};

    #[test]
    fn test_bundle_demo() {
        let demo = bundle_demo().unwrap();
        let totals = demo
            .bundles
            .iter()
            .map(|(_, bundle)| bundle.total_value())
            .collect::<Vec<_>>();
        assert_eq!(totals, vec![500, 300, 500, 800, 200, 1000]);
        let outcomes = demo
            .comparisons
            .iter()
            .map(|(_, outcome)| *outcome)
            .collect::<Vec<_>>();
        assert_eq!(outcomes, vec![false, true, false, true]);
    }

    #[test]
    fn test_ledger_demo() {
        let amounts = ledger_demo()
            .unwrap()
            .into_iter()
            .map(|snapshot| snapshot.amount)
            .collect::<Vec<_>>();
        assert_eq!(
            amounts,
            vec!["1234.56", "9234.56", "92345.67", "9234.56", "0.05"]
        );
    }
}
