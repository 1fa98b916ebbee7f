use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tiersim::analysis;
use tiersim::config::{PolicyConfig, RunConfig};
use tiersim::paths;
use tiersim::sim::{run_comparison, Ledger};

#[derive(Parser)]
#[command(name = "tiersim")]
#[command(about = "Compare Autoclass and Lifecycle storage costs over a monthly horizon")]
struct Cli {
    /// JSON run configuration; defaults apply when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Lifecycle preset id overriding the configured thresholds (see --list-presets)
    #[arg(long)]
    preset: Option<String>,

    /// Override the simulated horizon in months
    #[arg(long)]
    periods: Option<u32>,

    /// Write per-policy ledgers as <prefix>-autoclass.csv and <prefix>-lifecycle.csv
    #[arg(long)]
    csv: Option<PathBuf>,

    /// List known lifecycle presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_presets {
        for path in paths::PRESETS {
            println!("{:<20} {:<40} {}", path.id, path.name, path.description);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<RunConfig>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    if let Some(periods) = cli.periods {
        config.growth.periods = periods;
    }
    if let Some(id) = &cli.preset {
        let Some(path) = paths::preset(id) else {
            bail!("unknown preset {id:?}; try --list-presets");
        };
        match &mut config.lifecycle {
            PolicyConfig::Lifecycle { thresholds, .. } => *thresholds = path.thresholds,
            other => bail!("lifecycle slot holds a {other:?} policy"),
        }
    }

    let (autoclass, lifecycle) = run_comparison(
        &config.growth,
        &config.operations,
        &config.pricing,
        &config.autoclass,
        &config.lifecycle,
    )?;

    print_ledger("Autoclass", &autoclass);
    print_ledger("Lifecycle", &lifecycle);

    let comparison = analysis::compare(&autoclass, &lifecycle);
    let (winner, loser) = if comparison.first_wins {
        ("Autoclass", &comparison.second)
    } else {
        ("Lifecycle", &comparison.first)
    };
    println!(
        "\n{winner} wins: ${:.2} cheaper ({:.1}% of ${:.2})",
        comparison.cost_difference, comparison.savings_percentage, loser.total_cost
    );

    if let Some(prefix) = &cli.csv {
        write_csv(prefix, "autoclass", &autoclass)?;
        write_csv(prefix, "lifecycle", &lifecycle)?;
    }

    Ok(())
}

fn print_ledger(name: &str, ledger: &Ledger) {
    let summary = analysis::summarize(ledger);
    println!("\n=== {name} ===");
    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Period", "Hot GiB", "Cool GiB", "Cold GiB", "Arch GiB", "Total GiB", "Cost $"
    );
    for row in ledger {
        println!(
            "{:<10} {:>12.1} {:>12.1} {:>12.1} {:>12.1} {:>12.1} {:>12.2}",
            row.label(),
            row.volumes.hot,
            row.volumes.cool,
            row.volumes.cold,
            row.volumes.archival,
            row.total_volume,
            row.costs.total,
        );
    }
    println!(
        "total ${:.2} (storage ${:.2}, api ${:.2}, special ${:.2}), avg ${:.2}/month",
        summary.total_cost,
        summary.storage_cost,
        summary.api_cost,
        summary.special_cost,
        summary.average_monthly_cost,
    );
}

fn write_csv(prefix: &PathBuf, policy: &str, ledger: &Ledger) -> Result<()> {
    let path = PathBuf::from(format!("{}-{policy}.csv", prefix.display()));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "period",
        "hot_gib",
        "cool_gib",
        "cold_gib",
        "archival_gib",
        "total_gib",
        "eligible_objects",
        "ineligible_objects",
        "total_objects",
        "storage_cost",
        "user_ops_cost",
        "upload_ops_cost",
        "transition_cost",
        "api_cost",
        "special_cost",
        "total_cost",
    ])?;
    for row in ledger {
        writer.write_record([
            row.period.to_string(),
            format!("{:.4}", row.volumes.hot),
            format!("{:.4}", row.volumes.cool),
            format!("{:.4}", row.volumes.cold),
            format!("{:.4}", row.volumes.archival),
            format!("{:.4}", row.total_volume),
            format!("{:.0}", row.eligible_objects),
            format!("{:.0}", row.ineligible_objects),
            format!("{:.0}", row.total_objects),
            format!("{:.4}", row.costs.storage),
            format!("{:.4}", row.costs.user_ops),
            format!("{:.4}", row.costs.upload_ops),
            format!("{:.4}", row.costs.transition),
            format!("{:.4}", row.costs.api),
            format!("{:.4}", row.costs.special),
            format!("{:.4}", row.costs.total),
        ])?;
    }
    writer.flush()?;
    println!("wrote {}", path.display());
    Ok(())
}
