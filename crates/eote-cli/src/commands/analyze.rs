use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use eote_dice::{Axis, Distribution, Mean, Thresholds};

use crate::render;

#[derive(Serialize)]
struct Report<'a> {
    pool: String,
    combinations: u128,
    mean: Mean,
    thresholds: &'a Thresholds,
    probability: f64,
    distribution: &'a Distribution,
}

pub fn run(
    codes: &str,
    thresholds: &Thresholds,
    json: bool,
    precision: usize,
) -> Result<(), String> {
    let pool = super::parse_pool(codes)?;
    let distribution = pool.distribution();
    let mean = distribution.mean();
    let probability = distribution.probability_at_least(thresholds);

    if json {
        let report = Report {
            pool: pool.to_string(),
            combinations: distribution.total(),
            mean,
            thresholds,
            probability,
            distribution: &distribution,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} {}", "Dice Pool:".bold(), render::pool(&pool));
    println!(
        "  {}",
        format!(
            "{} dice, {} face combinations, {} distinct outcomes",
            pool.count(),
            distribution.total(),
            distribution.outcome_count()
        )
        .dimmed()
    );
    println!();

    println!("  {}", "Mean".bold().underline());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Axis", "Mean"]);
    for axis in Axis::ALL {
        let value = mean.get(axis);
        let cell = match axis {
            Axis::Triumph if value > 0.0 => format!("{value:.precision$}").green(),
            Axis::Despair if value > 0.0 => format!("{value:.precision$}").red(),
            _ => render::signed(value, precision),
        };
        table.add_row(vec![axis.to_string(), cell.to_string()]);
    }
    println!("{table}");
    println!();

    if !thresholds.is_unconstrained() {
        let wanted: Vec<String> = Axis::ALL
            .iter()
            .filter_map(|&axis| thresholds.get(axis).map(|min| format!("{axis} >= {min}")))
            .collect();
        println!(
            "  {} {}: {}",
            "Probability of".bold(),
            wanted.join(", "),
            render::percent(probability, precision).bold()
        );
        println!();
    }

    println!("  {}", "Common Checks".bold().underline());
    let checks = [
        ("succeeds", Thresholds::none().with_success(1)),
        (
            "succeeds with advantage",
            Thresholds::none().with_success(1).with_advantage(1),
        ),
        ("net advantage", Thresholds::none().with_advantage(1)),
        ("triumph", Thresholds::none().with_triumph(1)),
        ("despair", Thresholds::none().with_despair(1)),
    ];
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Probability"]);
    for (label, check) in &checks {
        table.add_row(vec![
            label.to_string(),
            render::percent(distribution.probability_at_least(check), precision),
        ]);
    }
    println!("{table}");

    Ok(())
}
