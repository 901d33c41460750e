use colored::Colorize;

use eote_dice::{cancel, parse_symbols};

use crate::render;

pub fn run(input: &str) -> Result<(), String> {
    let symbols = parse_symbols(input).map_err(|e| e.to_string())?;
    let net = cancel(&symbols);

    println!("  {}  {}", "Symbols:".bold(), render::symbols(&symbols));
    println!("  {}      {}", "Net:".bold(), render::symbols(&net.canonical()));
    println!(
        "  {}",
        format!(
            "net success {}, net advantage {}, triumph {}, despair {}",
            net.net_success(),
            net.net_advantage(),
            net.triumphs(),
            net.despairs()
        )
        .dimmed()
    );

    Ok(())
}
