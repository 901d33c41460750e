use colored::Colorize;

use eote_dice::DiceConfig;

use crate::render;

pub fn run(codes: &str, config: &DiceConfig) -> Result<(), String> {
    let pool = super::parse_pool(codes)?;
    let mut rng = config.rng();
    let (roll, net) = pool.roll_with_net(&mut rng);

    println!("  {} {}", "Dice Pool:".bold(), render::pool(&pool));
    if let Some(seed) = config.seed {
        println!("  {}", format!("(seed={seed})").dimmed());
    }
    println!("  {}      {}", "Roll:".bold(), render::symbols(&roll.canonical()));
    println!("  {}       {}", "Net:".bold(), render::symbols(&net.canonical()));

    let verdict = if net.is_success() {
        "Success".green().bold()
    } else {
        "Failure".red().bold()
    };
    println!("  {}    {verdict}", "Result:".bold());

    Ok(())
}
