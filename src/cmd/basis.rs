use super::OutputFormat;
use crate::reports;
use clap::Args;
use gspanel::api::PanelResources;
use gspanel::config::Config;
use gspanel::error::GsResult;
use gspanel::model::BaseStats;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct BasisArgs {
    #[command(flatten)]
    pub config: Config,

    /// Character display name as keyed in the rule table.
    #[arg(short, long)]
    pub character: String,

    #[arg(long)]
    pub health: Option<f64>,

    #[arg(long)]
    pub attack: Option<f64>,

    #[arg(long)]
    pub defense: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: BasisArgs, resources: Arc<PanelResources>) -> GsResult<()> {
    let scorer = &resources.scorer;

    // Unset components fall back to the configured defaults inside the builder
    let base = match (args.health, args.attack, args.defense) {
        (None, None, None) => None,
        (h, a, d) => Some(BaseStats::new(
            h.unwrap_or(0.0),
            a.unwrap_or(0.0),
            d.unwrap_or(0.0),
        )),
    };

    if !scorer.rules.contains(&args.character) {
        println!(
            "⚠️  No curated rule for '{}', showing the default rule.",
            args.character
        );
    }

    let bases: Vec<_> = scorer
        .rules
        .resolve(&args.character)
        .iter()
        .map(|rule| scorer.basis(rule, base.as_ref()))
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bases)?),
        _ => {
            for basis in &bases {
                reports::print_basis_report(basis);
            }
        }
    }
    Ok(())
}
