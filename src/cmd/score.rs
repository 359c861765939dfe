use super::OutputFormat;
use crate::reports;
use clap::Args;
use gspanel::api::PanelResources;
use gspanel::config::Config;
use gspanel::error::GsResult;
use std::fs;
use std::io;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Showcase snapshot (provider JSON) to score.
    pub snapshot: String,

    /// Only report characters whose name contains this.
    #[arg(short, long)]
    pub character: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: ScoreArgs, resources: Arc<PanelResources>) -> GsResult<()> {
    let raw = fs::read_to_string(&args.snapshot)?;
    let mut scored = resources.score_showcase_str(&raw)?;

    if let Some(ref filter) = args.character {
        let filter = filter.to_lowercase();
        scored.retain(|c| c.profile.name.to_lowercase().contains(&filter));
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scored)?),
        OutputFormat::Csv => reports::write_items_csv(io::stdout(), &scored)?,
        OutputFormat::Table => {
            if scored.is_empty() {
                println!("No matching characters in the showcase.");
            }
            for character in &scored {
                reports::print_character_report(character);
            }
        }
    }
    Ok(())
}
