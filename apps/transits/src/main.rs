mod input;
mod report;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use selene::describe::format_moon_phase;
use selene::houses::{place_in_houses, rising_sign};
use selene::ZodiacSign;
use std::path::PathBuf;

#[derive(Clone, Debug, ValueEnum)]
enum Format {
    /// One sentence per aspect.
    Text,
    /// Aligned columns.
    Table,
    /// Full report as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Natal positions (JSON array of body records, or `{ "bodies": [...] }`).
    #[arg(long)]
    natal: PathBuf,

    /// Transiting positions. Without it, aspects within the natal chart are listed.
    #[arg(long)]
    transits: Option<PathBuf>,

    /// Rising sign for whole-sign houses (defaults to the natal Ascendant's sign).
    #[arg(long)]
    rising: Option<String>,

    /// Orb settings (otherwise configs/selene.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Debug logging unless RUST_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let settings = selene_config::load_orb_settings(args.config.as_deref())?;
    let calculator = input::build_calculator(&settings)?;

    let natal = input::load_bodies(&args.natal)?;
    let rising = match &args.rising {
        Some(name) => Some(
            name.parse::<ZodiacSign>()
                .with_context(|| format!("Invalid --rising {name}"))?,
        ),
        None => rising_sign(&natal),
    };
    let natal = match rising {
        Some(sign) => {
            log::info!("Whole-sign houses from {sign} rising");
            place_in_houses(&natal, sign)
        }
        None => {
            log::warn!("No rising sign given and no Ascendant in natal chart; houses omitted");
            natal
        }
    };

    let transits = args.transits.as_deref().map(input::load_bodies).transpose()?;
    let report = report::build_report(&calculator, &natal, transits.as_deref(), rising)?;
    log::info!("{} active aspects", report.rows.len());

    match args.format {
        Format::Text => {
            for line in &report.lines {
                println!("{line}");
            }
            if let Some(phase) = report.moon_phase {
                println!("{}", format_moon_phase(phase));
            }
        }
        Format::Table => print!("{}", report::render_table(&report.rows)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
