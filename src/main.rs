use std::path::PathBuf;

use clap::{Parser, Subcommand};
use radha_travels::{
    data_types::fare::{FareRequest, Segment},
    pricing::{AmountFormatter, Inr},
    util::settings::Settings,
    App,
};

#[derive(Parser)]
#[command(name = "radha-travels")]
#[command(version)]
#[command(about = "Fare quotes and site data for the Radha Travels taxi service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to ./settings.toml or $RADHA_SETTINGS)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a fare
    Estimate {
        /// local, airport or outstation
        #[arg(long)]
        service: String,

        /// hatchback, sedan, suv or premium_suv
        #[arg(long)]
        segment: String,

        /// Trip distance in km
        #[arg(long, default_value_t = 0.0)]
        distance: f64,

        /// Hours of hire (local)
        #[arg(long)]
        hours: Option<f64>,

        /// Trip length in days (outstation)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Print the rate table as JSON
    Rates,

    /// Print the rate card for a segment or fleet car model
    Fleet {
        car: String,
    },

    /// Print stored reviews and their summary
    Reviews,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load()?,
    };
    settings.verbose |= cli.verbose;

    let app = App::new(settings).await?;

    match cli.command {
        Commands::Estimate {
            service,
            segment,
            distance,
            hours,
            days,
        } => {
            let request = FareRequest::parse(&service, &segment, distance, hours, days)?;
            let result = app.estimate_with(&request, &Inr)?;

            println!("Estimated fare: {} (approx)", Inr.format(result.total_amount));
            println!("{}", result.breakdown_text);
        }
        Commands::Rates => {
            println!("{}", serde_json::to_string_pretty(app.rates())?);
        }
        Commands::Fleet { car } => {
            let segment = car
                .parse::<Segment>()
                .unwrap_or_else(|_| Segment::for_car_model(&car));
            let card = app.rate_card(segment, &Inr);

            println!("{}", card.label);
            for row in card.rows {
                println!("  {:<22} {}", row.service, row.rate);
            }
        }
        Commands::Reviews => {
            let reviews = app.list_reviews().await?;
            let summary = app.review_summary().await?;

            println!("{:.1} average from {} reviews", summary.average, summary.count);
            for bucket in &summary.breakdown {
                println!("  {}★ {:>3}% ({})", bucket.stars, bucket.percent, bucket.count);
            }
            for review in reviews {
                println!("\n{} {}\n{}", review.name, "★".repeat(review.rating as usize), review.comment);
            }
        }
    }

    Ok(())
}
