use clap::{Parser, Subcommand};
use farm_advisor::advisor::{Advisor, UserSelection};
use farm_advisor::config::Config;
use farm_advisor::presenter::{present, present_report, TerminalPresenter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "farm-advisor",
    version,
    about = "Farming advisory: soil analysis, weather outlook, pest identification and crop advice"
)]
struct Cli {
    /// Path to the YAML config file (built-in defaults are used if it is absent)
    #[arg(long, global = true, default_value = "config/config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overview of the reference data and quick actions
    Dashboard,

    /// Analyze a soil type and pH level
    Soil {
        /// Soil type: Sandy, Clay, Loamy, Silty or Peaty
        #[arg(long)]
        soil: Option<String>,

        /// Soil pH (4.0 to 9.0)
        #[arg(long)]
        ph: Option<f64>,
    },

    /// Weather forecast and farming recommendations
    Weather {
        #[arg(long)]
        location: Option<String>,

        /// 7-day, 14-day or Seasonal
        #[arg(long)]
        period: Option<String>,
    },

    /// Identify a pest or disease from a crop photo (.jpg, .jpeg, .png)
    Pest {
        #[arg(long)]
        image: Option<PathBuf>,

        /// Seed for a reproducible identification
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Comprehensive crop advice for a location, soil type and season
    Advice {
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        soil: Option<String>,

        /// Dry, Rainy, Planting or Harvest
        #[arg(long)]
        season: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so reports on stdout stay clean
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,farm_advisor=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load configuration: {}\n\n\
             Make sure:\n\
             1. {} is valid YAML (or remove it to use defaults)\n\
             2. All referenced environment variables are set\n\
             3. Create a .env file if needed",
            e,
            cli.config.display()
        )
    })?;

    if let Command::Pest {
        seed: Some(seed), ..
    } = &cli.command
    {
        config.pest.seed = Some(*seed);
    }

    let mut advisor = Advisor::new(config);
    let mut presenter = TerminalPresenter::stdio();

    let outcome = match cli.command {
        Command::Dashboard => {
            present_report(&mut presenter, advisor.dashboard())?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Soil { soil, ph } => advisor.analyze_soil(&UserSelection {
            soil_type: soil,
            ph,
            ..Default::default()
        }),
        Command::Weather { location, period } => advisor.forecast(&UserSelection {
            location,
            forecast_period: period,
            ..Default::default()
        }),
        Command::Pest { image, .. } => advisor.identify_pest(&UserSelection {
            image_path: image,
            ..Default::default()
        }),
        Command::Advice {
            location,
            soil,
            season,
        } => advisor.crop_advice(&UserSelection {
            location,
            soil_type: soil,
            season,
            ..Default::default()
        }),
    };

    if present(&mut presenter, outcome)? {
        info!("Report delivered");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
