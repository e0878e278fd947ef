use avam::app::{
    aggregate, app_error::AppError, convert_prices, demo, estimate_pt, merge_prices, score, taxes,
};
use avam::model::resolution::Resolution;
use avam::model::score::ScoringConfig;
use avam::model::travel_time::AggregationMethod;
use avam::util::fs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(
        name = "score",
        about = "score municipalities or points and write the frontend GeoJSON"
    )]
    Score {
        /// directory containing the processed pipeline artifacts
        data_dir: PathBuf,
        /// file to write the scored feature collection to
        output_filename: PathBuf,
        /// granularity of the scored features
        #[arg(long, value_enum, default_value_t = Resolution::Plz)]
        resolution: Resolution,
        /// scoring configuration TOML file. built-in Swiss defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(
        name = "aggregate",
        about = "fold a point-level travel time matrix up to municipality level"
    )]
    Aggregate {
        /// point catalog the matrix is keyed by
        points_filename: PathBuf,
        /// point-level travel time matrix JSON file
        matrix_filename: PathBuf,
        /// file to write the municipality-level matrix to
        output_filename: PathBuf,
        /// how member point durations fold into one municipality duration
        #[arg(long, value_enum, default_value_t = AggregationMethod::Min)]
        method: AggregationMethod,
        /// scoring configuration TOML file, read for its city table
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(
        name = "estimate-pt",
        about = "estimate public transport durations from the driving half of a matrix"
    )]
    EstimatePt {
        /// catalog of the locations the matrix is keyed by
        locations_filename: PathBuf,
        /// travel time matrix JSON file with a populated driving half
        matrix_filename: PathBuf,
        /// file to write the completed matrix to
        output_filename: PathBuf,
        /// treat the locations file as a point catalog instead of the municipality register
        #[arg(long)]
        points: bool,
        /// scoring configuration TOML file, read for its city table
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(
        name = "merge-prices",
        about = "merge per-source price catalogs by priority into prices.json"
    )]
    MergePrices {
        /// municipality register the sources are joined against
        municipalities_filename: PathBuf,
        /// file to write the merged catalog to
        output_filename: PathBuf,
        /// price sources as tag=file, highest priority first
        #[arg(required = true)]
        sources: Vec<String>,
    },
    #[command(
        name = "convert-prices",
        about = "convert a raw scraped price dump into the canonical catalog"
    )]
    ConvertPrices {
        /// scraped price dump JSON file
        scraped_filename: PathBuf,
        /// file to write the canonical catalog to
        output_filename: PathBuf,
    },
    #[command(
        name = "taxes",
        about = "build the tax multiplier catalog from the cantonal rates CSV"
    )]
    Taxes {
        /// rates CSV export with canton and commune income rates
        rates_filename: PathBuf,
        /// file to write the tax catalog to
        output_filename: PathBuf,
    },
    #[command(
        name = "demo",
        about = "score municipalities against synthetic travel times for frontend development"
    )]
    Demo {
        /// directory containing at least municipalities.json
        data_dir: PathBuf,
        /// file to write the demo feature collection to
        output_filename: PathBuf,
        /// RNG seed for the synthetic data
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// scoring configuration TOML file. built-in Swiss defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(
        name = "init-config",
        about = "write the default scoring configuration as a TOML template"
    )]
    InitConfig {
        /// file to write the configuration template to
        output_filename: PathBuf,
    },
}

impl App {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Self::Score {
                data_dir,
                output_filename,
                resolution,
                config,
            } => score::run(data_dir, output_filename, config.as_deref(), *resolution),
            Self::Aggregate {
                points_filename,
                matrix_filename,
                output_filename,
                method,
                config,
            } => aggregate::run(
                points_filename,
                matrix_filename,
                output_filename,
                config.as_deref(),
                *method,
            ),
            Self::EstimatePt {
                locations_filename,
                matrix_filename,
                output_filename,
                points,
                config,
            } => estimate_pt::run(
                locations_filename,
                matrix_filename,
                output_filename,
                config.as_deref(),
                *points,
            ),
            Self::MergePrices {
                municipalities_filename,
                output_filename,
                sources,
            } => merge_prices::run(municipalities_filename, sources, output_filename),
            Self::ConvertPrices {
                scraped_filename,
                output_filename,
            } => convert_prices::run(scraped_filename, output_filename),
            Self::Taxes {
                rates_filename,
                output_filename,
            } => taxes::run(rates_filename, output_filename),
            Self::Demo {
                data_dir,
                output_filename,
                seed,
                config,
            } => demo::run(data_dir, output_filename, config.as_deref(), *seed),
            Self::InitConfig { output_filename } => {
                let template = ScoringConfig::default().to_toml()?;
                fs::write_string(&template, output_filename)?;
                log::info!(
                    "wrote scoring configuration template to {}",
                    output_filename.display()
                );
                Ok(())
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    if let Err(e) = run_avam(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run_avam(args: CliArgs) -> Result<(), AppError> {
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    args.app.run()
}
