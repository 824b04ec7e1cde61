mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use kundali_chart::{PlaceResolver, compute_chart};
use kundali_config::{ConfigSource, KundaliConfig, OutputFormat};
use kundali_core::MeanElementEphemeris;
use kundali_time::Moment;
use kundali_vedic_base::{
    DashaTimeline, GeoCoordinate, Graha, active_dasha, ayanamsa_deg, compute_antardashas,
    compute_mahadashas, compute_pratyantardashas, fractional_year, nakshatra_from_longitude,
    nakshatra_lord, navamsa_pada, navamsa_rashi, normalize_360, rashi_from_longitude, rashi_lord,
};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart and Vimshottari dasha CLI")]
struct Cli {
    /// Config file (overrides KUNDALI_CONFIG and ./kundali.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where a chart is cast.
#[derive(clap::Args, Debug, Default)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
    /// Place name from the gazetteer
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth chart for a UTC or offset instant
    Chart {
        /// Birth instant (YYYY-MM-DDThh:mm[:ss][Z|+hh:mm])
        date: Moment,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Vimshottari dasha timeline
    Dasha {
        /// Birth instant
        date: Moment,
        #[command(flatten)]
        location: LocationArgs,
        /// Sidereal Moon longitude; skips the chart computation
        #[arg(long, allow_hyphen_values = true)]
        moon: Option<f64>,
        /// Show the antardashas of this mahadasha lord
        #[arg(long)]
        maha: Option<Graha>,
        /// With --maha, show the pratyantardashas of this antardasha lord
        #[arg(long, requires = "maha")]
        antar: Option<Graha>,
        /// Show the periods running at this instant
        #[arg(long, conflicts_with_all = ["maha", "antar"])]
        at: Option<Moment>,
    },
    /// Ayanamsa for an instant
    Ayanamsa {
        date: Moment,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Navamsa (D9) sign from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Resolve a place name
    Place {
        name: String,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = KundaliConfig::load(cli.config.as_deref())?;
    init_logging(&config)?;
    log::debug!("configuration from {source:?}");
    let json = cli.json || config.output == OutputFormat::Json;

    match cli.command {
        Commands::Chart { date, location } => {
            let coordinate = resolve_location(&location, &config)?;
            let chart = compute_chart(&MeanElementEphemeris::new(), &date, &coordinate)
                .with_context(|| format!("computing chart for {date}"))?;
            emit(json, &chart, || render::chart(&chart))
        }

        Commands::Dasha {
            date,
            location,
            moon,
            maha,
            antar,
            at,
        } => {
            let moon = match moon {
                Some(lon) => normalize_360(lon),
                None => {
                    let coordinate = resolve_location(&location, &config)?;
                    compute_chart(&MeanElementEphemeris::new(), &date, &coordinate)
                        .with_context(|| format!("computing chart for {date}"))?
                        .moon_longitude()
                        .context("chart has no Chandra")?
                }
            };
            if let Some(query) = at {
                let Some(active) = active_dasha(moon, date, query) else {
                    bail!("{query} lies outside the 120-year dasha pass from {date}");
                };
                return emit(json, &active, || render::active(&active));
            }
            let timeline = select_timeline(moon, date, maha, antar)?;
            emit(json, &timeline, || render::timeline(&timeline))
        }

        Commands::Ayanamsa { date } => {
            let report = AyanamsaReport {
                moment: date,
                fractional_year: fractional_year(&date),
                ayanamsa_deg: ayanamsa_deg(&date),
            };
            emit(json, &report, || {
                format!(
                    "Ayanamsa at {} (year {:.4}): {:.6} deg",
                    report.moment, report.fractional_year, report.ayanamsa_deg
                )
            })
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let report = serde_json::json!({
                "rashi": info.rashi,
                "number": info.rashi.number(),
                "western_name": info.rashi.western_name(),
                "lord": rashi_lord(info.rashi),
                "degrees_in_rashi": info.degrees_in_rashi,
                "dms": info.dms,
            });
            emit(json, &report, || {
                format!(
                    "{} ({}) - {} ({:.4} deg in rashi), lord {}",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.dms,
                    info.degrees_in_rashi,
                    rashi_lord(info.rashi)
                )
            })
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            let lord = nakshatra_lord(info.nakshatra);
            let report = serde_json::json!({
                "nakshatra": info.nakshatra,
                "index": info.nakshatra_index,
                "pada": info.pada,
                "lord": lord,
                "degrees_in_nakshatra": info.degrees_in_nakshatra,
                "degrees_in_pada": info.degrees_in_pada,
            });
            emit(json, &report, || {
                format!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {lord}",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                )
            })
        }

        Commands::Navamsa { lon } => {
            let sign = navamsa_rashi(lon);
            let pada = navamsa_pada(lon);
            let report = serde_json::json!({ "navamsa": sign, "pada": pada });
            emit(json, &report, || {
                format!("{} ({}) - navamsa pada {pada}", sign.name(), sign.western_name())
            })
        }

        Commands::Place { name } => {
            let gazetteer = config.gazetteer();
            let coordinate = gazetteer.resolve_coordinates(&name);
            let known = gazetteer.lookup(&name).is_some();
            let report = serde_json::json!({
                "query": &name,
                "found": known,
                "coordinate": coordinate,
            });
            emit(json, &report, || {
                if known {
                    format!("{name}: {coordinate}")
                } else {
                    format!(
                        "{name}: not found, using {} ({coordinate})",
                        kundali_chart::DEFAULT_PLACE_NAME
                    )
                }
            })
        }

        Commands::Config => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                match &source {
                    ConfigSource::Defaults => println!("# built-in defaults"),
                    other => {
                        if let Some(path) = other.path() {
                            println!("# loaded from {}", path.display());
                        }
                    }
                }
                print!("{}", config.to_toml_string()?);
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct AyanamsaReport {
    moment: Moment,
    fractional_year: f64,
    ayanamsa_deg: f64,
}

/// `RUST_LOG` wins; otherwise the configured level.
fn init_logging(config: &KundaliConfig) -> Result<()> {
    let level = config.level_filter()?;
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn resolve_location(args: &LocationArgs, config: &KundaliConfig) -> Result<GeoCoordinate> {
    match (args.lat, args.lon, &args.place) {
        (Some(lat), Some(lon), _) => Ok(GeoCoordinate::new(lat, lon)?),
        (None, None, Some(place)) => Ok(config.gazetteer().resolve_coordinates(place)),
        (None, None, None) => Ok(config.default_coordinate()),
        _ => bail!("--lat and --lon must be given together"),
    }
}

/// Mahadashas, or the sub-periods of the selected lords.
fn select_timeline(
    moon: f64,
    birth: Moment,
    maha: Option<Graha>,
    antar: Option<Graha>,
) -> Result<DashaTimeline> {
    let mahas = compute_mahadashas(moon, birth);
    let Some(maha_lord) = maha else {
        return Ok(mahas);
    };
    let maha_period = mahas
        .find(maha_lord)
        .with_context(|| format!("{maha_lord} has no mahadasha in this pass"))?;
    let antars = compute_antardashas(maha_lord, maha_period.start);
    let Some(antar_lord) = antar else {
        return Ok(antars);
    };
    let antar_period = antars
        .find(antar_lord)
        .with_context(|| format!("{antar_lord} has no antardasha under {maha_lord}"))?;
    Ok(compute_pratyantardashas(
        maha_lord,
        antar_lord,
        antar_period.start,
    ))
}
