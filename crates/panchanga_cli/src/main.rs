use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;
use panchanga_base::{
    AyanamshaSystem, Ephemeris, GeoLocation, MeanElementEphemeris, RiseSetResult,
    compute_moon_rise_set, day_duration_hours, deg_to_dms, sidereal_longitude, sun_rise_set,
};
use panchanga_config::{EngineSettings, load_settings};
use panchanga_search::{
    ElementDay, ElementEnd, PanchangaResult, elongation_at, karana_for_date, masa_for_date,
    nakshatra_for_date, panchanga_for_date, search_new_moons, tithi_for_date, vara_for_date,
    yoga_for_date,
};
use panchanga_time::{CivilDate, ClockTime, jd_at_midnight, jd_to_calendar};

#[derive(Parser)]
#[command(name = "panchanga", about = "Hindu calendar (panchanga) calculator")]
struct Cli {
    /// Settings file (TOML): ayanamsha, horizon, default location, name overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ayanamsha system (lahiri, kp, raman, fagan-bradley, yukteshwar, surya-siddhanta)
    #[arg(long, global = true)]
    ayanamsha: Option<AyanamshaSystem>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset in hours (5.5 for IST)
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
    /// Place name shown in the header
    #[arg(long)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchanga for a date
    Panchang {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Tithi at sunrise, with its end time
    Tithi {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Nakshatra at sunrise, with its end time
    Nakshatra {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Yoga at sunrise, with its end time
    Yoga {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Karana at sunrise
    Karana {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Weekday of a date
    Vara {
        #[arg(long)]
        date: CivilDate,
    },
    /// Lunar month containing sunrise of a date
    Masa {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Sunrise, sunset, moonrise and moonset
    Sunrise {
        #[arg(long)]
        date: CivilDate,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// New moons between two dates
    NewMoons {
        /// First date searched (YYYY-MM-DD)
        #[arg(long)]
        from: CivilDate,
        /// Search stops before this date
        #[arg(long)]
        to: CivilDate,
    },
    /// Julian Day Number of a date
    Jdn {
        #[arg(long)]
        date: CivilDate,
    },
    /// Ayanamsha and sidereal Sun/Moon at 0h UT of a date
    Ayanamsha {
        #[arg(long)]
        date: CivilDate,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn load_engine_settings(cli: &Cli) -> EngineSettings {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => EngineSettings::default(),
    };
    if let Some(system) = cli.ayanamsha {
        settings.ephemeris = MeanElementEphemeris::new(system);
    }
    debug!("ayanamsha system: {}", settings.ephemeris.ayanamsha);
    settings
}

/// Command-line location, falling back field by field to the settings file.
fn require_location(args: &LocationArgs, settings: &EngineSettings) -> GeoLocation {
    let base = settings.location.as_ref();
    let lat = args.lat.or(base.map(|l| l.latitude_deg));
    let lon = args.lon.or(base.map(|l| l.longitude_deg));
    let (Some(lat), Some(lon)) = (lat, lon) else {
        eprintln!("Error: --lat and --lon are required (or set [location] in --config)");
        std::process::exit(1);
    };
    let tz = args.tz.or(base.map(|l| l.utc_offset_hours)).unwrap_or(0.0);
    let mut location = GeoLocation::new(lat, lon, tz);
    if let Some(name) = args.name.clone().or(base.and_then(|l| l.name.clone())) {
        location = location.with_name(name);
    }
    if let Err(e) = location.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    location
}

fn or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn until(end: &Option<ElementEnd>) -> String {
    match end {
        Some(end) if end.clock.is_next_day() => format!("until {} (next day)", end.clock),
        Some(end) => format!("until {}", end.clock),
        None => "all day".to_string(),
    }
}

fn clock_or_dash(clock: Option<ClockTime>) -> String {
    clock.map_or_else(|| "--".to_string(), |c| c.to_string())
}

fn event_text(result: &RiseSetResult) -> String {
    match result {
        RiseSetResult::Event { local_hours, .. } => {
            ClockTime::from_decimal_hours(*local_hours).to_string()
        }
        RiseSetResult::NeverRises => "never rises".to_string(),
        RiseSetResult::NeverSets => "never sets".to_string(),
        RiseSetResult::NotOnThisDate => "not on this date".to_string(),
    }
}

fn header(date: CivilDate, location: &GeoLocation) {
    let place = location.name.as_deref().unwrap_or("");
    println!(
        "{} {} ({:.4}, {:.4}, UTC{:+})\n",
        date, place, location.latitude_deg, location.longitude_deg, location.utc_offset_hours
    );
}

fn print_panchang(result: &PanchangaResult) {
    header(result.date, &result.location);
    println!(
        "Tithi:      {} ({} paksha) {}",
        result.tithi.name,
        result.tithi.paksha.name(),
        until(&result.tithi.end)
    );
    if let Some(extra) = &result.additional_tithi {
        println!("  then      {} {} (kshaya)", extra.name, until(&extra.end));
    }
    println!(
        "Nakshatra:  {} {}",
        result.nakshatra.name,
        until(&result.nakshatra.end)
    );
    if let Some(extra) = &result.additional_nakshatra {
        println!("  then      {} {} (kshaya)", extra.name, until(&extra.end));
    }
    println!("Yoga:       {} {}", result.yoga.name, until(&result.yoga.end));
    if let Some(extra) = &result.additional_yoga {
        println!("  then      {} {} (kshaya)", extra.name, until(&extra.end));
    }
    println!("Karana:     {}", result.karana.name);
    println!("Vara:       {}", result.vara.name);
    let leap = if result.masa.is_leap { " (Adhika)" } else { "" };
    println!("Masa:       {}{leap}", result.masa.name);
    println!(
        "Samvatsara: {} ({})",
        result.samvatsara.name, result.samvatsara.lunar_year
    );
    println!("Ritu:       {}", result.ritu.name);
    println!();
    println!("Sunrise:    {}", clock_or_dash(result.sunrise));
    println!("Sunset:     {}", clock_or_dash(result.sunset));
    println!("Moonrise:   {}", clock_or_dash(result.moonrise));
    println!("Moonset:    {}", clock_or_dash(result.moonset));
    println!("Day length: {:.2} h", result.day_duration_hours);
}

fn print_element_day<T>(label: &str, day: &ElementDay<T>, describe: impl Fn(&T) -> String) {
    println!("{label}: {}", describe(&day.prevailing));
    if let Some(extra) = &day.additional {
        println!("  then {} (kshaya)", describe(extra));
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_engine_settings(&cli);
    let eph = &settings.ephemeris;
    let names = &settings.names;
    let config = &settings.panchang;

    match &cli.command {
        Commands::Panchang { date, location } => {
            let location = require_location(location, &settings);
            let result = or_exit(panchanga_for_date(eph, names, *date, &location, config));
            print_panchang(&result);
        }

        Commands::Tithi { date, location } => {
            let location = require_location(location, &settings);
            let day = or_exit(tithi_for_date(eph, names, *date, &location, config));
            print_element_day("Tithi", &day, |t| {
                format!("{} [{}] {}", t.name, t.number, until(&t.end))
            });
        }

        Commands::Nakshatra { date, location } => {
            let location = require_location(location, &settings);
            let day = or_exit(nakshatra_for_date(eph, names, *date, &location, config));
            print_element_day("Nakshatra", &day, |n| {
                format!("{} [{}] {}", n.name, n.number, until(&n.end))
            });
        }

        Commands::Yoga { date, location } => {
            let location = require_location(location, &settings);
            let day = or_exit(yoga_for_date(eph, names, *date, &location, config));
            print_element_day("Yoga", &day, |y| {
                format!("{} [{}] {}", y.name, y.number, until(&y.end))
            });
        }

        Commands::Karana { date, location } => {
            let location = require_location(location, &settings);
            let info = or_exit(karana_for_date(eph, names, *date, &location, config));
            println!("Karana: {} [{}]", info.name, info.number);
        }

        Commands::Vara { date } => {
            let info = vara_for_date(names, *date);
            println!("Vara: {} ({})", info.name, info.vaar.english_name());
        }

        Commands::Masa { date, location } => {
            let location = require_location(location, &settings);
            let info = or_exit(masa_for_date(eph, names, *date, &location, config));
            let leap = if info.is_leap { " (Adhika)" } else { "" };
            println!("Masa: {}{leap}", info.name);
            println!("  Start: JD {:.5}", info.start_jd);
            println!("  End:   JD {:.5}", info.end_jd);
        }

        Commands::Sunrise { date, location } => {
            let location = require_location(location, &settings);
            let jdn = date.to_jdn();
            let (rise, set) = sun_rise_set(eph, &location, jdn, &config.riseset);
            let (moonrise, moonset) = compute_moon_rise_set(eph, &location, jdn);
            header(*date, &location);
            println!("Sunrise:    {}", event_text(&rise));
            println!("Sunset:     {}", event_text(&set));
            println!("Moonrise:   {}", event_text(&moonrise));
            println!("Moonset:    {}", event_text(&moonset));
            println!("Day length: {:.2} h", day_duration_hours(&rise, &set));
        }

        Commands::NewMoons { from, to } => {
            let start = jd_at_midnight(from.to_jdn());
            let end = jd_at_midnight(to.to_jdn());
            let found = or_exit(search_new_moons(eph, start, end));
            for jd in found {
                let (y, m, day_frac) = jd_to_calendar(jd);
                let day = day_frac.floor();
                println!(
                    "{y:04}-{m:02}-{:02} {} UT  (JD {jd:.5}, elongation {:.4} deg)",
                    day as u32,
                    ClockTime::from_decimal_hours((day_frac - day) * 24.0),
                    elongation_at(eph, jd)
                );
            }
        }

        Commands::Jdn { date } => {
            let jdn = date.to_jdn();
            let vara = vara_for_date(names, *date);
            println!("{date}: JDN {jdn} ({})", vara.name);
        }

        Commands::Ayanamsha { date } => {
            let jd = jd_at_midnight(date.to_jdn());
            let aya = eph.ayanamsha_deg(jd);
            let dms = deg_to_dms(aya);
            println!(
                "{} at {date} 0h UT: {:.4} deg ({} deg {} min {:.1} sec)",
                eph.ayanamsha, aya, dms.degrees, dms.minutes, dms.seconds
            );
            println!(
                "  Sun:  {:.4} deg sidereal",
                sidereal_longitude(eph.sun_longitude_deg(jd), aya)
            );
            println!(
                "  Moon: {:.4} deg sidereal",
                sidereal_longitude(eph.moon_longitude_deg(jd), aya)
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(*deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
}
