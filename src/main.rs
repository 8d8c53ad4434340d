use clap::{Parser, Subcommand};
use unitconv::config::{Config, DEFAULT_CONFIG_FILE};
use unitconv::convert::ConversionResult;
use unitconv::engine::{describe_unit, rephrase_hints, UnitEngine};
use unitconv::logging;
use unitconv::units::{Category, ConvertError};

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert length, weight and temperature values", long_about = None)]
struct Cli {
    /// Config file (default: unitconv.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level or logger spec written to stderr (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a free-text request
    Ask {
        /// Request text (e.g., "Convert 10 km to miles")
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Convert a value between two named units
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Source unit name or alias (e.g., "kg")
        from: String,

        /// Target unit name or alias (e.g., "pound")
        to: String,

        /// Require both units to be in this category
        #[arg(long)]
        category: Option<Category>,
    },

    /// List supported units and their aliases
    Units {
        /// Only list this category
        #[arg(long)]
        category: Option<Category>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_spec = cli
        .log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| logging::DEFAULT_LOG_LEVEL.to_string());
    let _logger = match logging::init_logging(&log_spec) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let engine = match UnitEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Ask { text } => ask(&engine, &text.join(" "), cli.json),
        Commands::Convert {
            value,
            from,
            to,
            category,
        } => convert_units(&engine, value, &from, &to, category, cli.json),
        Commands::Units { category } => list_units(&engine, category, cli.json),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => {
            let default_path = std::path::Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Config::load_from_file(default_path)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

fn ask(engine: &UnitEngine, text: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let request = engine.extract(text);

    match engine.ask(text) {
        Ok(result) => print_result(engine, &result, json),
        Err(e @ ConvertError::IncompleteExtraction { .. }) => {
            if json {
                let body = serde_json::json!({
                    "error": e.to_string(),
                    "request": request,
                    "hints": rephrase_hints(&request),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                for hint in rephrase_hints(&request) {
                    eprintln!("  hint: {}", hint);
                }
            }
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn convert_units(
    engine: &UnitEngine,
    value: f64,
    from: &str,
    to: &str,
    category: Option<Category>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = engine.convert_named(value, from, to, category)?;
    print_result(engine, &result, json)
}

fn print_result(
    engine: &UnitEngine,
    result: &ConversionResult,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let body = serde_json::json!({
            "value": result.value,
            "source_unit": result.source_unit,
            "result": result.rounded(engine.precision()),
            "target_unit": result.target_unit,
            "formatted": engine.format(result),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("✅ {}", engine.format(result));
    }
    Ok(())
}

fn list_units(
    engine: &UnitEngine,
    category: Option<Category>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    if json {
        let mut listing = serde_json::Map::new();
        for category in &categories {
            let units: Vec<_> = category
                .units()
                .iter()
                .map(|unit| {
                    serde_json::json!({
                        "unit": unit,
                        "aliases": engine.aliases().aliases_for(*unit),
                    })
                })
                .collect();
            listing.insert(category.name().to_string(), serde_json::Value::Array(units));
        }
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for category in &categories {
        println!("{}:", category);
        for unit in category.units() {
            println!("  - {}", describe_unit(engine.aliases(), *unit));
        }
    }

    Ok(())
}
