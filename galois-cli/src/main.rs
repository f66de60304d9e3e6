use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "galois")]
#[command(about = "Arithmetic over GF(2^8) for any irreducible polynomial and generator")]
struct Args {
    // TOML file with `polynomial` and `generator`; see galois-print-example-config
    #[arg(short, long)]
    config: Option<PathBuf>,

    // Overrides the config file. Without --generator the smallest valid generator is used
    #[arg(short, long, value_parser = galois_field::checked::parse_polynomial)]
    polynomial: Option<u16>,

    #[arg(short, long, value_parser = galois_field::checked::parse_element)]
    generator: Option<u8>,

    // Print elements as hex rather than decimal
    #[arg(long)]
    hex: bool,

    #[arg(short, long, default_value_t = tracing_subscriber::filter::LevelFilter::WARN)]
    verbosity: tracing_subscriber::filter::LevelFilter,

    #[command(subcommand)]
    command: commands::Command,
}

impl Args {
    fn field_config(&self) -> Result<galois_config::FieldConfig, galois_config::Error> {
        let mut config = match &self.config {
            Some(path) => galois_config::FieldConfig::load(path)?,
            None => galois_config::FieldConfig::default(),
        };

        if let Some(polynomial) = self.polynomial {
            config.polynomial = polynomial;
            config.generator = None;
        }
        if let Some(generator) = self.generator {
            config.generator = Some(generator);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(args.verbosity);
    tracing_subscriber::registry().with(stderr_layer).init();

    let field = args.field_config()?.build()?;
    tracing::info!("Using {field:?}");

    let output = commands::run(&field, &args.command, args.hex)?;
    println!("{output}");

    Ok(())
}
