use clap::{Args, Parser, Subcommand};
use measfmt::format::{compose, FormatConfig, MeasurementFormatter, Notation, Precision};
use measfmt::measurement::Measurement;

#[derive(Parser)]
#[command(name = "measfmt")]
#[command(about = "Format measurements with asymmetric uncertainties", long_about = None)]
struct Cli {
    /// TOML file with formatting limits and output settings
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Digits after the decimal point, or "auto"
    #[arg(short, long, default_value = "auto", allow_hyphen_values = true)]
    precision: Precision,

    /// Print the full result as JSON
    #[arg(long, conflicts_with = "latex")]
    json: bool,

    /// Print LaTeX math-mode markup
    #[arg(long)]
    latex: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format in fixed-point notation
    Decimal {
        /// Measurement (e.g., "20.1 +1 -0.1", "123 ± 23", "5")
        #[arg(allow_hyphen_values = true)]
        input: Measurement,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Format as mantissa times a power of ten
    Scientific {
        /// Measurement (e.g., "20.1 +1 -0.1", "123 ± 23", "5")
        #[arg(allow_hyphen_values = true)]
        input: Measurement,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Format several measurements in both notations, aligned on the decimal point
    Table {
        /// Measurements, one per row
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<Measurement>,

        /// Digits after the decimal point, or "auto"
        #[arg(short, long, default_value = "auto", allow_hyphen_values = true)]
        precision: Precision,
    },

    /// Format one measurement at automatic precision and at 0..=max digits
    Sweep {
        /// Measurement (e.g., "20.1 +1 -0.1", "123 ± 23", "5")
        #[arg(allow_hyphen_values = true)]
        input: Measurement,

        /// Largest fixed precision to show
        #[arg(long, default_value_t = 6)]
        max: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let formatter = match load_formatter(cli.config.as_deref()) {
        Ok(formatter) => formatter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Decimal { input, output } => {
            print_single(&formatter, &input, Notation::Decimal, &output)
        }
        Commands::Scientific { input, output } => {
            print_single(&formatter, &input, Notation::Scientific, &output)
        }
        Commands::Table { inputs, precision } => print_table(&formatter, &inputs, precision),
        Commands::Sweep { input, max } => print_sweep(&formatter, &input, max),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_formatter(path: Option<&str>) -> Result<MeasurementFormatter, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => FormatConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path, e))?,
        None => FormatConfig::default(),
    };
    Ok(MeasurementFormatter::new(config))
}

fn print_single(
    formatter: &MeasurementFormatter,
    input: &Measurement,
    notation: Notation,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = formatter.format(input, notation, output.precision)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if output.latex {
        println!("{}", result.latex());
    } else {
        println!("{}", formatter.render(&result));
    }

    Ok(())
}

fn print_table(
    formatter: &MeasurementFormatter,
    inputs: &[Measurement],
    precision: Precision,
) -> Result<(), Box<dyn std::error::Error>> {
    let separator = &formatter.config().output.separator;

    let mut decimal_column = Vec::with_capacity(inputs.len());
    let mut scientific_column = Vec::with_capacity(inputs.len());
    for input in inputs {
        decimal_column.push(formatter.decimal(input, precision)?.spacestr(separator));
        scientific_column.push(formatter.scientific(input, precision)?.spacestr(separator));
    }

    let decimal_column = compose::align_decimal_points(&decimal_column);
    let scientific_column = compose::align_decimal_points(&scientific_column);
    for (decimal, scientific) in decimal_column.iter().zip(&scientific_column) {
        println!("{} | {}", decimal, scientific);
    }

    Ok(())
}

fn print_sweep(
    formatter: &MeasurementFormatter,
    input: &Measurement,
    max: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let precisions = std::iter::once(Precision::Auto).chain((0..=max).map(Precision::Fixed));

    let mut labels = Vec::new();
    let mut decimal_column = Vec::new();
    let mut scientific_column = Vec::new();
    for precision in precisions {
        labels.push(precision.to_string());
        decimal_column.push(formatter.render(&formatter.decimal(input, precision)?));
        scientific_column.push(formatter.render(&formatter.scientific(input, precision)?));
    }

    let decimal_column = compose::align_decimal_points(&decimal_column);
    let scientific_column = compose::align_decimal_points(&scientific_column);
    for ((label, decimal), scientific) in labels.iter().zip(&decimal_column).zip(&scientific_column)
    {
        println!("Precision: {:>4} | {} | {}", label, decimal, scientific);
    }

    Ok(())
}
