use clap::{Parser, Subcommand};
use factor_service::{ClientError, FactorClient};

#[derive(Parser)]
#[command(name = "factor-cli")]
#[command(about = "Client for the factor service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080/factorservice")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter numbers by a divisor
    Find {
        /// Comma-separated integers, e.g. 1,5,23
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        numbers: Vec<i64>,

        #[arg(short, long, allow_hyphen_values = true)]
        divisor: i64,
    },
    /// Print the service descriptor
    Describe,
    /// Run the reference cases and report pass/fail
    Demo,
}

struct Case {
    numbers: &'static [i64],
    divisor: i64,
    expected: &'static [i64],
}

const DEMO_CASES: [Case; 2] = [
    Case {
        numbers: &[1, 5, 23, 25, 35, 78, 30, 96],
        divisor: 5,
        expected: &[5, 25, 35, 30],
    },
    Case {
        numbers: &[3, 20, 15],
        divisor: 3,
        expected: &[3, 15],
    },
];

fn join(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = FactorClient::new(&cli.url);

    match cli.command {
        Commands::Find { numbers, divisor } => match client.find_factors(&numbers, divisor).await {
            Ok(result) => println!("{}", join(&result)),
            Err(ClientError::Fault { code, message }) => {
                eprintln!("Fault ({}): {}", code, message);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Describe => {
            println!("{}", client.describe().await?);
        }
        Commands::Demo => {
            let mut failed = 0;
            for (i, case) in DEMO_CASES.iter().enumerate() {
                println!("--- Case {} ---", i + 1);
                println!("Numbers: [{}]", join(case.numbers));
                println!("Divisor: {}", case.divisor);
                match client.find_factors(case.numbers, case.divisor).await {
                    Ok(result) if result == case.expected => {
                        println!("Result: {}\nPASSED", join(&result));
                    }
                    Ok(result) => {
                        failed += 1;
                        println!("Result: {}\nExpected: {}\nFAILED", join(&result), join(case.expected));
                    }
                    Err(e) => {
                        failed += 1;
                        println!("Error: {}\nFAILED", e);
                    }
                }
            }
            if failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
