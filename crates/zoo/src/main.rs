use clap::{Parser, Subcommand};
use menagerie::{run_demo, DemoAges, LayoutReport};
use std::io;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Run the dispatch demonstration")]
    Run {
        #[arg(long, default_value_t = 2)]
        dog_age: i32,
        #[arg(long, default_value_t = 3)]
        thin_dog_age: i32,
        #[arg(long, default_value_t = 4)]
        silent_dog_age: i32,
    },
    #[command(about = "Print the instance layout report")]
    Sizes {
        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            dog_age,
            thin_dog_age,
            silent_dog_age,
        }) => {
            let ages = DemoAges {
                dog: dog_age,
                thin_dog: thin_dog_age,
                silent_dog: silent_dog_age,
            };
            run_demo(ages, &mut io::stdout().lock())?;
        }
        Some(Commands::Sizes { json }) => {
            let report = LayoutReport::capture();
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report);
            }
        }
        None => {
            run_demo(DemoAges::default(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
