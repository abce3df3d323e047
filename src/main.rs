// src/main.rs - Desktop entry point

use clap::Parser;

use channelboard::config::AppConfig;
use channelboard::ui::App;

#[derive(Parser)]
#[command(
    name = "channelboard",
    version = channelboard::VERSION,
    about = "Multi-tenant analytics dashboard for food-delivery channel performance",
    long_about = None
)]
struct Cli {
    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "channelboard=debug,info"
    } else {
        "channelboard=info,warn"
    };
    channelboard::logging::init(directive);

    match AppConfig::from_env() {
        Ok(config) if cli.show_config => {
            match serde_json::to_string_pretty(&config) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("failed to encode config: {}", e),
            }
            return;
        }
        Ok(config) => {
            tracing::info!(api_base = %config.api_base, "starting channelboard");
        }
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}
