use clap::Parser;

use cloudshift::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, GenerateArgs,
};
use cloudshift::adapter::inbound::cli::output::{self, OutputConfig};
use cloudshift::adapter::inbound::cli::{catalog, config, generate, operator};
use cloudshift::error::Result;
use cloudshift::infrastructure::operator::entry::Operator;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("CLI operator installed twice");
        std::process::exit(1);
    }

    if let Err(e) = dispatch(cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(command: Option<Commands>) -> Result<()> {
    match command {
        None => generate::execute(&GenerateArgs::default()),
        Some(Commands::Generate(args)) => generate::execute(&args),
        Some(Commands::Catalog) => catalog::execute(),
        Some(Commands::Config(ConfigCommand::Show(arg))) => config::execute_show(&arg.config),
        Some(Commands::Config(ConfigCommand::Validate(arg))) => {
            config::execute_validate(&arg.config)
        }
    }
}
