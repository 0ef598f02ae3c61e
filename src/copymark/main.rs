use clap::Parser;
use colored::*;
use copymark::api::{CmdMessage, CopymarkApi, MessageLevel};
use copymark::config::Config;
use copymark::error::Result;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = CopymarkApi::new(build_config(&cli)?);

    if cli.dry {
        println!("Checking files in: {}", api.config().root.display());
        let result = api.check()?;
        for path in &result.candidates {
            println!("{}", path.display());
        }
        print_messages(&result.messages);
        return Ok(());
    }

    let result = api.annotate()?;
    print_messages(&result.messages);
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let root = std::path::absolute(&cli.dir)?;
    let mut config = Config::new(root, cli.copyright.clone());
    if !cli.suffixes.is_empty() {
        config = config.with_suffixes(&cli.suffixes);
    }
    Ok(config)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
