//! CLI entry point and command handlers for tally.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use tally::config::Config;
use tally::ui::{self, Output, OutputMode};

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Typed entity records with validated counters", long_about = None)]
struct Cli {
    /// Emit one JSON object per line instead of human-readable text
    #[arg(long, global = true, conflicts_with = "quiet")]
    json: bool,
    /// Only print errors (also enabled by TALLY_QUIET=1)
    #[arg(long, short, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a restaurant and update its customers-served counter
    Restaurant {
        /// Restaurant name
        name: String,
        /// Cuisine type, e.g. Italian
        cuisine: String,
        /// Set the number of customers served (negative values are rejected)
        #[arg(long, allow_negative_numbers = true)]
        set: Option<i64>,
        /// Add to the number of customers served (negative values are rejected)
        #[arg(long, allow_negative_numbers = true)]
        add: Option<i64>,
    },
    /// Describe and greet a user
    User {
        first_name: String,
        last_name: String,
        age: u32,
        email: String,
        location: String,
        /// Add to the user's login attempts (negative values are rejected)
        #[arg(long, allow_negative_numbers = true)]
        logins: Option<i64>,
    },
    /// Describe a dog and make it sit
    Dog {
        name: String,
        age: u32,
        /// Also roll over
        #[arg(long)]
        roll_over: bool,
    },
    /// Describe a pet
    Pet {
        name: String,
        /// Pet type (defaults to defaults.pet_type from config, normally "dog")
        #[arg(long = "type", value_name = "TYPE")]
        pet_type: Option<String>,
    },
    /// Walk through the counter rules on a sample restaurant
    Demo,
    /// Run a poll, asking each person one question until someone answers "no"
    Poll {
        /// Ask about dream vacations instead of the configured question
        #[arg(long)]
        vacation: bool,
    },
    /// Enter pizza toppings until "quit"
    Toppings,
    /// Price movie tickets by age until "quit"
    Tickets,
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration (default)
    Show,
    /// Write .tally/config.md with every default filled in
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completion and `config init` must work even when the config file is broken
    let config = if cli.command.reads_config() {
        Config::load()?
    } else {
        Config::default()
    };
    let output = Output::new(resolve_mode(&cli, &config));

    match cli.command {
        Commands::Restaurant {
            name,
            cuisine,
            set,
            add,
        } => cmd::record::cmd_restaurant(&output, &name, &cuisine, set, add),
        Commands::User {
            first_name,
            last_name,
            age,
            email,
            location,
            logins,
        } => cmd::record::cmd_user(
            &output,
            &first_name,
            &last_name,
            age,
            &email,
            &location,
            logins,
        ),
        Commands::Dog {
            name,
            age,
            roll_over,
        } => cmd::record::cmd_dog(&output, &name, age, roll_over),
        Commands::Pet { name, pet_type } => {
            cmd::record::cmd_pet(&output, &config, &name, pet_type.as_deref())
        }
        Commands::Demo => cmd_demo(&output),
        Commands::Poll { vacation } => cmd::session::cmd_poll(&output, &config, vacation),
        Commands::Toppings => cmd::session::cmd_toppings(&output, &config),
        Commands::Tickets => cmd::session::cmd_tickets(&output, &config),
        Commands::Config { command } => match command.unwrap_or(ConfigCommands::Show) {
            ConfigCommands::Show => cmd::config::cmd_config_show(&output, &config),
            ConfigCommands::Init { force } => cmd::config::cmd_config_init(&output, force),
        },
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

impl Commands {
    fn reads_config(&self) -> bool {
        !matches!(
            self,
            Commands::Completion { .. }
                | Commands::Config {
                    command: Some(ConfigCommands::Init { .. })
                }
        )
    }
}

/// Flags win over the environment, which wins over config.
fn resolve_mode(cli: &Cli, config: &Config) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else if cli.quiet || ui::is_quiet() {
        OutputMode::Quiet
    } else {
        config.defaults.output
    }
}

fn cmd_demo(output: &Output) -> Result<()> {
    let outcomes = tally::demo::run_demo(output);
    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!("{} demo step(s) did not match", failed);
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tally", &mut io::stdout());
    Ok(())
}
