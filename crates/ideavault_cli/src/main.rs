//! Terminal host for IdeaVault.
//!
//! # Responsibility
//! - Map subcommands onto idea vault actions over the SQLite-backed store.
//! - Render the page model as plain text.

use clap::{Parser, Subcommand};
use ideavault_core::{
    default_log_level, init_logging, plain_text, Domain, IdeaVault, Page, SqliteIdeaStorage,
    VaultConfig, ViewerPanel, DEFAULT_STORAGE_KEY,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ideavault")]
#[command(about = "Submit and browse ideas by domain", version)]
struct Cli {
    /// SQLite database file (defaults to the temp directory)
    #[arg(long, env = "IDEAVAULT_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Key of the persisted idea mapping
    #[arg(long, env = "IDEAVAULT_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "IDEAVAULT_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "IDEAVAULT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the domains with their guidelines
    Domains,
    /// Submit one idea
    Submit {
        #[arg(long, short, value_parser = parse_domain)]
        domain: Option<Domain>,
        /// Idea text; words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        idea: Vec<String>,
    },
    /// List ideas registered for a domain
    View {
        #[arg(value_parser = parse_domain)]
        domain: Option<Domain>,
    },
    /// Print the whole page
    Page {
        #[arg(long, value_parser = parse_domain)]
        viewing: Option<Domain>,
    },
    /// Health probe
    Ping,
}

fn parse_domain(value: &str) -> Result<Domain, String> {
    Domain::parse(value).ok_or_else(|| {
        let names: Vec<&str> = Domain::ALL.iter().map(|d| d.as_str()).collect();
        format!("unknown domain `{value}`; expected one of: {}", names.join(", "))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(cli) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    if let Command::Ping = cli.command {
        println!("ideavault_core ping={}", ideavault_core::ping());
        println!("ideavault_core version={}", ideavault_core::core_version());
        return Ok(ExitCode::SUCCESS);
    }
    if let Command::Domains = cli.command {
        print_domains();
        return Ok(ExitCode::SUCCESS);
    }

    let mut vault = open_vault(&cli)?;
    match cli.command {
        Command::Submit { domain, idea } => {
            let text = idea.join(" ");
            let accepted = vault.submit(domain, &text).is_ok();
            if let Some(message) = &vault.state().error_message {
                eprintln!("{message}");
            }
            if !accepted {
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", plain_text(&vault.state().confirmation.message));
            print_panel(&vault.view(domain));
        }
        Command::View { domain } => print_panel(&vault.view(domain)),
        Command::Page { viewing } => {
            vault.select_viewing_domain(viewing);
            print_page(&vault.page());
        }
        Command::Domains | Command::Ping => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn open_vault(cli: &Cli) -> Result<IdeaVault<SqliteIdeaStorage>, String> {
    let db_path = cli
        .db_path
        .clone()
        .unwrap_or_else(|| VaultConfig::default().db_path);
    let config = VaultConfig::new(db_path, &cli.storage_key).map_err(|err| err.to_string())?;
    let storage = config
        .open_storage()
        .map_err(|err| format!("failed to open {}: {err}", config.db_path.display()))?;
    Ok(IdeaVault::open(storage))
}

fn print_domains() {
    for domain in Domain::ALL {
        let guideline = domain.guideline();
        println!("{} ({})", domain, guideline.title);
        println!("    {}", guideline.description);
    }
}

fn print_panel(panel: &ViewerPanel) {
    if let Some(message) = panel.message() {
        println!("{message}");
    }
    for item in panel.items() {
        println!("{:>3}. {}", item.index + 1, item.text);
    }
}

fn print_page(page: &Page) {
    println!("{}", page.title);
    println!();
    println!("Submit a New Idea");
    match page.form.selected_domain {
        Some(domain) => println!("Domain: {domain}"),
        None => println!("Domain: -- Choose a Domain --"),
    }
    if let Some(guideline) = &page.form.guideline {
        println!("{}\n    {}", guideline.heading, guideline.description);
    }
    if let Some(error) = &page.form.error_message {
        println!("! {error}");
    }
    println!("{}", plain_text(page.form.warning_note));
    println!();
    println!("Registered Ideas");
    if let Some(guideline) = &page.viewer.guideline {
        println!("{}\n    {}", guideline.heading, guideline.description);
    }
    print_panel(&page.viewer.panel);
    println!();
    println!("{}", page.footer.copyright);
    println!("{}", page.footer.contact);
}

#[cfg(test)]
mod tests {
    use super::{parse_domain, Cli};
    use clap::CommandFactory;
    use ideavault_core::Domain;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_domain_accepts_wire_names_and_lists_choices_on_error() {
        assert_eq!(
            parse_domain("Tech features improvement"),
            Ok(Domain::TechFeaturesImprovement)
        );
        let err = parse_domain("Music").unwrap_err();
        assert!(err.contains("Environment related"));
    }
}
