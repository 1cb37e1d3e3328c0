use clap::{Parser, Subcommand};
use portfolio::{check, config, generate, output, pages::Site, server};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio site: static build and contact server")]
#[command(long_about = "\
Personal portfolio site: static build and contact server

Pages and content are compiled in. The source directory holds only
configuration and the images the pages reference:

  site/
  ├── config.toml                  # Optional; see 'portfolio gen-config'
  └── assets/
      └── images/
          ├── moneymanager.png     # Project cover
          ├── BECU.jpg             # Experience logos
          └── FormulaOneRacing.jpg

Routes: /  /about  /projects  /experience  /skills  /contact
Anything else renders the not-found page (404.html in a static build).

The contact form needs 'portfolio serve' and three environment variables:
  EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY

Run 'portfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site directory (config.toml and assets/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and copy assets into the output directory
    Build,
    /// Serve pages and accept contact form submissions
    Serve {
        /// Listen address, overriding server.address from config.toml
        #[arg(long)]
        address: Option<String>,
    },
    /// Validate content and referenced assets without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} \u{2192} {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&Site::new(&site_config), &cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Serve { address } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
            let mut site_config = config::load_config(&cli.source)?;
            if let Some(address) = address {
                site_config.server.address = address;
                site_config.validate()?;
            }
            server::serve(&site_config, &cli.source)?;
        }
        Command::Check => {
            config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let report = check::check(&cli.source);
            output::print_check_output(&report);
            if report.has_errors() {
                std::process::exit(1);
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
