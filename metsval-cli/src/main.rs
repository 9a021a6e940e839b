use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use metsval_core::config::Config;
use metsval_core::page::PageConsistencyValidator;
use metsval_core::vocabulary::ControlledVocabulary;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "metsval")]
#[command(about = "Validate METS workspace manifests and PAGE descriptors")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run schema and business-rule validation on a manifest
    Validate {
        #[arg(long)]
        manifest: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        schema_dir: Option<PathBuf>,
        /// Also validate every PAGE descriptor listed in the manifest
        #[arg(long)]
        pages: bool,
    },
    /// Check that a PAGE descriptor references an image listed in the manifest
    CheckPage {
        #[arg(long)]
        page: PathBuf,
        #[arg(long)]
        manifest: PathBuf,
    },
    /// List the ground-truth condition vocabulary
    Labels {
        #[arg(long)]
        prefix: Option<String>,
    },
    /// List the namespaces with a registered schema
    Schemas {
        #[arg(long)]
        schema_dir: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("failed to create log filter")?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn load_config(path: Option<PathBuf>, schema_dir: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_toml_file(&path)?,
        None => Config::default(),
    };
    if let Some(dir) = schema_dir {
        config = config.with_schema_dir(dir);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Validate {
            manifest,
            config,
            schema_dir,
            pages,
        } => {
            let mut config = load_config(config, schema_dir)?;
            if pages {
                config = config.with_check_pages(true);
            }
            let report = metsval_core::validate_workspace(&manifest, &config)
                .with_context(|| format!("{} is not valid", manifest.display()))?;
            println!("VALID {}", report.manifest.display());
            for warning in &report.warnings {
                println!("warning: {}", warning.message);
            }
            if report.pages_checked > 0 {
                println!("pages checked: {}", report.pages_checked);
            }
        }
        Commands::CheckPage { page, manifest } => {
            PageConsistencyValidator::new()
                .validate_image_reference(&page, &manifest)
                .with_context(|| format!("{} does not match {}", page.display(), manifest.display()))?;
            println!("VALID {}", page.display());
        }
        Commands::Labels { prefix } => {
            let vocabulary = ControlledVocabulary::canonical();
            for label in vocabulary.iter() {
                if prefix.as_deref().is_none_or(|p| label.path().starts_with(p)) {
                    println!("{}\t{}", label.id(), label.path());
                }
            }
        }
        Commands::Schemas { schema_dir } => {
            let config = load_config(None, schema_dir)?;
            let registry = metsval_core::build_registry(&config)?;
            for namespace in registry.namespaces() {
                println!("{namespace}");
            }
        }
    }

    Ok(())
}
