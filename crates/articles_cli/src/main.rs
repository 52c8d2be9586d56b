//! Operator front end for the article store.
//!
//! # Responsibility
//! - Map the browse/add/edit/search actions onto store operations.
//! - Render results as text lines or JSON.

use anyhow::{bail, Context, Result};
use articles_core::{init_logging, Article, ArticleId, ArticleStore, StoreConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "articles", version, about = "Manage inventory articles")]
struct Cli {
    /// Database file (overrides `ARTICLES_DB_PATH`).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides `ARTICLES_LOG_LEVEL`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides `ARTICLES_LOG_DIR`).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every article.
    List(OutputArgs),
    /// Show the details of one article.
    Show {
        id: ArticleId,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Add a new article.
    Add {
        designation: String,
        /// Unit purchase price, tax excluded.
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        /// Installation time in team-hours.
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },
    /// Edit an article; omitted fields keep their stored value.
    Edit {
        id: ArticleId,
        #[arg(long)]
        designation: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        time: Option<f64>,
    },
    /// Search articles by designation keyword (case-insensitive).
    Search {
        /// Keyword to look for; omitted matches every article.
        keyword: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let store = ArticleStore::from_config(&config)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;

    run(&store, cli.command)
}

fn resolve_config(cli: &Cli) -> StoreConfig {
    let mut config = StoreConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    config
}

fn run(store: &ArticleStore, command: Command) -> Result<()> {
    match command {
        Command::List(output) => {
            let articles = store.list_all().context("failed to list articles")?;
            if output.json {
                return print_json(&articles);
            }
            if articles.is_empty() {
                println!("No articles recorded.");
            }
            for article in &articles {
                print_article(article);
            }
        }
        Command::Show { id, output } => {
            let Some(article) = store.get(id).context("failed to load article")? else {
                bail!("article not found: {id}");
            };
            if output.json {
                return print_json(&article);
            }
            print_article(&article);
        }
        Command::Add {
            designation,
            price,
            time,
        } => {
            let id = store
                .create(&designation, price, time)
                .context("failed to add article")?;
            println!("Article added (id {id}).");
        }
        Command::Edit {
            id,
            designation,
            price,
            time,
        } => {
            let Some(current) = store.get(id).context("failed to load article")? else {
                bail!("article not found: {id}");
            };
            let mut draft = current.to_draft();
            if let Some(designation) = designation {
                draft.designation = designation;
            }
            if let Some(price) = price {
                draft.purchase_price = price;
            }
            if let Some(time) = time {
                draft.install_time = time;
            }
            store
                .update_draft(id, &draft)
                .context("failed to edit article")?;
            println!("Article {id} updated.");
        }
        Command::Search { keyword, output } => {
            let keyword = keyword.unwrap_or_default();
            let results = store.search(&keyword).context("failed to search articles")?;
            if output.json {
                return print_json(&results);
            }
            if results.is_empty() {
                println!("No matching article found.");
            } else {
                println!("{} article(s) found:", results.len());
                for article in &results {
                    print_article(article);
                }
            }
        }
    }
    Ok(())
}

fn print_article(article: &Article) {
    println!(
        "{}  |  purchase price (excl. tax): {:.2}  |  install time (team-hours): {:.2}",
        article.label(),
        article.purchase_price,
        article.install_time
    );
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
