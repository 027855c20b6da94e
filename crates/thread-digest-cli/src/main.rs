use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::{
    io::{self, Read},
    path::PathBuf,
};
use thread_digest_config::{Config, DEFAULT_THREAD_LIMIT};
use thread_digest_connectors::{
    MessageSource, NotionClient, SlackClient, SubmitOutcome, collect_threads, submit_document,
};
use thread_digest_engine::{
    BlockKind, Document, GenericBlock, RichSpan, build_document, materialize,
    render_all,
};

const DEFAULT_MESSAGE_LIMIT: usize = 10;

#[derive(Parser)]
#[command(name = "thread-digest", version, about = "File Slack thread summaries in Notion")]
struct Cli {
    /// Config file (defaults to ~/.config/thread-digest/config.toml, then
    /// the SLACK_* / NOTION_* environment variables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarise recent threads of the channel into one Notion page
    Threads {
        /// How many recent messages to scan for threads
        #[arg(long, default_value_t = DEFAULT_THREAD_LIMIT)]
        limit: usize,
        #[arg(long, default_value = "Thread Summary")]
        title: String,
        /// Print the Notion blocks instead of creating a page
        #[arg(long)]
        dry_run: bool,
    },
    /// Copy recent messages into Notion, one page per message
    Messages {
        #[arg(long, default_value_t = DEFAULT_MESSAGE_LIMIT)]
        limit: usize,
        #[arg(long, default_value = "Slack Message")]
        title: String,
    },
    /// Convert a markdown file (or stdin) to Notion blocks and print them
    Convert {
        file: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file {} does not exist", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => Ok(config),
        None => Config::from_env().context("no config file found and environment is incomplete"),
    }
}

fn print_blocks(document: &Document) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}

async fn run_threads(config: &Config, limit: usize, title: &str, dry_run: bool) -> Result<()> {
    let slack = SlackClient::new(&config.slack.bot_token);
    let threads = collect_threads(&slack, &config.slack.channel_id, limit)
        .await
        .context("fetching conversation history")?;

    let summary = render_all(&threads);
    if summary.is_empty() {
        info!("No thread summaries found");
        return Ok(());
    }
    print!("{summary}");

    // Rejected blocks are logged by the materializer
    let (document, _) = build_document(&summary);

    if dry_run {
        return print_blocks(&document);
    }

    let notion_config = config.notion()?;
    let notion = NotionClient::new(&notion_config.api_token);
    match submit_document(&notion, &notion_config.database_id, title, document)
        .await
        .context("creating Notion page")?
    {
        SubmitOutcome::Created(page_id) => {
            println!("Notion page created successfully. Page ID: {page_id}")
        }
        SubmitOutcome::NothingToSubmit => info!("No blocks to submit"),
    }
    Ok(())
}

/// A message copied verbatim is one plain paragraph; its markup is not parsed.
fn message_document(text: &str) -> Document {
    if text.trim().is_empty() {
        return Document::default();
    }
    let (blocks, _) = materialize(vec![GenericBlock::new(
        BlockKind::Paragraph.discriminator(),
        vec![RichSpan::plain(text)],
    )]);
    Document::from(blocks)
}

async fn run_messages(config: &Config, limit: usize, title: &str) -> Result<()> {
    let notion_config = config.notion()?;
    let slack = SlackClient::new(&config.slack.bot_token);
    let history = slack
        .fetch_history(&config.slack.channel_id, limit)
        .await
        .context("fetching conversation history")?;

    for message in &history {
        println!("Message: {}", message.text);
    }

    let notion = NotionClient::new(&notion_config.api_token);
    for message in history {
        let document = message_document(&message.text);
        match submit_document(&notion, &notion_config.database_id, title, document).await? {
            SubmitOutcome::Created(page_id) => {
                info!("Created page {page_id} for message {}", message.ts)
            }
            SubmitOutcome::NothingToSubmit => info!("Message {} has no text, skipped", message.ts),
        }
    }
    Ok(())
}

fn run_convert(file: Option<&PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let (document, _) = build_document(&text);
    print_blocks(&document)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Convert { file } => run_convert(file.as_ref()),
        Command::Threads {
            limit,
            title,
            dry_run,
        } => {
            let config = load_config(cli.config.as_ref())?;
            run_threads(&config, *limit, title, *dry_run).await
        }
        Command::Messages { limit, title } => {
            let config = load_config(cli.config.as_ref())?;
            run_messages(&config, *limit, title).await
        }
    }
}
