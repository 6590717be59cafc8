use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chatscreens::calls::{CallEvent, CallScreen};
use chatscreens::config::ScreensConfig;
use chatscreens::search::{ContactSearchScreen, CountryPicker};
use chatscreens::{CallMediaType, Contact, EntryGroup, Searchable};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::sync::broadcast::error::RecvError;

// Terminal demo of the screen models.
//
// Usage:
//   cargo run -- call "Minh Anh"                 # voice call, hang up after 10s
//   cargo run -- call "Minh Anh" --video -s 30   # video call, hang up after 30s
//   cargo run -- contacts an                     # sectioned contact search
//   cargo run -- contacts --roster people.json   # search a JSON roster
//   cargo run -- countries viet                  # country-code picker

#[derive(Parser)]
#[command(name = "chatscreens")]
#[command(about = "Call and search screens of a chat app, driven from the terminal")]
struct Cli {
    /// JSON config file (see `ScreensConfig`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(short, long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate an outgoing call.
    Call {
        name: String,
        #[arg(long)]
        video: bool,
        /// Hang up after this many seconds.
        #[arg(short, long, default_value_t = 10)]
        seconds: u64,
    },
    /// Search contacts.
    Contacts {
        #[arg(default_value = "")]
        query: String,
        /// JSON array of contacts to search instead of the demo roster.
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },
    /// Search country dialing codes.
    Countries {
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{:<5}] [{}] - {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ScreensConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ScreensConfig::default(),
    };

    match cli.command {
        Commands::Call {
            name,
            video,
            seconds,
        } => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("building tokio runtime")?;
            let media_type = if video {
                CallMediaType::Video
            } else {
                CallMediaType::Audio
            };
            rt.block_on(run_call(name, media_type, seconds, config))
        }
        Commands::Contacts { query, roster } => {
            let contacts = match roster {
                Some(path) => load_roster(&path)?,
                None => demo_roster(),
            };
            let mut screen = ContactSearchScreen::new(contacts)?;
            screen.set_query(query);
            print_sections(&screen.sections(), cli.json, |c: &Contact| {
                c.phone.clone().unwrap_or_default()
            })
        }
        Commands::Countries { query } => {
            let mut picker = CountryPicker::new();
            picker.set_query(query);
            print_sections(&picker.sections(), cli.json, |c| c.dial_code.to_string())
        }
    }
}

async fn run_call(
    name: String,
    media_type: CallMediaType,
    seconds: u64,
    config: ScreensConfig,
) -> anyhow::Result<()> {
    let peer = Contact::new(name.to_lowercase().replace(' ', "."), name);
    let screen = CallScreen::new(peer, media_type, config.simulator);
    let mut events = screen.subscribe();
    screen.open()?;

    let hang_up = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(hang_up);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(CallEvent::Stopped) | Err(RecvError::Closed) => break,
                Ok(_) => println!("{}  {}", screen.peer().initial(), screen.status_label()),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Display fell behind by {skipped} events");
                }
            },
            _ = &mut hang_up => {
                screen.end_call();
                break;
            }
        }
    }

    info!("Final status: {}", screen.status_label());
    Ok(())
}

fn load_roster(path: &Path) -> anyhow::Result<Vec<Contact>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let contacts = serde_json::from_str(&json).context("parsing roster")?;
    Ok(contacts)
}

fn demo_roster() -> Vec<Contact> {
    [
        ("1", "Minh Anh", "+84 90 123 4567"),
        ("2", "Bao Tran", "+84 91 234 5678"),
        ("3", "Mai Phuong", "+84 93 345 6789"),
        ("4", "Aung Kyaw", "+95 9 450 123 456"),
        ("5", "Linh Nguyen", "+84 97 456 7890"),
        ("6", "Alice Walker", "+61 412 345 678"),
        ("7", "Hoang Long", "+84 98 567 8901"),
    ]
    .into_iter()
    .map(|(id, name, phone)| Contact::new(id, name).with_phone(phone))
    .collect()
}

fn print_sections<T, F>(sections: &[EntryGroup<'_, T>], json: bool, detail: F) -> anyhow::Result<()>
where
    T: Searchable,
    F: Fn(&T) -> String,
{
    if json {
        let value: Vec<serde_json::Value> = sections
            .iter()
            .map(|section| {
                serde_json::json!({
                    "key": section.key.to_string(),
                    "entries": section
                        .entries
                        .iter()
                        .map(|e| serde_json::json!({ "name": e.display_name(), "detail": detail(*e) }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if sections.is_empty() {
        println!("No results");
    }
    for section in sections {
        println!("{}", section.key);
        for entry in &section.entries {
            println!("  {:<24} {}", entry.display_name(), detail(*entry));
        }
    }
    Ok(())
}
