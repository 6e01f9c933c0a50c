use clap::{Parser, Subcommand};
use serde_json::json;

use crate::config::BackendConfig;
use crate::services::formatter::{format_date_range, format_time};
use crate::services::{EventDataService, SupabaseClient};
use crate::types::EventData;

/// Conference event data fetcher & reporter
#[derive(Parser)]
#[command(name = "eventboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend URL (overrides EVENTBOARD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Backend access key (overrides EVENTBOARD_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Event identifier (overrides EVENTBOARD_EVENT_ID)
    #[arg(long, global = true)]
    event_id: Option<String>,

    /// UTC offset for day grouping, e.g. +02:00 (overrides EVENTBOARD_UTC_OFFSET)
    #[arg(long, global = true)]
    utc_offset: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show event header and stats (default)
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show sessions grouped by day
    Schedule {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show sponsors by tier
    Sponsors {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config =
            BackendConfig::resolve(self.url, self.api_key, self.event_id, self.utc_offset)?;
        let client = SupabaseClient::connect(&config)?;
        let service = EventDataService::new(client, config.event_id.clone());

        let data = service.fetch_all().await?;

        match self.command {
            None | Some(Commands::Summary { json: false }) => print_summary(&data, &config),
            Some(Commands::Summary { json: true }) => {
                let stats = data.stats();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "event": data.event,
                        "stats": stats,
                    }))?
                );
            }
            Some(Commands::Schedule { json: false }) => print_schedule(&data, &config),
            Some(Commands::Schedule { json: true }) => {
                let by_day = data.sessions_by_day(config.utc_offset);
                println!("{}", serde_json::to_string_pretty(&by_day)?);
            }
            Some(Commands::Sponsors { json: false }) => print_sponsors(&data),
            Some(Commands::Sponsors { json: true }) => {
                println!("{}", serde_json::to_string_pretty(&data.sponsor_tiers())?);
            }
        }

        Ok(())
    }
}

fn print_summary(data: &EventData, config: &BackendConfig) {
    println!("{}", data.event.name);
    if let Some(description) = &data.event.description {
        println!("{}", description);
    }

    let dates = format_date_range(data.event.start_date, data.event.end_date, config.utc_offset);
    match (&data.event.location, dates.is_empty()) {
        (Some(location), false) => println!("{} | {}", dates, location),
        (Some(location), true) => println!("{}", location),
        (None, false) => println!("{}", dates),
        (None, true) => {}
    }

    let stats = data.stats();
    println!();
    println!("Sessions:  {}", stats.sessions);
    println!("Speakers:  {}", stats.speakers);
    println!("Tracks:    {}", stats.tracks);
    println!("Companies: {}", stats.companies);
}

fn print_schedule(data: &EventData, config: &BackendConfig) {
    let by_day = data.sessions_by_day(config.utc_offset);
    if by_day.is_empty() {
        println!("No scheduled sessions.");
        return;
    }

    for (date, sessions) in &by_day {
        println!("{}", date.format("%A, %B %-d, %Y"));
        for session in sessions {
            let time = format_time(session.start_time, config.utc_offset);
            let mut line = format!("  {:>8}  {}", time, session.title);
            if let Some(speaker) = &session.speaker {
                line.push_str(&format!(" - {}", speaker));
            }
            if let Some(room) = &session.room {
                line.push_str(&format!(" ({})", room));
            }
            println!("{}", line);
        }
        println!();
    }
}

fn print_sponsors(data: &EventData) {
    let tiers = data.sponsor_tiers();
    if data.companies.is_empty() {
        println!("No sponsors.");
        return;
    }

    for (label, companies) in [
        ("Platinum", &tiers.platinum),
        ("Gold", &tiers.gold),
        ("Silver", &tiers.silver),
    ] {
        if companies.is_empty() {
            continue;
        }
        println!("{} Sponsors", label);
        for company in companies {
            println!("  {}", company.name);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["eventboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_schedule() {
        let cli = Cli::try_parse_from(["eventboard", "schedule"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Schedule { json: false })));
    }

    #[test]
    fn test_cli_parse_sponsors_json() {
        let cli = Cli::try_parse_from(["eventboard", "sponsors", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sponsors { json: true })));
    }

    #[test]
    fn test_cli_parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "eventboard",
            "summary",
            "--url",
            "https://demo.supabase.co",
            "--event-id",
            "evt-1",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://demo.supabase.co"));
        assert_eq!(cli.event_id.as_deref(), Some("evt-1"));
    }
}
