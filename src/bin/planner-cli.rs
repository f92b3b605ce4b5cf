use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Parser)]
#[command(name = "planner-cli")]
#[command(about = "Management CLI for the Trip Planner Backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend liveness
    Ping,
    /// Fetch a user's stored preferences
    GetPrefs { user_id: String },
    /// Save a user's preferences, replacing any existing record
    SavePrefs {
        user_id: String,
        /// Interest flag, repeatable (e.g. --pref museums=true)
        #[arg(long = "pref", value_parser = parse_pref)]
        prefs: Vec<(String, bool)>,
        #[arg(short, long, default_value = "moderate")]
        budget: String,
    },
    /// Generate an itinerary
    Itinerary {
        #[arg(long = "pref", value_parser = parse_pref)]
        prefs: Vec<(String, bool)>,
        #[arg(short, long, default_value = "moderate")]
        budget: String,
    },
    /// Send a chat message
    Chat { message: String },
    /// Add a member to the group roster
    AddMember {
        name: String,
        #[arg(long = "pref", value_parser = parse_pref)]
        prefs: Vec<(String, bool)>,
    },
    /// List the group roster
    Group,
}

fn parse_pref(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=true|false, got {raw:?}"))?;
    let value: bool = value
        .parse()
        .map_err(|_| format!("expected key=true|false, got {raw:?}"))?;
    Ok((key.to_string(), value))
}

fn pref_map(prefs: Vec<(String, bool)>) -> HashMap<String, bool> {
    prefs.into_iter().collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Ping => {
            let res = client.get(format!("{}/api/ping", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::GetPrefs { user_id } => {
            let res = client
                .get(format!("{}/api/preferences/{}", cli.url, user_id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::SavePrefs {
            user_id,
            prefs,
            budget,
        } => {
            let res = client
                .post(format!("{}/api/preferences/{}", cli.url, user_id))
                .json(&json!({ "preferences": pref_map(prefs), "budget": budget }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Itinerary { prefs, budget } => {
            let res = client
                .post(format!("{}/api/itinerary/generate", cli.url))
                .json(&json!({ "preferences": pref_map(prefs), "budget": budget }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Chat { message } => {
            let res = client
                .post(format!("{}/api/chat", cli.url))
                .json(&json!({ "message": message }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::AddMember { name, prefs } => {
            let res = client
                .post(format!("{}/api/group/add", cli.url))
                .json(&json!({ "name": name, "preferences": pref_map(prefs) }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Group => {
            let res = client.get(format!("{}/api/group", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
