use std::sync::Arc;

use anyhow::Context;
use tablescout::app::{build_graph, Collaborators, TracingObserver};
use tablescout::clients::{
    HttpPageFetcher, IpApiLocator, OpenAiCompatClient, TavilySearch, TerminalConsole,
};
use tablescout::config::AppConfig;
use tablescout::state::DinerState;
use tablescout_core::{Console, LocationResolver, OrderHistory};
use tablescout_graph::{ExecutionConfig, ExecutionOptions, GraphState};
use tablescout_store::SqliteOrderHistory;
use tracing_subscriber::EnvFilter;

const FALLBACK_LOCATION: &str = "São Paulo, SP";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;

    let chat = OpenAiCompatClient::builder(config.openai_api_key.clone())
        .base_url(config.openai_base_url.clone())
        .model(config.chat_model.clone())
        .build()
        .context("building chat client")?;
    let search =
        TavilySearch::new(config.tavily_api_key.clone()).context("building search client")?;
    let fetcher = HttpPageFetcher::new().context("building page fetcher")?;
    let history = SqliteOrderHistory::builder(config.database_url.clone())
        .build()
        .await
        .context("opening order history")?;
    let console = Arc::new(TerminalConsole::new());

    console.say(&"=".repeat(40));
    console.say("----     WELCOME TO TABLESCOUT     ----");
    console.say(&"=".repeat(40));

    let name = console.ask("To begin, what is your name? ").await?;
    let tax_id = console.ask("And your tax id? ").await?;

    let profile = history.lookup_history(&tax_id).await?;
    if profile.orders.is_empty() {
        console.say(&format!(
            "Nice to meet you, {}! Your profile is ready.",
            name
        ));
    } else {
        console.say(&format!("Welcome back, {}!", name));
    }

    let location = resolve_location(console.as_ref()).await?;

    let state = DinerState {
        user_id: profile.user_id,
        name,
        tax_id,
        location,
        order_history: profile.orders,
        ..DinerState::default()
    };

    let graph = build_graph(
        Collaborators {
            chat: Arc::new(chat),
            search: Arc::new(search),
            fetcher: Arc::new(fetcher),
            history: Arc::new(history),
            console: console.clone(),
        },
        // The diner controls the re-interview loop, so runs are unbounded.
        ExecutionConfig { max_steps: None },
    )?;

    let options = ExecutionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..ExecutionOptions::default()
    };
    graph
        .invoke_with_options(GraphState::new(state), options)
        .await?;

    console.say("");
    console.say(&"=".repeat(40));
    console.say("    Thanks for using tablescout!");
    console.say(&"=".repeat(40));
    Ok(())
}

/// IP lookup first, manual entry next, a hardcoded city as the last resort.
async fn resolve_location(console: &dyn Console) -> anyhow::Result<String> {
    console.say("Tracking your location by IP...");

    let resolved = match IpApiLocator::new() {
        Ok(locator) => locator.resolve().await,
        Err(err) => Err(err),
    };
    match resolved {
        Ok(location) => {
            console.say(&format!("Location confirmed: {}", location));
            return Ok(location);
        }
        Err(err) => {
            tracing::warn!(error = %err, "automatic location lookup failed");
            console.say("Could not detect it automatically.");
        }
    }

    let manual = console
        .ask("Please type your city and state (e.g. Curitiba, PR): ")
        .await?;
    if manual.is_empty() {
        return Ok(FALLBACK_LOCATION.to_string());
    }
    Ok(manual)
}
