//! Concrete collaborators behind the core traits: the chat model, the search
//! provider, the page fetcher, the location lookup and the terminal console.

mod chat;
mod console;
mod fetcher;
mod location;
mod search;

pub use chat::{OpenAiCompatClient, OpenAiCompatClientBuilder};
pub use console::TerminalConsole;
pub use fetcher::{HttpPageFetcher, BROWSER_USER_AGENT};
pub use location::IpApiLocator;
pub use search::TavilySearch;
