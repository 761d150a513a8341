mod chat;
mod console;
mod error;
mod fetch;
mod history;
mod location;
mod parsers;
mod search;
mod template;

pub use chat::{ChatModel, ChatRequest, ChatResponse, Message, Role};
pub use console::Console;
pub use error::ScoutError;
pub use fetch::{FetchError, PageFetcher};
pub use history::{DinerProfile, NewOrder, OrderHistory, PastOrder};
pub use location::LocationResolver;
pub use parsers::{clean_json_block, from_json_text};
pub use search::{SearchHit, SearchProvider};
pub use template::PromptTemplate;

pub type Value = serde_json::Value;
