//! Scripted fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use tablescout_core::{
    ChatModel, ChatRequest, ChatResponse, Console, DinerProfile, FetchError, NewOrder,
    OrderHistory, PageFetcher, PastOrder, ScoutError, SearchHit, SearchProvider,
};

/// Chat model that pops scripted replies in order and records every prompt
/// it was given.
pub struct FakeChat {
    replies: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeChat {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|reply| reply.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ChatModel for FakeChat {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ScoutError> {
        let prompt = request
            .messages
            .iter()
            .map(|message| message.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(ScoutError::ChatModel("script ran out of replies".to_string()));
        }
        Ok(ChatResponse {
            content: replies.remove(0),
        })
    }
}

/// Console that answers from a script and keeps a transcript of everything
/// said and asked.
pub struct FakeConsole {
    answers: Mutex<Vec<String>>,
    pub lines: Mutex<Vec<String>>,
}

impl FakeConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|answer| answer.to_string()).collect()),
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }
}

#[async_trait]
impl Console for FakeConsole {
    fn say(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    async fn ask(&self, prompt: &str) -> Result<String, ScoutError> {
        self.lines.lock().unwrap().push(prompt.to_string());
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            return Err(ScoutError::Console("script ran out of answers".to_string()));
        }
        Ok(answers.remove(0))
    }
}

/// Search provider returning a fixed hit list, recording the queries asked.
pub struct FakeSearch {
    hits: Vec<SearchHit>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ScoutError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.hits.clone())
    }
}

/// Page fetcher that always serves one page, or always fails.
pub struct FakeFetcher {
    page: Option<String>,
    pub urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving(page: &str) -> Self {
        Self {
            page: Some(page.to_string()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            page: None,
            urls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.page {
            Some(page) => Ok(page.clone()),
            None => Err(FetchError::Network("connection refused".to_string())),
        }
    }
}

/// In-memory order history: hand-seeded past orders, recorded inserts.
#[derive(Default)]
pub struct MemoryHistory {
    pub seeded: Mutex<Vec<PastOrder>>,
    pub saved: Mutex<Vec<NewOrder>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderHistory for MemoryHistory {
    async fn record_order(&self, order: NewOrder) -> Result<(), ScoutError> {
        self.saved.lock().unwrap().push(order);
        Ok(())
    }

    async fn lookup_history(&self, _tax_id: &str) -> Result<DinerProfile, ScoutError> {
        Ok(DinerProfile {
            user_id: "user-under-test".to_string(),
            orders: self.seeded.lock().unwrap().clone(),
        })
    }
}

pub fn hit(title: &str, url: &str, content: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        url: url.to_string(),
        content: content.to_string(),
        score: None,
    }
}

pub fn past_order(restaurant: &str, category: &str) -> PastOrder {
    PastOrder {
        restaurant: restaurant.to_string(),
        category: category.to_string(),
        dish: "unknown".to_string(),
        ordered_at: "2024-05-01 12:00:00".to_string(),
    }
}

/// A page long enough to pass the thin-page screen.
pub fn menu_page() -> String {
    format!(
        "Trattoria Bella. Homemade pasta since 1987. {} Our address is Via Roma 10.",
        "Tagliatelle al ragu, gnocchi, tiramisu. ".repeat(10)
    )
}
