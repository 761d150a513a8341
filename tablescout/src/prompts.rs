//! Prompt text for every model call the workflow makes.
//!
//! Placeholders use the `{{name}}` syntax understood by
//! [`tablescout_core::PromptTemplate`].

/// Opening question for a diner with no recorded history.
pub const FIRST_QUESTION: &str =
    "Write one short, friendly question to find out what {{name}} wants to eat in {{location}}.";

/// Turns a free-form craving into a maps-style search query.
pub const QUERY_FROM_REPLY: &str = "The user said: '{{reply}}'. Location: '{{location}}'. \
Write a Google Maps search query for it. Reply with the query only.";

/// Mines the order history for the dominant category and builds a query.
pub const HISTORY_QUERY: &str = r#"You are a personal assistant focused on REPEAT PATTERNS.

The user is in: {{location}}

RECENT ORDERS:
[{{history}}]

YOUR TASK:
Spot the food category they order the MOST (if they ordered pizza 3 times, they want pizza).
Write a Google Maps search query for the "Best [FAVORITE CATEGORY]" in their city.

Example: if they keep ordering burgers, search "Best craft burger in {{location}}".

Reply with the search query only."#;

/// Quality check over raw search results. The reply is scanned for the
/// literal word REJECTED.
pub const VALIDATION: &str = r#"You are a search validator.

Query searched: "{{query}}"
Results found:
---
{{results}}
---

Reply only APPROVED if the results contain real restaurants.
Reply REJECTED if they are just broken links or irrelevant pages."#;

/// Extraction of clean records from raw search text.
pub const EXTRACTION: &str = r#"You are a data assistant.
Read the raw text below and extract structured records.

RAW INPUT:
{{results}}

EXPECTED OUTPUT (JSON list):
Return a list of JSON objects. For each restaurant, try to extract:
- "name": the venue name (strip emojis)
- "address": the address found (if missing, use "address not provided")
- "hours": the opening hours (if missing, use "see website")
- "url": the original link (copy it exactly from the input)

Important: return ONLY the JSON, no markdown fences."#;

/// Recommendation used when the restaurant's own site could not be read.
pub const SAFE_BET: &str = r#"Act as a trusted local friend. The user wants: {{profile}}.
The restaurant's site did not load, but recommend it anyway: {{name}} ({{address}}).
Say it is a "safe bet"."#;

/// Recommendation grounded in the restaurant's own page.
pub const SOMMELIER: &str = r#"Act as a food sommelier.
Study the restaurant's site: {{page}}
Recommend dishes for this taste: "{{profile}}".
Close with the address: {{address}}."#;
