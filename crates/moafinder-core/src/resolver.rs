//! Query resolution
//!
//! The [`Resolver`] turns a classified [`QueryIntent`] into a [`MatchResult`]
//! against the shared [`Directory`] and the canned topics. It holds no
//! per-request state; every call is a pure function of its input and the
//! static tables.

use std::sync::Arc;

use crate::{
    content::{self, canned_topic, CannedTopic},
    directory::{normalize_key, Directory, ShopEntry},
    error::QueryError,
    format,
    intent::{Cascade, IntentKind, QueryIntent, ASSISTANT},
};

/// What an endpoint does with an empty query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// Client error naming the missing field
    Reject,
    /// Answer anyway: shop search lists the popular picks, a desk answers
    /// with its cascade's fallback (help or overview)
    Fallback,
}

/// Apply `policy` to a raw query: `Ok(None)` means "answer with the fallback"
fn guard_empty<'q>(
    query: &'q str,
    policy: EmptyQueryPolicy,
    field: &'static str,
    hint: &str,
) -> Result<Option<&'q str>, QueryError> {
    let query = query.trim();
    if !query.is_empty() {
        return Ok(Some(query));
    }
    match policy {
        EmptyQueryPolicy::Reject => Err(QueryError::MissingField {
            field,
            hint: hint.to_string(),
        }),
        EmptyQueryPolicy::Fallback => Ok(None),
    }
}

/// Structured content of a match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPayload {
    None,
    Shop(ShopEntry),
    Shops(Vec<ShopEntry>),
    Category { name: String, shops: Vec<ShopEntry> },
    Categories(Vec<String>),
    Topics(Vec<CannedTopic>),
}

/// Transport-independent outcome of a query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub found: bool,
    pub kind: IntentKind,
    pub payload: MatchPayload,
    pub display_message: String,
    pub suggestion: Option<String>,
}

impl MatchResult {
    fn found(kind: IntentKind, payload: MatchPayload, display_message: String) -> Self {
        Self {
            found: true,
            kind,
            payload,
            display_message,
            suggestion: None,
        }
    }

    fn missing(kind: IntentKind, display_message: String, suggestion: Option<String>) -> Self {
        Self {
            found: false,
            kind,
            payload: MatchPayload::None,
            display_message,
            suggestion,
        }
    }

    /// Classification succeeded but nothing matched.
    ///
    /// The help fallback is not a miss: it answers with the topic menu.
    pub fn is_not_found(&self) -> bool {
        !self.found && self.kind != IntentKind::GeneralHelp
    }
}

/// Conversational prefixes dropped before retrying a failed shop lookup
const FILLER_PREFIXES: &[&str] = &[
    "where can i find ",
    "i'm looking for ",
    "im looking for ",
    "looking for ",
    "where is ",
    "where's ",
    "locate ",
    "find ",
];

/// Strip conversational filler from a shop search term
pub fn strip_filler(term: &str) -> String {
    let normalized = normalize_key(term);
    let trimmed = normalized.trim_end_matches(['?', '!', '.']).trim();
    let stripped = FILLER_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    normalize_key(stripped)
}

/// Stateless resolver over an immutable directory
#[derive(Debug, Clone)]
pub struct Resolver {
    directory: Arc<Directory>,
}

impl Resolver {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Shop lookup by name
    pub fn search(
        &self,
        query: &str,
        policy: EmptyQueryPolicy,
    ) -> Result<MatchResult, QueryError> {
        let hint = "Please provide a shop name to search.";
        match guard_empty(query, policy, "shop", hint)? {
            Some(query) => Ok(self.search_shops(query)),
            None => Ok(self.popular()),
        }
    }

    /// Category browse; an empty filter lists every category
    pub fn browse(&self, filter: Option<&str>) -> MatchResult {
        let filter = filter
            .map(normalize_key)
            .filter(|filter| !filter.is_empty());
        self.resolve(QueryIntent::CategoryBrowse { filter })
    }

    /// The curated popular list
    pub fn popular(&self) -> MatchResult {
        self.resolve(QueryIntent::PopularPicks)
    }

    /// Structured entry point: `type` names the intent, `value` its parameter
    pub fn structured(
        &self,
        kind: Option<&str>,
        value: Option<&str>,
    ) -> Result<MatchResult, QueryError> {
        let kind = kind.map(str::trim).filter(|kind| !kind.is_empty()).ok_or_else(|| {
            QueryError::MissingField {
                field: "type",
                hint: "Please provide a query type: shop, category or popular.".to_string(),
            }
        })?;

        match kind.to_lowercase().as_str() {
            "shop" => {
                let value = value.unwrap_or_default();
                if value.trim().is_empty() {
                    return Err(QueryError::MissingField {
                        field: "value",
                        hint: "Please provide a shop name in 'value'.".to_string(),
                    });
                }
                Ok(self.search_shops(value))
            }
            "category" => Ok(self.browse(value)),
            "popular" => Ok(self.popular()),
            other => Err(QueryError::InvalidDiscriminator {
                field: "type",
                value: other.to_string(),
                accepted: vec!["shop", "category", "popular"],
            }),
        }
    }

    /// Free-text entry point for the Q&A endpoint families
    pub fn ask(
        &self,
        cascade: &Cascade,
        query: &str,
        policy: EmptyQueryPolicy,
    ) -> Result<MatchResult, QueryError> {
        let intent = match guard_empty(query, policy, "query", "Please type a question.")? {
            Some(query) => cascade.classify(&query.to_lowercase()),
            None => (cascade.fallback)(),
        };
        Ok(self.resolve_with_help(intent, cascade.help))
    }

    /// Structured topic for a cascade, e.g. `category=parking_rates`
    pub fn ask_topic(&self, cascade: &Cascade, topic: &str) -> Result<MatchResult, QueryError> {
        let topic = topic.trim().to_lowercase();
        let intent = cascade
            .topic(&topic)
            .ok_or_else(|| QueryError::InvalidDiscriminator {
                field: "category",
                value: topic.clone(),
                accepted: cascade.topic_names(),
            })?;
        Ok(self.resolve_with_help(intent, cascade.help))
    }

    /// Resolve an intent, using the assistant menu for the help fallback
    pub fn resolve(&self, intent: QueryIntent) -> MatchResult {
        self.resolve_with_help(intent, ASSISTANT.help)
    }

    fn resolve_with_help(&self, intent: QueryIntent, help: &str) -> MatchResult {
        let kind = intent.kind();
        match intent {
            QueryIntent::ShopSearch { term } => self.search_shops(&term),
            QueryIntent::CategoryBrowse { filter: None } => {
                let categories = self.directory.categories();
                let message = format::category_names(&categories);
                MatchResult::found(kind, MatchPayload::Categories(categories), message)
            }
            QueryIntent::CategoryBrowse {
                filter: Some(filter),
            } => {
                let shops = self.directory.list_by_category(&filter);
                if shops.is_empty() {
                    return MatchResult::missing(
                        kind,
                        format::category_not_found(&filter),
                        Some("Try: food, fashion, electronics, café".to_string()),
                    );
                }
                let message = format::category_listing(&filter, &shops);
                MatchResult::found(
                    kind,
                    MatchPayload::Category {
                        name: filter,
                        shops,
                    },
                    message,
                )
            }
            QueryIntent::PopularPicks => {
                let shops = self.directory.popular();
                if shops.is_empty() {
                    return MatchResult::missing(
                        kind,
                        "❌ No popular shops available right now.".to_string(),
                        None,
                    );
                }
                let message = format::popular_listing(&shops);
                MatchResult::found(kind, MatchPayload::Shops(shops), message)
            }
            QueryIntent::ParkingOverview => {
                let topics = vec![content::PARKING_RATES, content::PARKING_LOCATIONS];
                let message = format::topics(&topics);
                MatchResult::found(kind, MatchPayload::Topics(topics), message)
            }
            QueryIntent::GeneralHelp => MatchResult::missing(kind, help.to_string(), None),
            other => match canned_topic(&other) {
                Some(topic) => {
                    MatchResult::found(kind, MatchPayload::Topics(vec![topic]), topic.render())
                }
                None => MatchResult::missing(kind, help.to_string(), None),
            },
        }
    }

    fn search_shops(&self, term: &str) -> MatchResult {
        let term = normalize_key(term);
        if let Some(result) = self.lookup(&term) {
            return result;
        }

        let stripped = strip_filler(&term);
        if !stripped.is_empty() && stripped != term {
            if let Some(result) = self.lookup(&stripped) {
                tracing::debug!(original = %term, retried = %stripped, "Matched after stripping filler");
                return result;
            }
        }

        tracing::debug!(term = %term, "No shop matched");
        MatchResult::missing(
            IntentKind::ShopSearch,
            format::shop_not_found(&term),
            Some(format::shop_suggestion()),
        )
    }

    fn lookup(&self, term: &str) -> Option<MatchResult> {
        let kind = IntentKind::ShopSearch;
        if let Some(shop) = self.directory.lookup_entry(term) {
            let message = format::shop_detail(&shop.record);
            return Some(MatchResult::found(kind, MatchPayload::Shop(shop), message));
        }

        let mut matches = self.directory.lookup_fuzzy(term);
        match matches.len() {
            0 => None,
            1 => {
                let shop = matches.remove(0);
                let message = format::shop_detail(&shop.record);
                Some(MatchResult::found(kind, MatchPayload::Shop(shop), message))
            }
            _ => {
                let message = format::shop_choices(&matches);
                Some(MatchResult::found(kind, MatchPayload::Shops(matches), message))
            }
        }
    }
}
