//! Intents and the keyword cascades that infer them from free text
//!
//! A [`Cascade`] is an ordered list of [`Rule`]s evaluated first-match-wins.
//! Keyword sets overlap between rules on purpose; precedence is decided by
//! position in the list, never by how many keywords matched.

use serde::Serialize;

/// Named restaurants with their own canned dining answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiningVenue {
    Vikings,
    Manam,
}

/// The caller's inferred purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    ShopSearch { term: String },
    CategoryBrowse { filter: Option<String> },
    PopularPicks,
    ParkingRates,
    ParkingLocations,
    ParkingOverview,
    PublicTransport,
    TrafficTips,
    WalkingDirections,
    CompanyOverview,
    CompanyFacilities,
    CompanyStatistics,
    CompanyHistory,
    CompanyOwnership,
    CompanyEvents { fireworks: bool },
    OperatingHours,
    Dining { venue: Option<DiningVenue> },
    LostAndFound,
    Wifi,
    PetPolicy,
    GeneralHelp,
}

/// Parameterless tag of a [`QueryIntent`], serialized as the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    ShopSearch,
    CategoryBrowse,
    PopularPicks,
    ParkingRates,
    ParkingLocations,
    ParkingOverview,
    PublicTransport,
    TrafficTips,
    WalkingDirections,
    CompanyOverview,
    CompanyFacilities,
    CompanyStatistics,
    CompanyHistory,
    CompanyOwnership,
    CompanyEvents,
    OperatingHours,
    Dining,
    LostAndFound,
    Wifi,
    PetPolicy,
    GeneralHelp,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::ShopSearch => "shop_search",
            IntentKind::CategoryBrowse => "category_browse",
            IntentKind::PopularPicks => "popular_picks",
            IntentKind::ParkingRates => "parking_rates",
            IntentKind::ParkingLocations => "parking_locations",
            IntentKind::ParkingOverview => "parking_overview",
            IntentKind::PublicTransport => "public_transport",
            IntentKind::TrafficTips => "traffic_tips",
            IntentKind::WalkingDirections => "walking_directions",
            IntentKind::CompanyOverview => "company_overview",
            IntentKind::CompanyFacilities => "company_facilities",
            IntentKind::CompanyStatistics => "company_statistics",
            IntentKind::CompanyHistory => "company_history",
            IntentKind::CompanyOwnership => "company_ownership",
            IntentKind::CompanyEvents => "company_events",
            IntentKind::OperatingHours => "operating_hours",
            IntentKind::Dining => "dining",
            IntentKind::LostAndFound => "lost_and_found",
            IntentKind::Wifi => "wifi",
            IntentKind::PetPolicy => "pet_policy",
            IntentKind::GeneralHelp => "general_help",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            QueryIntent::ShopSearch { .. } => IntentKind::ShopSearch,
            QueryIntent::CategoryBrowse { .. } => IntentKind::CategoryBrowse,
            QueryIntent::PopularPicks => IntentKind::PopularPicks,
            QueryIntent::ParkingRates => IntentKind::ParkingRates,
            QueryIntent::ParkingLocations => IntentKind::ParkingLocations,
            QueryIntent::ParkingOverview => IntentKind::ParkingOverview,
            QueryIntent::PublicTransport => IntentKind::PublicTransport,
            QueryIntent::TrafficTips => IntentKind::TrafficTips,
            QueryIntent::WalkingDirections => IntentKind::WalkingDirections,
            QueryIntent::CompanyOverview => IntentKind::CompanyOverview,
            QueryIntent::CompanyFacilities => IntentKind::CompanyFacilities,
            QueryIntent::CompanyStatistics => IntentKind::CompanyStatistics,
            QueryIntent::CompanyHistory => IntentKind::CompanyHistory,
            QueryIntent::CompanyOwnership => IntentKind::CompanyOwnership,
            QueryIntent::CompanyEvents { .. } => IntentKind::CompanyEvents,
            QueryIntent::OperatingHours => IntentKind::OperatingHours,
            QueryIntent::Dining { .. } => IntentKind::Dining,
            QueryIntent::LostAndFound => IntentKind::LostAndFound,
            QueryIntent::Wifi => IntentKind::Wifi,
            QueryIntent::PetPolicy => IntentKind::PetPolicy,
            QueryIntent::GeneralHelp => IntentKind::GeneralHelp,
        }
    }
}

/// Keyword test applied to a lowercased query
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// At least one keyword occurs in the query
    AnyOf(&'static [&'static str]),
    /// At least one keyword of each set occurs in the query
    Both(&'static [&'static str], &'static [&'static str]),
}

impl Condition {
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Condition::AnyOf(keywords) => contains_any(query, keywords),
            Condition::Both(first, second) => {
                contains_any(query, first) && contains_any(query, second)
            }
        }
    }
}

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query.contains(keyword))
}

/// One step of a cascade
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub condition: Condition,
    pub intent: fn(&str) -> QueryIntent,
}

/// A structured `category` value a cascade accepts instead of prose
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub intent: fn() -> QueryIntent,
}

/// Ordered first-match-wins keyword rules for one endpoint family
#[derive(Debug, Clone, Copy)]
pub struct Cascade {
    pub name: &'static str,
    pub rules: &'static [Rule],
    pub fallback: fn() -> QueryIntent,
    pub topics: &'static [Topic],
    pub help: &'static str,
}

impl Cascade {
    /// Classify a lowercased query. Always yields an intent.
    pub fn classify(&self, query: &str) -> QueryIntent {
        match self.matching_rule(query) {
            Some(rule) => {
                tracing::debug!(cascade = self.name, rule = rule.name, "Query matched rule");
                (rule.intent)(query)
            }
            None => {
                tracing::debug!(cascade = self.name, "No rule matched, using fallback");
                (self.fallback)()
            }
        }
    }

    /// The first rule whose condition matches, if any
    pub fn matching_rule(&self, query: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.condition.matches(query))
    }

    /// Look up a structured topic name
    pub fn topic(&self, name: &str) -> Option<QueryIntent> {
        self.topics
            .iter()
            .find(|topic| topic.name == name)
            .map(|topic| (topic.intent)())
    }

    pub fn topic_names(&self) -> Vec<&'static str> {
        self.topics.iter().map(|topic| topic.name).collect()
    }
}

const HOURS: &[&str] = &["hours", "open", "close", "operating", "time"];
const PARKING: &[&str] = &["parking"];
const PARK: &[&str] = &["park"];
const COST: &[&str] = &["rate", "cost", "price", "fee", "how much"];
const PARKING_PLACE: &[&str] = &[
    "where", "location", "find", "building", "slot", "space", "area", "level",
];
const TRANSPORT: &[&str] = &["how to get", "mrt", "lrt", "bus", "jeep", "transport", "commute"];
const COMMUTE: &[&str] = &[
    "how to get", "mrt", "lrt", "bus", "jeep", "transport", "commute", "taxi", "grab", "ferry",
];
const WALKING: &[&str] = &["walk", "on foot", "pedestrian", "footbridge"];
const TRAFFIC: &[&str] = &["traffic", "congestion", "rush", "road", "avoid", "best time"];
const DINING: &[&str] = &["restaurant", "food", "eat", "dine", "cafe", "coffee"];
const EVENTS: &[&str] = &["event", "concert", "show", "festival", "fireworks", "pyromusical"];
const FIREWORKS: &[&str] = &["fireworks", "pyromusical"];
const FACILITIES: &[&str] = &["facility", "restroom", "cr", "atm", "bank", "clinic", "wheelchair"];
const AMENITIES: &[&str] = &["facilit", "amenit", "restroom", "atm", "clinic", "wheelchair"];
const LOST: &[&str] = &["lost", "found"];
const HISTORY: &[&str] = &["history", "founded", "built", "established"];
const OWNERSHIP: &[&str] = &["owner", "own", "sm prime", "parent", "developer", "henry sy"];
const STATISTICS: &[&str] = &[
    "size", "big", "large", "statistic", "stats", "visitor", "how many", "square",
];
const WIFI: &[&str] = &["wifi", "internet"];
const PETS: &[&str] = &["pet", "dog", "cat"];

fn dining(query: &str) -> QueryIntent {
    let venue = if contains_any(query, &["vikings", "buffet"]) {
        Some(DiningVenue::Vikings)
    } else if contains_any(query, &["manam", "filipino"]) {
        Some(DiningVenue::Manam)
    } else {
        None
    };
    QueryIntent::Dining { venue }
}

fn events(query: &str) -> QueryIntent {
    QueryIntent::CompanyEvents {
        fireworks: contains_any(query, FIREWORKS),
    }
}

/// Cascade behind the general assistant endpoints
pub const ASSISTANT: Cascade = Cascade {
    name: "assistant",
    rules: &[
        Rule {
            name: "operating_hours",
            condition: Condition::AnyOf(HOURS),
            intent: |_| QueryIntent::OperatingHours,
        },
        Rule {
            name: "parking_rates",
            condition: Condition::Both(PARKING, COST),
            intent: |_| QueryIntent::ParkingRates,
        },
        Rule {
            name: "public_transport",
            condition: Condition::AnyOf(TRANSPORT),
            intent: |_| QueryIntent::PublicTransport,
        },
        Rule {
            name: "dining",
            condition: Condition::AnyOf(DINING),
            intent: dining,
        },
        Rule {
            name: "events",
            condition: Condition::AnyOf(EVENTS),
            intent: events,
        },
        Rule {
            name: "facilities",
            condition: Condition::AnyOf(FACILITIES),
            intent: |_| QueryIntent::CompanyFacilities,
        },
        Rule {
            name: "lost_and_found",
            condition: Condition::AnyOf(LOST),
            intent: |_| QueryIntent::LostAndFound,
        },
        Rule {
            name: "history",
            condition: Condition::AnyOf(HISTORY),
            intent: |_| QueryIntent::CompanyHistory,
        },
        Rule {
            name: "wifi",
            condition: Condition::AnyOf(WIFI),
            intent: |_| QueryIntent::Wifi,
        },
        Rule {
            name: "pets",
            condition: Condition::AnyOf(PETS),
            intent: |_| QueryIntent::PetPolicy,
        },
    ],
    fallback: || QueryIntent::GeneralHelp,
    topics: &[],
    help: "👋 Hi! I'm the SM Mall of Asia assistant.\n\n\
           You can ask me about:\n\
           • Mall hours\n\
           • Parking rates\n\
           • How to get here (MRT, LRT, bus, jeep)\n\
           • Restaurants and food\n\
           • Events, concerts and fireworks\n\
           • Facilities (restrooms, ATMs, clinic)\n\
           • Lost and found\n\
           • Mall history\n\
           • WiFi\n\
           • Pet policy",
};

/// Cascade behind the parking and traffic endpoint
pub const TRAFFIC_DESK: Cascade = Cascade {
    name: "traffic",
    rules: &[
        Rule {
            name: "parking_rates",
            condition: Condition::Both(PARK, COST),
            intent: |_| QueryIntent::ParkingRates,
        },
        Rule {
            name: "parking_locations",
            condition: Condition::Both(PARK, PARKING_PLACE),
            intent: |_| QueryIntent::ParkingLocations,
        },
        Rule {
            name: "parking",
            condition: Condition::AnyOf(PARK),
            intent: |_| QueryIntent::ParkingOverview,
        },
        Rule {
            name: "public_transport",
            condition: Condition::AnyOf(COMMUTE),
            intent: |_| QueryIntent::PublicTransport,
        },
        Rule {
            name: "walking_directions",
            condition: Condition::AnyOf(WALKING),
            intent: |_| QueryIntent::WalkingDirections,
        },
        Rule {
            name: "traffic_tips",
            condition: Condition::AnyOf(TRAFFIC),
            intent: |_| QueryIntent::TrafficTips,
        },
    ],
    fallback: || QueryIntent::GeneralHelp,
    topics: &[
        Topic {
            name: "parking_rates",
            intent: || QueryIntent::ParkingRates,
        },
        Topic {
            name: "parking_locations",
            intent: || QueryIntent::ParkingLocations,
        },
        Topic {
            name: "parking",
            intent: || QueryIntent::ParkingOverview,
        },
        Topic {
            name: "public_transport",
            intent: || QueryIntent::PublicTransport,
        },
        Topic {
            name: "traffic_tips",
            intent: || QueryIntent::TrafficTips,
        },
        Topic {
            name: "walking_directions",
            intent: || QueryIntent::WalkingDirections,
        },
    ],
    help: "🚗 Parking & Traffic Info\n\n\
           Ask me about:\n\
           • Parking rates\n\
           • Where to park\n\
           • Public transport (MRT, LRT, bus, jeep)\n\
           • Walking directions\n\
           • Traffic tips",
};

/// Cascade behind the company information endpoints
pub const COMPANY_DESK: Cascade = Cascade {
    name: "company",
    rules: &[
        Rule {
            name: "history",
            condition: Condition::AnyOf(HISTORY),
            intent: |_| QueryIntent::CompanyHistory,
        },
        Rule {
            name: "ownership",
            condition: Condition::AnyOf(OWNERSHIP),
            intent: |_| QueryIntent::CompanyOwnership,
        },
        Rule {
            name: "statistics",
            condition: Condition::AnyOf(STATISTICS),
            intent: |_| QueryIntent::CompanyStatistics,
        },
        Rule {
            name: "facilities",
            condition: Condition::AnyOf(AMENITIES),
            intent: |_| QueryIntent::CompanyFacilities,
        },
        Rule {
            name: "events",
            condition: Condition::AnyOf(EVENTS),
            intent: events,
        },
    ],
    fallback: || QueryIntent::CompanyOverview,
    topics: &[
        Topic {
            name: "overview",
            intent: || QueryIntent::CompanyOverview,
        },
        Topic {
            name: "facilities",
            intent: || QueryIntent::CompanyFacilities,
        },
        Topic {
            name: "statistics",
            intent: || QueryIntent::CompanyStatistics,
        },
        Topic {
            name: "history",
            intent: || QueryIntent::CompanyHistory,
        },
        Topic {
            name: "ownership",
            intent: || QueryIntent::CompanyOwnership,
        },
        Topic {
            name: "events",
            intent: || QueryIntent::CompanyEvents { fireworks: false },
        },
    ],
    help: "🏢 SM Mall of Asia\n\n\
           Ask me about:\n\
           • History\n\
           • Ownership\n\
           • Size and statistics\n\
           • Facilities\n\
           • Events",
};
