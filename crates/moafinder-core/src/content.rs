//! Canned answers for the non-directory topics

use serde::Serialize;

use crate::intent::{DiningVenue, QueryIntent};

/// A fixed answer with an emoji header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CannedTopic {
    pub title: &'static str,
    pub body: &'static str,
}

impl CannedTopic {
    /// Header and body joined for display
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

pub const PARKING_RATES: CannedTopic = CannedTopic {
    title: "🅿️ Parking Rates",
    body: "• Cars: ₱50 for the first 3 hours, ₱20 for every succeeding hour\n\
           • Motorcycles: ₱30 flat rate\n\
           • Overnight: ₱300 (12 midnight to 6 AM)\n\
           • Lost ticket: ₱200 on top of the accumulated fee",
};

pub const PARKING_LOCATIONS: CannedTopic = CannedTopic {
    title: "📍 Parking Locations",
    body: "• North Parking Building – beside the North Wing entrance\n\
           • South Parking Building – near the SM Cinema Complex and IMAX\n\
           • Open parking – along Seaside Blvd. near MOA Arena\n\
           • Basement parking – under the Main Mall, enter via J.W. Diokno Blvd.",
};

pub const PUBLIC_TRANSPORT: CannedTopic = CannedTopic {
    title: "🚌 Getting to SM Mall of Asia",
    body: "• MRT-3: alight at Taft Avenue, then take the MOA-bound jeep or bus\n\
           • LRT-1: alight at EDSA or Baclaran station, then ride a jeep to MOA\n\
           • Bus: EDSA Carousel buses stop at the MOA terminal\n\
           • Jeep: Baclaran–MOA jeepneys unload at the Mall transport terminal\n\
           • Taxi and Grab: use the drop-off bays at the North and South entrances",
};

pub const TRAFFIC_TIPS: CannedTopic = CannedTopic {
    title: "🚦 Traffic Tips",
    body: "• Weekday rush hours are 7–9 AM and 5–8 PM along EDSA and Roxas Blvd.\n\
           • Expect heavy traffic on weekends and on MOA Arena event nights\n\
           • Use Seaside Blvd. or Macapagal Ave. to avoid the EDSA rotonda\n\
           • Best time to visit: weekday mornings right after opening",
};

pub const WALKING_DIRECTIONS: CannedTopic = CannedTopic {
    title: "🚶 Walking Directions",
    body: "• From the MOA transport terminal: follow the covered walkway to the North Entrance\n\
           • From Conrad Manila and SMX: cross the S Maison footbridge into the Main Mall\n\
           • From MOA Arena: walk along Seaside Blvd. to the South Wing entrance\n\
           • The bay walk behind the mall connects the North and South Wings",
};

pub const COMPANY_OVERVIEW: CannedTopic = CannedTopic {
    title: "🏢 SM Mall of Asia",
    body: "One of the largest shopping malls in the Philippines, located along \
           Manila Bay in Pasay City. Home to hundreds of shops, restaurants, the \
           IMAX theatre, MOA Arena and the SMX Convention Center.\n\n\
           🕙 Open daily 10 AM – 10 PM",
};

pub const COMPANY_FACILITIES: CannedTopic = CannedTopic {
    title: "🏥 Mall Facilities",
    body: "• Restrooms (CR) on every level of the North, South and Main wings\n\
           • ATMs and banks near the Main Mall atrium and the Entertainment Mall\n\
           • Clinic at the Main Mall, Ground Level (beside Customer Service)\n\
           • Wheelchairs available for free at all Customer Service counters\n\
           • Prayer room and breastfeeding stations on Level 2",
};

pub const COMPANY_STATISTICS: CannedTopic = CannedTopic {
    title: "📊 Mall Statistics",
    body: "• Gross floor area: about 590,000 square meters\n\
           • Land area: about 42 hectares within the MOA Complex\n\
           • Over 600 shops and 200 dining establishments\n\
           • Around 200,000 visitors on a typical day",
};

pub const COMPANY_HISTORY: CannedTopic = CannedTopic {
    title: "📜 Mall History",
    body: "• Opened on May 21, 2006 on reclaimed land along Manila Bay\n\
           • Built as the flagship of SM Prime Holdings\n\
           • MOA Arena opened in 2012, followed by the SMX Convention Center expansion\n\
           • The Mall of Asia Complex keeps growing with hotels and offices",
};

pub const COMPANY_OWNERSHIP: CannedTopic = CannedTopic {
    title: "🏛️ Ownership",
    body: "SM Mall of Asia is owned and operated by SM Prime Holdings, Inc., \
           the property arm of SM Investments Corporation founded by Henry Sy Sr.",
};

pub const COMPANY_EVENTS: CannedTopic = CannedTopic {
    title: "🎉 Events at MOA",
    body: "• Concerts and sports events at the MOA Arena\n\
           • Trade shows and conventions at the SMX Convention Center\n\
           • Weekend shows at the Main Mall atrium and the Music Hall\n\
           • Seasonal festivals along the bay area",
};

pub const FIREWORKS: CannedTopic = CannedTopic {
    title: "🎆 Fireworks & Pyromusical",
    body: "• Fireworks display every Saturday at 7 PM at the bay area (weather permitting)\n\
           • The Philippine International Pyromusical Competition runs every February–March\n\
           • Best viewing spots: SM by the Bay and the seaside walk behind the Main Mall",
};

pub const OPERATING_HOURS: CannedTopic = CannedTopic {
    title: "🕙 Mall Hours",
    body: "• Monday – Sunday: 10:00 AM – 10:00 PM\n\
           • SM Supermarket opens at 8:00 AM\n\
           • Restaurants along the bay area may close as late as 12 midnight\n\
           • Hours may change on holidays",
};

pub const DINING: CannedTopic = CannedTopic {
    title: "🍽️ Dining at MOA",
    body: "• Food Court – Main Mall, Ground Level\n\
           • Bay-area restaurants – behind the Main Mall facing Manila Bay\n\
           • Cafés – Starbucks, Café Mary Grace, Muji Coffee\n\
           • Try: Shake Shack, Tim Ho Wan, Ramen Nagi, Conti's",
};

pub const VIKINGS: CannedTopic = CannedTopic {
    title: "🍽️ Vikings Luxury Buffet",
    body: "📍 Location: Bay Area, Building B – SM by the Bay\n\
           🏷️ Category: International Buffet\n\
           🕙 Lunch 11:00 AM – 2:30 PM, Dinner 5:30 PM – 9:30 PM",
};

pub const MANAM: CannedTopic = CannedTopic {
    title: "🍲 Manam Comfort Filipino",
    body: "📍 Location: Main Mall, Ground Level – North Wing\n\
           🏷️ Category: Filipino Restaurant\n\
           🕙 10:00 AM – 10:00 PM",
};

pub const LOST_AND_FOUND: CannedTopic = CannedTopic {
    title: "🔎 Lost and Found",
    body: "• Report lost items at any Customer Service counter\n\
           • Found items are kept at the Main Mall Customer Service, Ground Level\n\
           • Bring a valid ID to claim an item",
};

pub const WIFI: CannedTopic = CannedTopic {
    title: "📶 Free WiFi",
    body: "• Connect to \"SM Free WiFi\" anywhere inside the mall\n\
           • Sign in with your mobile number to get a one-time PIN\n\
           • Charging stations are available near Customer Service",
};

pub const PET_POLICY: CannedTopic = CannedTopic {
    title: "🐾 Pet Policy",
    body: "SM Mall of Asia is pet-friendly!\n\
           • Pets must be in a stroller, carrier or on a leash at all times\n\
           • Owners must bring their pet's vaccination records\n\
           • Pets are not allowed inside restaurants and the supermarket",
};

/// The canned topic for an intent.
///
/// Returns `None` for directory-backed intents, for the combined parking
/// overview and for the help fallback.
pub fn canned_topic(intent: &QueryIntent) -> Option<CannedTopic> {
    let topic = match intent {
        QueryIntent::ParkingRates => PARKING_RATES,
        QueryIntent::ParkingLocations => PARKING_LOCATIONS,
        QueryIntent::PublicTransport => PUBLIC_TRANSPORT,
        QueryIntent::TrafficTips => TRAFFIC_TIPS,
        QueryIntent::WalkingDirections => WALKING_DIRECTIONS,
        QueryIntent::CompanyOverview => COMPANY_OVERVIEW,
        QueryIntent::CompanyFacilities => COMPANY_FACILITIES,
        QueryIntent::CompanyStatistics => COMPANY_STATISTICS,
        QueryIntent::CompanyHistory => COMPANY_HISTORY,
        QueryIntent::CompanyOwnership => COMPANY_OWNERSHIP,
        QueryIntent::CompanyEvents { fireworks: true } => FIREWORKS,
        QueryIntent::CompanyEvents { fireworks: false } => COMPANY_EVENTS,
        QueryIntent::OperatingHours => OPERATING_HOURS,
        QueryIntent::Dining { venue: None } => DINING,
        QueryIntent::Dining {
            venue: Some(DiningVenue::Vikings),
        } => VIKINGS,
        QueryIntent::Dining {
            venue: Some(DiningVenue::Manam),
        } => MANAM,
        QueryIntent::LostAndFound => LOST_AND_FOUND,
        QueryIntent::Wifi => WIFI,
        QueryIntent::PetPolicy => PET_POLICY,
        QueryIntent::ShopSearch { .. }
        | QueryIntent::CategoryBrowse { .. }
        | QueryIntent::PopularPicks
        | QueryIntent::ParkingOverview
        | QueryIntent::GeneralHelp => return None,
    };
    Some(topic)
}
