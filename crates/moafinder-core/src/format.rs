//! Chat-widget display strings and the JSON envelope

use serde_json::{json, Map, Value};

use crate::{
    content::CannedTopic,
    directory::{ShopEntry, ShopRecord},
    intent::IntentKind,
    resolver::{MatchPayload, MatchResult},
};

/// Shops suggested when a lookup finds nothing
pub const SUGGESTED_SHOPS: &str = "uniqlo, h&m, muji, shake shack, etc.";

pub fn shop_detail(record: &ShopRecord) -> String {
    format!(
        "🛍️ {}\n📍 Location: {}\n🏷️ Category: {}",
        record.name, record.location, record.category
    )
}

/// Disambiguation list for a search that matched several shops
pub fn shop_choices(shops: &[ShopEntry]) -> String {
    let names = shops
        .iter()
        .map(|shop| format!("• {}", shop.record.name))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "🔍 Found {} matching shops:\n{}\n\nPlease be more specific!",
        shops.len(),
        names
    )
}

pub fn shop_not_found(term: &str) -> String {
    format!("❌ No shop found matching '{term}'\n\n💡 Try: {SUGGESTED_SHOPS}")
}

pub fn shop_suggestion() -> String {
    format!("Try searching for: {SUGGESTED_SHOPS}")
}

fn numbered(shops: &[ShopEntry]) -> String {
    shops
        .iter()
        .enumerate()
        .map(|(i, shop)| format!("{}. {} – {}", i + 1, shop.record.name, shop.record.location))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn category_listing(category: &str, shops: &[ShopEntry]) -> String {
    format!(
        "🏷️ Shops in '{}' ({}):\n{}",
        category,
        shops.len(),
        numbered(shops)
    )
}

pub fn category_not_found(category: &str) -> String {
    format!("❌ No shops found in category '{category}'\n\n💡 Try: food, fashion, electronics, café")
}

pub fn category_names(categories: &[String]) -> String {
    let names = categories
        .iter()
        .map(|name| format!("• {name}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("📂 Shop Categories ({}):\n{}", categories.len(), names)
}

pub fn popular_listing(shops: &[ShopEntry]) -> String {
    format!("⭐ Popular shops at SM Mall of Asia:\n{}", numbered(shops))
}

/// Topics joined with a blank line, in order
pub fn topics(topics: &[CannedTopic]) -> String {
    topics
        .iter()
        .map(CannedTopic::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a result as the JSON body returned to callers
pub fn envelope(result: &MatchResult) -> Value {
    let mut body = Map::new();
    body.insert("found".into(), json!(result.found));
    body.insert("type".into(), json!(result.kind));

    match &result.payload {
        MatchPayload::None => {}
        MatchPayload::Shop(shop) => {
            body.insert("shop".into(), json!(shop));
        }
        MatchPayload::Shops(shops) => {
            if result.kind == IntentKind::ShopSearch {
                body.insert("multiple_matches".into(), json!(true));
            }
            body.insert("count".into(), json!(shops.len()));
            body.insert("shops".into(), json!(shops));
        }
        MatchPayload::Category { name, shops } => {
            body.insert("category".into(), json!(name));
            body.insert("count".into(), json!(shops.len()));
            body.insert("shops".into(), json!(shops));
        }
        MatchPayload::Categories(categories) => {
            body.insert("count".into(), json!(categories.len()));
            body.insert("categories".into(), json!(categories));
        }
        MatchPayload::Topics(topics) => {
            body.insert("topics".into(), json!(topics));
        }
    }

    body.insert("message".into(), json!(result.display_message));
    body.insert("formatted_response".into(), json!(result.display_message));
    if let Some(suggestion) = &result.suggestion {
        body.insert("suggestion".into(), json!(suggestion));
    }

    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn entry(key: &str, name: &str) -> ShopEntry {
        ShopEntry {
            key: key.to_string(),
            record: ShopRecord::new(name, "Cafe", "Level 1"),
        }
    }

    #[test]
    fn test_shop_detail() {
        let record = ShopRecord::new("Uniqlo", "Apparel", "Ground Level");
        assert_eq!(
            shop_detail(&record),
            "🛍️ Uniqlo\n📍 Location: Ground Level\n🏷️ Category: Apparel"
        );
    }

    #[test]
    fn test_shop_choices_lists_every_name() {
        let text = shop_choices(&[entry("a", "Alpha"), entry("b", "Beta")]);
        assert!(text.starts_with("🔍 Found 2 matching shops:"));
        assert!(text.contains("• Alpha\n• Beta"));
        assert!(text.ends_with("Please be more specific!"));
    }

    #[test]
    fn test_numbered_listing() {
        let text = popular_listing(&[entry("a", "Alpha"), entry("b", "Beta")]);
        assert!(text.contains("1. Alpha – Level 1\n2. Beta – Level 1"));
    }

    #[test]
    fn test_topics_are_concatenated() {
        let text = topics(&[content::PARKING_RATES, content::PARKING_LOCATIONS]);
        assert_eq!(
            text,
            format!(
                "{}\n\n{}",
                content::PARKING_RATES.render(),
                content::PARKING_LOCATIONS.render()
            )
        );
    }

    #[test]
    fn test_envelope_for_multiple_matches() {
        let result = MatchResult {
            found: true,
            kind: IntentKind::ShopSearch,
            payload: MatchPayload::Shops(vec![entry("a", "Alpha"), entry("b", "Beta")]),
            display_message: "x".into(),
            suggestion: None,
        };
        let body = envelope(&result);
        assert_eq!(body["multiple_matches"], json!(true));
        assert_eq!(body["count"], json!(2));
        assert_eq!(body["shops"][0]["key"], json!("a"));
        assert_eq!(body["shops"][0]["name"], json!("Alpha"));
        assert_eq!(body["type"], json!("shop_search"));
        assert_eq!(body["formatted_response"], json!("x"));
    }

    #[test]
    fn test_envelope_not_found_has_suggestion_and_no_payload() {
        let result = MatchResult {
            found: false,
            kind: IntentKind::ShopSearch,
            payload: MatchPayload::None,
            display_message: shop_not_found("zzz"),
            suggestion: Some(shop_suggestion()),
        };
        let body = envelope(&result);
        assert_eq!(body["found"], json!(false));
        assert!(body.get("shop").is_none());
        assert!(body.get("shops").is_none());
        assert_eq!(body["suggestion"], json!(shop_suggestion()));
    }
}
