//! Read-only shop directory
//!
//! The directory is built once at startup through [`DirectoryBuilder`] and is
//! never mutated afterwards, so it can be shared across request handlers
//! behind an `Arc` without locking. Every listing operation returns records in
//! table declaration order.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// Static description of a shop, restaurant or venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub name: String,
    pub category: String,
    pub location: String,
}

impl ShopRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location: location.into(),
        }
    }
}

/// A shop record together with its directory key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopEntry {
    pub key: String,
    #[serde(flatten)]
    pub record: ShopRecord,
}

/// Normalize a lookup key: trimmed, lowercased, inner whitespace collapsed
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Immutable shop table
#[derive(Debug, Clone)]
pub struct Directory {
    shops: Vec<(String, ShopRecord)>,
    index: HashMap<String, usize>,
    aliases: HashMap<String, String>,
    popular: Vec<String>,
}

impl Directory {
    /// Start building a directory
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::default()
    }

    /// The built-in SM Mall of Asia table
    pub fn mall_of_asia() -> Result<Self> {
        let mut builder = Directory::builder();
        for (key, name, category, location) in MALL_OF_ASIA_SHOPS {
            builder = builder.shop(*key, ShopRecord::new(*name, *category, *location));
        }
        for (alias, target) in MALL_OF_ASIA_ALIASES {
            builder = builder.alias(*alias, *target);
        }
        builder.popular(POPULAR_PICKS.iter().copied()).build()
    }

    /// Number of shops in the table
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// Iterate over `(key, record)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShopRecord)> {
        self.shops.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Exact lookup by key or alias, ignoring case and surrounding whitespace
    pub fn lookup_exact(&self, key: &str) -> Option<&ShopRecord> {
        self.resolve_key(key).map(|(_, record)| record)
    }

    /// Exact lookup returning the canonical key alongside the record
    pub fn lookup_entry(&self, key: &str) -> Option<ShopEntry> {
        self.resolve_key(key).map(|(key, record)| ShopEntry {
            key: key.to_string(),
            record: record.clone(),
        })
    }

    fn resolve_key(&self, key: &str) -> Option<(&str, &ShopRecord)> {
        let key = normalize_key(key);
        let canonical = self.aliases.get(&key).unwrap_or(&key);
        self.index
            .get(canonical)
            .map(|&position| {
                let (key, record) = &self.shops[position];
                (key.as_str(), record)
            })
    }

    /// Every shop whose key or display name contains `term`.
    ///
    /// An empty term matches nothing.
    pub fn lookup_fuzzy(&self, term: &str) -> Vec<ShopEntry> {
        let term = normalize_key(term);
        if term.is_empty() {
            return Vec::new();
        }
        self.select(|key, record| key.contains(&term) || record.name.to_lowercase().contains(&term))
    }

    /// Every shop whose category contains `term`, case-insensitively
    pub fn list_by_category(&self, term: &str) -> Vec<ShopEntry> {
        let term = normalize_key(term);
        self.select(|_, record| record.category.to_lowercase().contains(&term))
    }

    /// Sorted distinct category names
    pub fn categories(&self) -> Vec<String> {
        self.shops
            .iter()
            .map(|(_, record)| record.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The curated popular list, skipping keys that are not in the table
    pub fn popular(&self) -> Vec<ShopEntry> {
        self.popular
            .iter()
            .filter_map(|key| self.lookup_entry(key))
            .collect()
    }

    fn select(&self, predicate: impl Fn(&str, &ShopRecord) -> bool) -> Vec<ShopEntry> {
        self.shops
            .iter()
            .filter(|(key, record)| predicate(key, record))
            .map(|(key, record)| ShopEntry {
                key: key.clone(),
                record: record.clone(),
            })
            .collect()
    }
}

/// Builder for [`Directory`]
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    shops: Vec<(String, ShopRecord)>,
    aliases: Vec<(String, String)>,
    popular: Vec<String>,
}

impl DirectoryBuilder {
    /// Add a shop under `key`
    pub fn shop(mut self, key: impl AsRef<str>, record: ShopRecord) -> Self {
        self.shops.push((normalize_key(key.as_ref()), record));
        self
    }

    /// Register an alternative key for an existing shop
    pub fn alias(mut self, alias: impl AsRef<str>, target: impl AsRef<str>) -> Self {
        self.aliases
            .push((normalize_key(alias.as_ref()), normalize_key(target.as_ref())));
        self
    }

    /// Set the curated popular-picks list
    pub fn popular<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.popular = keys.into_iter().map(|k| normalize_key(k.as_ref())).collect();
        self
    }

    /// Validate and freeze the table
    pub fn build(self) -> Result<Directory> {
        let mut index = HashMap::with_capacity(self.shops.len());
        for (position, (key, _)) in self.shops.iter().enumerate() {
            if key.is_empty() {
                return Err(DirectoryError::EmptyKey.into());
            }
            if index.insert(key.clone(), position).is_some() {
                return Err(DirectoryError::DuplicateKey(key.clone()).into());
            }
        }

        let mut aliases = HashMap::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            if alias.is_empty() {
                return Err(DirectoryError::EmptyKey.into());
            }
            if !index.contains_key(&target) {
                return Err(DirectoryError::UnknownAliasTarget { alias, target }.into());
            }
            if index.contains_key(&alias) || aliases.contains_key(&alias) {
                return Err(DirectoryError::DuplicateKey(alias).into());
            }
            aliases.insert(alias, target);
        }

        tracing::debug!(
            shops = self.shops.len(),
            aliases = aliases.len(),
            "Shop directory loaded"
        );

        Ok(Directory {
            shops: self.shops,
            index,
            aliases,
            popular: self.popular,
        })
    }
}

const MALL_OF_ASIA_SHOPS: &[(&str, &str, &str, &str)] = &[
    (
        "uniqlo",
        "Uniqlo - SM Mall of Asia",
        "Apparel / Fashion",
        "Main Mall, Ground Level – South Wing, near H&M and Crocs",
    ),
    (
        "h&m",
        "H&M - SM Mall of Asia",
        "Apparel / Fashion",
        "Main Mall, Level 1 – North Wing, beside Uniqlo",
    ),
    (
        "the sm store",
        "The SM Store - SM Mall of Asia",
        "Department Store",
        "Main Mall, Ground Level – Center Atrium",
    ),
    (
        "miniso",
        "Miniso - SM Mall of Asia",
        "Lifestyle / Variety Store",
        "Main Mall, Level 1 – North Wing",
    ),
    (
        "watsons",
        "Watsons - SM Mall of Asia",
        "Health & Beauty",
        "Main Mall, Level 1 – near The SM Store entrance",
    ),
    (
        "power mac",
        "Power Mac Center - SM Mall of Asia",
        "Electronics",
        "Cyberzone, Level 2 – North Wing",
    ),
    (
        "beyond the box",
        "Beyond the Box - SM Mall of Asia",
        "Electronics / Apple Reseller",
        "Cyberzone, Level 2 – North Wing",
    ),
    (
        "muji",
        "MUJI - SM Mall of Asia",
        "Lifestyle / Home & Apparel",
        "South Wing, Level 3 – near Muji Café",
    ),
    (
        "muji cafe",
        "Muji Coffee - SM Mall of Asia",
        "Café",
        "South Wing, Level 3 – inside MUJI store",
    ),
    (
        "mary grace",
        "Café Mary Grace - SM Mall of Asia",
        "Café / Bakery",
        "Ground Floor, Main Mall – near The SM Store entrance",
    ),
    (
        "shake shack",
        "Shake Shack - SM Mall of Asia",
        "Casual Dining / Burgers",
        "Ground Floor, North Wing – near Main Mall Atrium",
    ),
    (
        "tim ho wan",
        "Tim Ho Wan - SM Mall of Asia",
        "Chinese / Dim Sum Restaurant",
        "Ground Floor, Main Mall – South Wing, near Uniqlo",
    ),
    (
        "ramen nagi",
        "Ramen Nagi - SM Mall of Asia",
        "Japanese Restaurant",
        "Ground Floor, Main Mall – South Wing, near H&M",
    ),
    (
        "conti's",
        "Conti's Bakeshop and Restaurant - SM Mall of Asia",
        "Bakery / Restaurant",
        "Ground Floor, South Wing – near IMAX",
    ),
    (
        "imax",
        "IMAX Theatre - SM Mall of Asia",
        "Entertainment / Cinema",
        "South Wing – SM Cinema Complex, near Parking Building",
    ),
    (
        "moa arena",
        "Mall of Asia Arena",
        "Events / Concert Venue",
        "Across MOA Main Mall, Seaside Blvd.",
    ),
    (
        "smx",
        "SMX Convention Center Manila",
        "Convention Center",
        "MOA Complex, beside Conrad Manila",
    ),
    (
        "starbucks",
        "Starbucks - SM Mall of Asia",
        "Food & Dining / Coffee",
        "Main Mall, Ground Level – Central Atrium",
    ),
    (
        "sm supermarket",
        "SM Supermarket - SM Mall of Asia",
        "Grocery & Supermarket",
        "Main Mall, Lower Ground Level",
    ),
    (
        "forever 21",
        "Forever 21 - SM Mall of Asia",
        "Apparel / Fashion",
        "Main Mall, Ground Level – South Wing",
    ),
    (
        "zara",
        "Zara - SM Mall of Asia",
        "Apparel / Fashion",
        "Main Mall, Ground Level – South Wing",
    ),
    (
        "mcdonald's",
        "McDonald's - SM Mall of Asia",
        "Food & Dining / Fast Food",
        "Main Mall, Ground Level – Food Court Area",
    ),
    (
        "jollibee",
        "Jollibee - SM Mall of Asia",
        "Food & Dining / Fast Food",
        "Main Mall, Ground Level – near Atrium",
    ),
    (
        "national bookstore",
        "National Bookstore - SM Mall of Asia",
        "Books & Stationery",
        "Main Mall, Ground Level – North Wing",
    ),
    (
        "timezone",
        "Timezone - SM Mall of Asia",
        "Entertainment / Gaming",
        "Main Mall, Upper Ground Level – Entertainment Area",
    ),
];

const MALL_OF_ASIA_ALIASES: &[(&str, &str)] = &[
    ("hm", "h&m"),
    ("h and m", "h&m"),
    ("sm store", "the sm store"),
    ("power mac center", "power mac"),
    ("muji coffee", "muji cafe"),
    ("cafe mary grace", "mary grace"),
    ("contis", "conti's"),
    ("mall of asia arena", "moa arena"),
    ("smx convention center", "smx"),
    ("mcdo", "mcdonald's"),
    ("mcdonalds", "mcdonald's"),
    ("nbs", "national bookstore"),
];

const POPULAR_PICKS: &[&str] = &[
    "uniqlo",
    "h&m",
    "muji",
    "shake shack",
    "tim ho wan",
    "ramen nagi",
    "starbucks",
    "jollibee",
    "imax",
    "timezone",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Directory {
        Directory::builder()
            .shop("Alpha", ShopRecord::new("Alpha Store", "Food / Cafe", "L1"))
            .shop("beta", ShopRecord::new("Beta Books", "Books", "L2"))
            .shop("gamma", ShopRecord::new("Gamma Cafe", "food court", "L3"))
            .alias("a", "alpha")
            .popular(["gamma", "missing", "alpha"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_every_key_resolves_to_its_record() {
        let directory = Directory::mall_of_asia().unwrap();
        for (key, record) in directory.iter() {
            assert_eq!(directory.lookup_exact(key), Some(record));
        }
    }

    #[test]
    fn test_exact_lookup_ignores_case_and_whitespace() {
        let directory = Directory::mall_of_asia().unwrap();
        assert_eq!(
            directory.lookup_exact(" UNIQLO "),
            directory.lookup_exact("uniqlo")
        );
        assert!(directory.lookup_exact("Shake   Shack").is_some());
    }

    #[test]
    fn test_alias_lookup() {
        let directory = small();
        assert_eq!(directory.lookup_exact("A").unwrap().name, "Alpha Store");
        assert_eq!(directory.lookup_entry("a").unwrap().key, "alpha");
    }

    #[test]
    fn test_fuzzy_matches_key_or_name_in_declaration_order() {
        let directory = small();
        let keys: Vec<_> = directory
            .lookup_fuzzy("cafe")
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["gamma"]);

        let keys: Vec<_> = directory
            .lookup_fuzzy("a")
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_fuzzy_does_not_match_reverse_containment() {
        let directory = small();
        assert!(directory.lookup_fuzzy("alpha store extra").is_empty());
        assert!(directory.lookup_fuzzy("   ").is_empty());
    }

    #[test]
    fn test_list_by_category_is_case_insensitive() {
        let directory = small();
        let keys: Vec<_> = directory
            .list_by_category("FOOD")
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["alpha", "gamma"]);
        assert!(directory.list_by_category("electronics").is_empty());
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let directory = Directory::mall_of_asia().unwrap();
        let categories = directory.categories();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert_eq!(
            categories
                .iter()
                .filter(|c| c.as_str() == "Apparel / Fashion")
                .count(),
            1
        );
    }

    #[test]
    fn test_popular_skips_missing_keys() {
        let keys: Vec<_> = small().popular().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["gamma", "alpha"]);
    }

    #[test]
    fn test_builder_rejects_duplicates_and_dangling_aliases() {
        let duplicate = Directory::builder()
            .shop("x", ShopRecord::new("X", "c", "l"))
            .shop(" X ", ShopRecord::new("X2", "c", "l"))
            .build();
        assert!(matches!(
            duplicate,
            Err(crate::CoreError::Directory(DirectoryError::DuplicateKey(_)))
        ));

        let dangling = Directory::builder()
            .shop("x", ShopRecord::new("X", "c", "l"))
            .alias("y", "z")
            .build();
        assert!(matches!(
            dangling,
            Err(crate::CoreError::Directory(
                DirectoryError::UnknownAliasTarget { .. }
            ))
        ));

        let empty = Directory::builder()
            .shop("  ", ShopRecord::new("X", "c", "l"))
            .build();
        assert!(matches!(
            empty,
            Err(crate::CoreError::Directory(DirectoryError::EmptyKey))
        ));
    }

    #[test]
    fn test_built_in_table_size() {
        assert_eq!(Directory::mall_of_asia().unwrap().len(), 25);
        assert_eq!(Directory::mall_of_asia().unwrap().popular().len(), 10);
    }

    mod properties {
        use super::super::normalize_key;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_normalize_key_is_idempotent(raw in "[ \t]{0,3}[A-Za-z&' \t]{0,12}") {
                let once = normalize_key(&raw);
                prop_assert_eq!(normalize_key(&once), once.clone());
                prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
                prop_assert!(!once.contains("  "));
            }
        }
    }
}
