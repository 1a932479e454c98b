//! MOA Finder core
//!
//! Answers lookup questions about the shops and services of SM Mall of Asia:
//! - [`directory`]: the immutable shop table and its lookups
//! - [`extract`]: pulls one query string out of a loosely shaped payload
//! - [`intent`]: ordered keyword cascades mapping prose to a [`QueryIntent`]
//! - [`resolver`]: turns an intent into a [`MatchResult`]
//! - [`format`]: display strings and the JSON envelope
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use moafinder_core::{Directory, EmptyQueryPolicy, Resolver};
//!
//! let resolver = Resolver::new(Arc::new(Directory::mall_of_asia().unwrap()));
//! let result = resolver.search("uniqlo", EmptyQueryPolicy::Reject).unwrap();
//! assert!(result.found);
//! ```

pub mod content;
pub mod directory;
pub mod error;
pub mod extract;
pub mod format;
pub mod intent;
pub mod resolver;

pub use directory::{Directory, DirectoryBuilder, ShopEntry, ShopRecord};
pub use error::{CoreError, DirectoryError, QueryError, Result};
pub use extract::{FieldExtractor, Payload};
pub use intent::{Cascade, IntentKind, QueryIntent, ASSISTANT, COMPANY_DESK, TRAFFIC_DESK};
pub use resolver::{EmptyQueryPolicy, MatchPayload, MatchResult, Resolver};
