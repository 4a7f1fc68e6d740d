//! Resolve free-form technology names ("react js", "C#", "k8s") to devicon
//! icon identifiers, and derive asset URLs and display names for them.
//!
//! ```
//! use techicon_lib::NameResolver;
//!
//! let resolver = NameResolver::builtin();
//! let id = resolver.resolve_identifier("k8s").unwrap();
//! assert_eq!(id, "kubernetes");
//! assert_eq!(resolver.get_display_name(id), Some("Kubernetes"));
//! assert_eq!(
//!     resolver.build_asset_url(id).as_deref(),
//!     Some("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kubernetes/kubernetes-original.svg")
//! );
//! ```

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod devicon_data;
pub mod exit_codes;
pub mod output;
pub mod resolver;

pub use aliases::{AliasRule, AliasTable};
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use config::{Config, ConfigError};
pub use resolver::{DEFAULT_ASSET_BASE_URL, MatchKind, NameResolver, PREFERRED_VARIANT, Resolution};
