//! Configuration discovery, INI parsing and resolved settings

pub mod ini;
mod resolver;
mod rule_config;

pub use resolver::{ConfigResolver, ConfigSource, Settings};
pub use rule_config::{DEFAULT_MATCH, DEFAULT_MATCH_DIR, MatchPattern, RuleConfig};
