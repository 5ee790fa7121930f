//! CLI command implementations.

/// Description composer
pub mod compose;
/// Enriched intervention view
pub mod enrich;
/// Description parser
pub mod parse;
/// Single transition check
pub mod transition;
/// Transition table listing
pub mod transitions;
/// Phase payload validation
pub mod validate;
