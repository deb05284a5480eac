//! IBAN candidate matching and validation.
//!
//! The matcher is deliberately permissive (it accepts noisy whitespace
//! inside the account body and over-captures trailing characters); the
//! validator is strict. Only candidates that survive both stages are
//! reported.

pub mod countries;
pub mod matcher;
pub mod validator;

pub use countries::lookup as country_lookup;
pub use matcher::{find_candidates, normalize};
pub use validator::{select_valid, validate_iban};
