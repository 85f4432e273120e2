//! Argument and state validation for the keel crates.
//!
//! Contract violations are programming errors: every helper here detects a
//! violation at the call site and surfaces it synchronously as a
//! [`ContractError`]. There is no retry, no recovery and no logging layer —
//! callers either propagate the error with `?` or treat it as a bug.
//!
//! ## Helpers
//!
//! - [`check_argument`] / [`check_not_null`] / [`check_state`] — boolean and
//!   presence preconditions, with `_msg` and `_fmt` variants for custom
//!   messages
//! - [`check_element_index`] / [`check_position_index`] /
//!   [`check_position_indexes`] — index and range preconditions
//! - [`lenient_format`] — the `%s` placeholder substitution used by the
//!   `_fmt` variants
//!
//! ## Usage
//!
//! ```
//! use keel_contract::{ContractError, check_argument_msg};
//!
//! fn scale(percent: u32) -> Result<u32, ContractError> {
//!     check_argument_msg(percent <= 100, "percent must be at most 100")?;
//!     Ok(percent * 10)
//! }
//!
//! assert_eq!(scale(50), Ok(500));
//! assert!(scale(150).is_err());
//! ```

mod check;
mod error;
mod format;

pub use check::{
    check_argument, check_argument_fmt, check_argument_msg, check_element_index,
    check_element_index_named, check_not_null, check_not_null_fmt, check_not_null_msg,
    check_position_index, check_position_index_named, check_position_indexes, check_state,
    check_state_msg,
};
pub use error::{ContractError, ContractResult};
pub use format::lenient_format;
