//! Precondition helpers.
//!
//! Each helper comes in up to three flavors: the bare check with a stock
//! message, a `_msg` variant taking a fixed message, and a `_fmt` variant
//! running the message through [`lenient_format`] only when the check
//! actually fails.

use std::fmt;

use crate::error::{ContractError, ContractResult};
use crate::format::lenient_format;

/// Check an expression involving one or more call arguments.
///
/// # Errors
///
/// Returns [`ContractError::IllegalArgument`] when `expression` is false.
pub fn check_argument(expression: bool) -> ContractResult<()> {
    check_argument_msg(expression, "invalid argument")
}

/// [`check_argument`] with a caller-supplied message.
///
/// # Errors
///
/// Returns [`ContractError::IllegalArgument`] when `expression` is false.
pub fn check_argument_msg(expression: bool, message: impl Into<String>) -> ContractResult<()> {
    if expression {
        Ok(())
    } else {
        Err(ContractError::illegal_argument(message))
    }
}

/// [`check_argument`] with a `%s` message template, formatted only on
/// failure.
///
/// # Errors
///
/// Returns [`ContractError::IllegalArgument`] when `expression` is false.
pub fn check_argument_fmt(
    expression: bool,
    template: &str,
    args: &[&dyn fmt::Display],
) -> ContractResult<()> {
    if expression {
        Ok(())
    } else {
        Err(ContractError::illegal_argument(lenient_format(
            template, args,
        )))
    }
}

/// Unwrap a value that is contractually required to be present.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] when `reference` is `None`.
pub fn check_not_null<T>(reference: Option<T>) -> ContractResult<T> {
    check_not_null_msg(reference, "required value was absent")
}

/// [`check_not_null`] with a caller-supplied message.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] when `reference` is `None`.
pub fn check_not_null_msg<T>(
    reference: Option<T>,
    message: impl Into<String>,
) -> ContractResult<T> {
    match reference {
        Some(value) => Ok(value),
        None => Err(ContractError::null_argument(message)),
    }
}

/// [`check_not_null`] with a `%s` message template, formatted only on
/// failure.
///
/// # Errors
///
/// Returns [`ContractError::NullArgument`] when `reference` is `None`.
pub fn check_not_null_fmt<T>(
    reference: Option<T>,
    template: &str,
    args: &[&dyn fmt::Display],
) -> ContractResult<T> {
    match reference {
        Some(value) => Ok(value),
        None => Err(ContractError::null_argument(lenient_format(template, args))),
    }
}

/// Check an expression involving the state of the receiver, not its
/// arguments.
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`] when `expression` is false.
pub fn check_state(expression: bool) -> ContractResult<()> {
    check_state_msg(expression, "invalid state")
}

/// [`check_state`] with a caller-supplied message.
///
/// # Errors
///
/// Returns [`ContractError::IllegalState`] when `expression` is false.
pub fn check_state_msg(expression: bool, message: impl Into<String>) -> ContractResult<()> {
    if expression {
        Ok(())
    } else {
        Err(ContractError::illegal_state(message))
    }
}

/// Check that `index` addresses an element of a collection of `size`
/// items, and hand it back for chaining.
///
/// # Errors
///
/// Returns [`ContractError::IndexOutOfBounds`] when `index >= size`.
pub fn check_element_index(index: usize, size: usize) -> ContractResult<usize> {
    check_element_index_named(index, size, "index")
}

/// [`check_element_index`] with `desc` naming the index in the message.
///
/// # Errors
///
/// Returns [`ContractError::IndexOutOfBounds`] when `index >= size`.
pub fn check_element_index_named(index: usize, size: usize, desc: &str) -> ContractResult<usize> {
    if index < size {
        Ok(index)
    } else {
        Err(ContractError::index_out_of_bounds(lenient_format(
            "%s (%s) must be less than size (%s)",
            &[&desc, &index, &size],
        )))
    }
}

/// Check that `index` is a valid position in a collection of `size` items.
///
/// Unlike an element index, a position may equal `size` (one past the last
/// element).
///
/// # Errors
///
/// Returns [`ContractError::IndexOutOfBounds`] when `index > size`.
pub fn check_position_index(index: usize, size: usize) -> ContractResult<usize> {
    check_position_index_named(index, size, "index")
}

/// [`check_position_index`] with `desc` naming the index in the message.
///
/// # Errors
///
/// Returns [`ContractError::IndexOutOfBounds`] when `index > size`.
pub fn check_position_index_named(index: usize, size: usize, desc: &str) -> ContractResult<usize> {
    if index <= size {
        Ok(index)
    } else {
        Err(ContractError::index_out_of_bounds(bad_position_index(
            index, size, desc,
        )))
    }
}

/// Check that `start..end` is a valid sub-range of a collection of `size`
/// items.
///
/// # Errors
///
/// Returns [`ContractError::IndexOutOfBounds`] when `end < start` or
/// `end > size`.
pub fn check_position_indexes(start: usize, end: usize, size: usize) -> ContractResult<()> {
    if start <= end && end <= size {
        Ok(())
    } else {
        Err(ContractError::index_out_of_bounds(bad_position_indexes(
            start, end, size,
        )))
    }
}

fn bad_position_index(index: usize, size: usize, desc: &str) -> String {
    lenient_format(
        "%s (%s) must not be greater than size (%s)",
        &[&desc, &index, &size],
    )
}

fn bad_position_indexes(start: usize, end: usize, size: usize) -> String {
    if start > size {
        return bad_position_index(start, size, "start index");
    }
    if end > size {
        return bad_position_index(end, size, "end index");
    }
    // end < start
    lenient_format(
        "end index (%s) must not be less than start index (%s)",
        &[&end, &start],
    )
}
