//! Identifier generation for element ids and class names.
//!
//! Ids are short lowercase base-36 strings drawn from random bits. They are
//! unique enough to keep generated class names apart within a page; they are
//! not a security primitive.

use uuid::Uuid;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// v4 uuids fix the two variant bits at the top of the low half.
const RANDOM_LOW_BITS: u64 = (1 << 62) - 1;

/// Source of identifiers for new animators
pub trait IdGenerator {
    /// Next identifier; must be non-empty and valid inside a CSS class name
    fn next_id(&mut self) -> String;
}

/// Random ids backed by `uuid` v4
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        unique_id()
    }
}

/// Generate a random base-36 id
#[must_use]
pub fn unique_id() -> String {
    let (_, low) = Uuid::new_v4().as_u64_pair();
    to_base36(low & RANDOM_LOW_BITS)
}

/// Lowercase base-36 rendering of `value`
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
