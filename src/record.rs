//! SRV records.

use std::{cmp::Reverse, num::IntErrorKind, str::FromStr};

use rand::Rng;

/// Errors encountered while decoding a textual SRV answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The answer did not have exactly four space-separated fields.
    #[error("malformed SRV record {raw:?}: expected 4 fields, found {found}")]
    FieldCount {
        /// The rejected answer.
        raw: String,
        /// Number of fields found.
        found: usize,
    },
    /// A numeric field is not a base-10 integer.
    #[error("SRV record {field} is not a number: {value:?}")]
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
    /// A numeric field is outside `0..=65535`.
    #[error("SRV record {field} out of range: {value}")]
    FieldOverflow {
        /// Name of the field.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
}

/// A decoded SRV record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrvRecord {
    priority: u16,
    weight: u16,
    port: u16,
    host: String,
}

impl SrvRecord {
    /// Creates a record from its fields. A single trailing root-label `.` is
    /// removed from `target`.
    pub fn new(priority: u16, weight: u16, port: u16, target: &str) -> Self {
        Self {
            priority,
            weight,
            port,
            host: target.strip_suffix('.').unwrap_or(target).to_owned(),
        }
    }

    /// Decodes an answer of the form `"<priority> <weight> <port> <target>"`.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let fields = raw.split(' ').collect::<Vec<_>>();
        let [priority, weight, port, target] = fields[..] else {
            return Err(DecodeError::FieldCount {
                raw: raw.to_owned(),
                found: fields.len(),
            });
        };

        Ok(Self::new(
            decode_u16("priority", priority)?,
            decode_u16("weight", weight)?,
            decode_u16("port", port)?,
            target,
        ))
    }

    /// Gets a SRV record's target host, without the trailing root dot.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Gets a SRV record's port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Gets a SRV record's priority.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Gets a SRV record's weight.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Generates a key to sort a SRV record by priority and weight per RFC 2782.
    pub fn sort_key(&self, rng: impl Rng) -> (u16, Reverse<u32>) {
        sort_key(self.priority, self.weight, rng)
    }
}

impl FromStr for SrvRecord {
    type Err = DecodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::decode(raw)
    }
}

fn decode_u16(field: &'static str, value: &str) -> Result<u16, DecodeError> {
    let overflow = || DecodeError::FieldOverflow {
        field,
        value: value.to_owned(),
    };
    match value.parse::<i64>() {
        Ok(n) => u16::try_from(n).map_err(|_| overflow()),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(overflow())
        }
        Err(_) => Err(DecodeError::InvalidNumber {
            field,
            value: value.to_owned(),
        }),
    }
}

/// Generates a key to sort a SRV record by priority and weight per RFC 2782.
pub(crate) fn sort_key(priority: u16, weight: u16, mut rng: impl Rng) -> (u16, Reverse<u32>) {
    // Sort ascending by priority, then descending (hence `Reverse`) by randomized weight
    let rand = rng.random::<u16>() as u32;
    (priority, Reverse(weight as u32 * rand))
}
