// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(
    clippy::float_cmp,
    clippy::as_conversions,
    clippy::pattern_type_mismatch
)]

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::str::FromStr;

#[allow(unused)]
use num_traits::float::FloatCore;
use serde::ser::Serializer;
use serde::Serialize;

// 2^127. Every finite integral f64 of smaller magnitude fits in an i128.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

// Beyond these magnitudes numbers take their exponent form as text.
const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Numeric payload of a [`Value`](crate::Value).
///
/// Integral numbers compare equal regardless of representation, so `1`,
/// `1u64` and `1.0` are the same key.
#[derive(Clone, Copy)]
pub enum Number {
    UInt(u64),
    Int(i64),
    Float(f64),
}

impl Number {
    fn float_to_int(value: f64) -> Option<i128> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < -I128_LIMIT || value >= I128_LIMIT {
            return None;
        }
        Some(value as i128)
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Number::UInt(v) => Some(*v as i128),
            Number::Int(v) => Some(*v as i128),
            Number::Float(f) => Self::float_to_int(*f),
        }
    }

    fn to_f64_lossy(&self) -> f64 {
        match self {
            Number::UInt(v) => *v as f64,
            Number::Int(v) => *v as f64,
            Number::Float(v) => *v,
        }
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format_decimal())
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::UInt(v) => serializer.serialize_u64(*v),
            Number::Int(v) => serializer.serialize_i64(*v),
            // Integral floats are written without a fractional part.
            Number::Float(f) => match Self::float_to_int(*f) {
                Some(i) => match (u64::try_from(i), i64::try_from(i)) {
                    (Ok(u), _) => serializer.serialize_u64(u),
                    (_, Ok(i)) => serializer.serialize_i64(i),
                    _ => serializer.serialize_f64(*f),
                },
                None => serializer.serialize_f64(*f),
            },
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::UInt(value)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::UInt(value as u64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Number::UInt(value as u64)
        } else {
            Number::Int(value)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseNumberError;

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNumberError);
        }

        if let Ok(u) = trimmed.parse::<u64>() {
            return Ok(Number::UInt(u));
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::from(i));
        }

        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
            return a.cmp(&b);
        }

        // total_cmp keeps NaN usable as an object key.
        self.to_f64_lossy().total_cmp(&other.to_f64_lossy())
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Number {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::UInt(v) => Some(*v),
            Number::Int(v) if *v >= 0 => Some(*v as u64),
            Number::Float(f) => Self::float_to_int(*f).and_then(|i| u64::try_from(i).ok()),
            _ => None,
        }
    }

    /// Position this number selects in an array, if it is a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        self.as_u64().and_then(|u| usize::try_from(u).ok())
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Text form of the number, as used for object keys.
    ///
    /// Very large and very small floats use exponent notation with an explicit
    /// sign, so `1e21` reads `1e+21` and `1.5e-7` reads `1.5e-7`.
    pub fn format_decimal(&self) -> String {
        if let Number::Float(f) = self {
            let magnitude = f.abs();
            if f.is_finite()
                && *f != 0.0
                && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW)
            {
                let text = format!("{f:e}");
                return match text.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        format!("{mantissa}e+{exponent}")
                    }
                    _ => text,
                };
            }
        }

        match self.as_i128() {
            Some(i) => format!("{i}"),
            None => match self.to_f64_lossy() {
                f if f == f64::INFINITY => "Infinity".into(),
                f if f == f64::NEG_INFINITY => "-Infinity".into(),
                f => format!("{f}"),
            },
        }
    }
}
