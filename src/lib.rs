// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "arc")]
use alloc::sync::Arc as Rc;

#[cfg(not(feature = "arc"))]
use alloc::rc::Rc;

mod error;
mod number;
mod path;
mod resolver;
mod value;

pub use error::ConfigError;
pub use number::Number;
pub use path::PropertyPath;
pub use resolver::{get, get_or, resolve, Resolver, ResolverConfig};
pub use value::Value;
