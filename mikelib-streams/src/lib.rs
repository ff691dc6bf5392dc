//! Small helpers for working with sequences.
//!
//! [`map`], [`filter`], [`fold`] and [`for_each`] are plain higher-order functions over slices.
//! [`to_generator`] and [`collect`] move a sequence through a channel: a producer thread sends the
//! elements one by one and a consumer drains them in the same order.

pub mod error;
mod generator;
mod seq;

pub use error::StreamsError;
pub use generator::{collect, to_generator, Generator};
pub use seq::{filter, fold, for_each, map};
