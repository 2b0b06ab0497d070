//! Shared wire types for the Scorta inventory API.
//!
//! The store service itself is shape-agnostic (it persists whatever JSON it
//! is given); these types are the contract its clients read and write.

use serde::{Deserialize, Serialize};

/// A single inventory record.
///
/// `id` is an opaque client-generated string. New ids are UUID v4, but the
/// store enforces nothing: documents written by older clients may carry any
/// string here, and clients must compare ids by exact equality only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
}

/// The full ordered product collection, insertion order preserved.
///
/// This is the unit of every exchange with the store service: reads return
/// it whole, writes replace it whole.
pub type Collection = Vec<Product>;
