//! Row types for the inventory tables.
//!
//! These mirror the persisted schema one to one: `brand`, `model` and
//! `windshield`, plus the join shape returned when models are looked up by
//! brand name.

use crate::part::PartLocation;
use serde::Serialize;

/// A vehicle manufacturer (e.g. Toyota)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

/// A vehicle line belonging to exactly one [`Brand`].
///
/// Deleting the brand cascades to its models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub brand_id: i64,
}

/// A model joined with its brand name, as returned by the by-brand-name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelWithBrand {
    pub id: i64,
    pub name: String,
    pub brand_id: i64,
    pub brand_name: String,
}

/// An inventory entry for one glass part of one model.
///
/// `location` is persisted in the `type` column. `year` is the model year
/// kept as free text; the source data carried it as text and some entries use
/// ranges like "2014-2018".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindshieldRecord {
    pub id: i64,
    pub location: PartLocation,
    pub year: String,
    pub stock: i64,
    pub brand_id: i64,
    pub model_id: i64,
}
