//! Core data types for BondGrid-RS
//!
//! This module contains the instrument records shown in the table.
//!
//! # Main Types
//!
//! - [`Instrument`] - One record: a shared [`Core`] plus a type-specific [`Facet`]
//! - [`Core`] - Fields every instrument carries (ISIN, name, currency, ...)
//! - [`BondFacet`] - Bond-only fields (segment, dates, nominal, coupon, quotes)
//!
//! # Wire Shape
//!
//! Records are decoded from JSON objects of the form
//! `{ "core": { ... }, "bond": { ... } }`. The key next to `core` names the
//! facet, so further instrument kinds slot in as new [`Facet`] variants.
//!
//! Dates accept either a calendar date (`2031-06-15`) or an RFC 3339
//! timestamp, which is reduced to its UTC calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current record schema version
pub const RECORD_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    RECORD_SCHEMA_VERSION
}

/// Fields shared by every instrument type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Core {
    /// Schema version
    #[serde(default = "default_schema_version")]
    pub v: u32,

    /// Type discriminator ("stock", "bond", "etf", "future", "option", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Identifier code
    pub isin: String,

    /// Display name
    pub name: String,

    /// Trading currency
    pub currency: String,

    /// Exchange ticker, when one is assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

/// Bond-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondFacet {
    /// Schema version
    #[serde(default = "default_schema_version")]
    pub v: u32,

    /// Market segment the bond is listed in
    pub bond_segment: String,

    #[serde(with = "iso_date")]
    pub issue_date: NaiveDate,

    #[serde(with = "iso_date")]
    pub maturity_date: NaiveDate,

    #[serde(with = "iso_date")]
    pub last_trading_day: NaiveDate,

    /// Number of securities issued
    pub no_of_securities: f64,

    /// Nominal value
    pub nominal: f64,

    /// Coupon rate in percent, e.g. 3.75
    pub coupon_rate: f64,

    /// Accrued interest
    pub accrued_interest: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_clean: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask_clean: Option<f64>,

    /// Turnover in EUR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover_eur: Option<f64>,

    /// Number of trades
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades: Option<u64>,
}

/// Type-specific part of an instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Bond(BondFacet),
}

/// One instrument record: shared core plus type-specific facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub core: Core,
    #[serde(flatten)]
    pub facet: Facet,
}

impl Instrument {
    /// Create a bond record
    pub fn bond(core: Core, bond: BondFacet) -> Self {
        Self {
            core,
            facet: Facet::Bond(bond),
        }
    }

    /// The bond facet, if this record is a bond
    pub fn as_bond(&self) -> Option<&BondFacet> {
        match &self.facet {
            Facet::Bond(bond) => Some(bond),
        }
    }
}

/// Serde adapter for facet dates
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.naive_utc().date())
    }
}
