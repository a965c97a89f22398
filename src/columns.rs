//! Column set for the bond table.
//!
//! Columns read through the instrument's core or its bond facet. Records
//! without a bond facet resolve facet columns as missing.

use crate::table::{ColumnDef, ColumnRegistry};
use crate::types::Instrument;

/// The bond columns, in display order.
pub fn bond_columns() -> ColumnRegistry<Instrument> {
    ColumnRegistry::new(vec![
        ColumnDef::text("bond.bondSegment", "Market segment", |r: &Instrument| {
            r.as_bond().map(|b| b.bond_segment.as_str())
        }),
        ColumnDef::text("core.name", "Name", |r: &Instrument| {
            Some(r.core.name.as_str())
        }),
        ColumnDef::text("core.isin", "ISIN", |r: &Instrument| {
            Some(r.core.isin.as_str())
        }),
        ColumnDef::text("core.ticker", "Ticker", |r: &Instrument| {
            r.core.ticker.as_deref()
        }),
        ColumnDef::number("bond.nominal", "Nominal", |r: &Instrument| {
            r.as_bond().map(|b| b.nominal)
        }),
        ColumnDef::number("bond.couponRate", "Coupon rate", |r: &Instrument| {
            r.as_bond().map(|b| b.coupon_rate)
        }),
        ColumnDef::number("bond.accruedInterest", "Accrued interest", |r: &Instrument| {
            r.as_bond().map(|b| b.accrued_interest)
        }),
        ColumnDef::number("bond.bidClean", "Bid clean", |r: &Instrument| {
            r.as_bond().and_then(|b| b.bid_clean)
        }),
        ColumnDef::number("bond.askClean", "Ask clean", |r: &Instrument| {
            r.as_bond().and_then(|b| b.ask_clean)
        }),
    ])
}
