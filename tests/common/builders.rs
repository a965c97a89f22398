//! Test data builders for creating test objects

use bondgrid_rs::{BondFacet, Core, Instrument};
use chrono::NaiveDate;

/// Builder for creating test bond records
pub struct BondBuilder {
    name: String,
    isin: String,
    ticker: Option<String>,
    segment: String,
    nominal: f64,
    coupon_rate: f64,
    bid_clean: Option<f64>,
    ask_clean: Option<f64>,
    maturity: NaiveDate,
}

impl BondBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            isin: format!("XS{:010}", name.len()),
            ticker: None,
            segment: "Govt".to_string(),
            nominal: 1000.0,
            coupon_rate: 2.5,
            bid_clean: None,
            ask_clean: None,
            maturity: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
        }
    }

    pub fn isin(mut self, isin: &str) -> Self {
        self.isin = isin.to_string();
        self
    }

    pub fn ticker(mut self, ticker: &str) -> Self {
        self.ticker = Some(ticker.to_string());
        self
    }

    pub fn segment(mut self, segment: &str) -> Self {
        self.segment = segment.to_string();
        self
    }

    pub fn nominal(mut self, nominal: f64) -> Self {
        self.nominal = nominal;
        self
    }

    pub fn coupon(mut self, coupon_rate: f64) -> Self {
        self.coupon_rate = coupon_rate;
        self
    }

    pub fn bid(mut self, bid: f64) -> Self {
        self.bid_clean = Some(bid);
        self
    }

    pub fn ask(mut self, ask: f64) -> Self {
        self.ask_clean = Some(ask);
        self
    }

    pub fn build(self) -> Instrument {
        let issue = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        Instrument::bond(
            Core {
                v: 1,
                kind: "bond".to_string(),
                isin: self.isin,
                name: self.name,
                currency: "EUR".to_string(),
                ticker: self.ticker,
            },
            BondFacet {
                v: 1,
                bond_segment: self.segment,
                issue_date: issue,
                maturity_date: self.maturity,
                last_trading_day: self.maturity,
                no_of_securities: 10_000.0,
                nominal: self.nominal,
                coupon_rate: self.coupon_rate,
                accrued_interest: 0.0,
                market: None,
                bid_clean: self.bid_clean,
                ask_clean: self.ask_clean,
                turnover_eur: None,
                trades: None,
            },
        )
    }
}

/// Bonds named after the given strings, otherwise identical
pub fn named_bonds(names: &[&str]) -> Vec<Instrument> {
    names.iter().map(|n| BondBuilder::new(n).build()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_builder() {
        let bond = BondBuilder::new("Alpha").ticker("ALP").bid(99.5).build();

        assert_eq!(bond.core.name, "Alpha");
        assert_eq!(bond.core.ticker.as_deref(), Some("ALP"));
        assert_eq!(bond.as_bond().unwrap().bid_clean, Some(99.5));
    }
}
