use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::investments_errors::{InvestmentError, Result};

/// Asset class of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Stock,
    MutualFund,
    Etf,
    Bond,
    Crypto,
    RealEstate,
    Gold,
    Other,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Stock => "stock",
            InvestmentType::MutualFund => "mutual_fund",
            InvestmentType::Etf => "etf",
            InvestmentType::Bond => "bond",
            InvestmentType::Crypto => "crypto",
            InvestmentType::RealEstate => "real_estate",
            InvestmentType::Gold => "gold",
            InvestmentType::Other => "other",
        }
    }

    /// Human-readable label for pickers and reports.
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::Stock => "Stock",
            InvestmentType::MutualFund => "Mutual Fund",
            InvestmentType::Etf => "ETF",
            InvestmentType::Bond => "Bond",
            InvestmentType::Crypto => "Cryptocurrency",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Gold => "Gold",
            InvestmentType::Other => "Other",
        }
    }
}

impl FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stock" => Ok(InvestmentType::Stock),
            "mutual_fund" => Ok(InvestmentType::MutualFund),
            "etf" => Ok(InvestmentType::Etf),
            "bond" => Ok(InvestmentType::Bond),
            "crypto" => Ok(InvestmentType::Crypto),
            "real_estate" => Ok(InvestmentType::RealEstate),
            "gold" => Ok(InvestmentType::Gold),
            "other" => Ok(InvestmentType::Other),
            _ => Err(format!("Unknown investment type: {}", s)),
        }
    }
}

/// Domain model representing one purchased holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub quantity: f64,
    pub buy_price: f64,
    pub current_price: f64,
    pub buy_date: NaiveDate,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Investment {
    /// Absolute gain over the buy price.
    pub fn gain_loss(&self) -> f64 {
        (self.current_price - self.buy_price) * self.quantity
    }

    /// Percentage gain over the buy price.
    pub fn gain_loss_percentage(&self) -> f64 {
        (self.current_price - self.buy_price) / self.buy_price * 100.0
    }
}

/// Input model for creating a new investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub symbol: Option<String>,
    pub quantity: f64,
    pub buy_price: f64,
    pub current_price: f64,
    pub buy_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewInvestment {
    /// Form-layer validation. The store itself accepts whatever it is given.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InvestmentError::InvalidData(
                "Investment name cannot be empty".to_string(),
            ));
        }
        if self.quantity <= 0.0 {
            return Err(InvestmentError::InvalidData(
                "Quantity must be positive".to_string(),
            ));
        }
        if self.buy_price <= 0.0 || self.current_price <= 0.0 {
            return Err(InvestmentError::InvalidData(
                "Prices must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Patch for an existing investment; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl InvestmentUpdate {
    /// Merges the present fields into `investment`.
    pub fn apply_to(&self, investment: &mut Investment) {
        if let Some(name) = &self.name {
            investment.name = name.clone();
        }
        if let Some(investment_type) = self.investment_type {
            investment.investment_type = investment_type;
        }
        if let Some(symbol) = &self.symbol {
            investment.symbol = Some(symbol.clone());
        }
        if let Some(quantity) = self.quantity {
            investment.quantity = quantity;
        }
        if let Some(buy_price) = self.buy_price {
            investment.buy_price = buy_price;
        }
        if let Some(current_price) = self.current_price {
            investment.current_price = current_price;
        }
        if let Some(buy_date) = self.buy_date {
            investment.buy_date = buy_date;
        }
        if let Some(notes) = &self.notes {
            investment.notes = Some(notes.clone());
        }
    }
}

/// Aggregate valuation of the whole collection. Derived on every read, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub investments: Vec<Investment>,
    pub total_invested: f64,
    pub current_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percentage: f64,
}

/// One top-performer row: the holding plus its computed gains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPerformance {
    #[serde(flatten)]
    pub investment: Investment,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}
