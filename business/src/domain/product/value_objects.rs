use serde::{Deserialize, Serialize};

/// Catalog identifier for a product.
/// Assigned by the repository on creation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A non-negative unit price in euros.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting negative or non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, String> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("Invalid price: {}", amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .parse::<f64>()
            .map_err(|_| format!("Invalid price: {}", s))?;
        Price::new(amount)
    }
}

/// Stock availability label derived from the quantity on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Rupture,
    Faible,
    EnStock,
}

impl StockStatus {
    /// Thresholds: 0 is out of stock, below 20 is low, 20 and up is in stock.
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::Rupture
        } else if quantity < 20 {
            StockStatus::Faible
        } else {
            StockStatus::EnStock
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Rupture => write!(f, "Rupture"),
            StockStatus::Faible => write!(f, "Faible"),
            StockStatus::EnStock => write!(f, "En stock"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rupture" => Ok(StockStatus::Rupture),
            "Faible" => Ok(StockStatus::Faible),
            "En stock" => Ok(StockStatus::EnStock),
            _ => Err(format!("Invalid stock status: {}", s)),
        }
    }
}
