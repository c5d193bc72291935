//! Payment vocabulary types.

use serde::{Deserialize, Serialize};

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Mpesa,
    AirtelMoney,
}

impl PaymentMethod {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Mpesa => "M-Pesa",
            Self::AirtelMoney => "Airtel Money",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "mpesa" | "m-pesa" => Ok(Self::Mpesa),
            "airtel" | "airtel_money" | "airtel money" => Ok(Self::AirtelMoney),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Settled payment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    /// Transaction id issued by the gateway.
    pub payment_id: String,
}
