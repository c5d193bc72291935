//! Payment gateway contract and the simulated backend.
//!
//! The checkout flow only ever talks to the [`PaymentGateway`] trait, so the
//! nondeterministic simulation stays swappable for a deterministic double in
//! tests. There is no real gateway: [`SimulatedGateway`] waits a fixed delay
//! and then approves with a configured probability.

use std::time::Duration;

use rand::Rng;
use rand::distr::Alphanumeric;
use rust_decimal::Decimal;
use thiserror::Error;

use stride_core::PaymentMethod;

/// Fixed processing delay of the simulated gateway.
const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Approval probability of the simulated gateway.
const SIMULATED_SUCCESS_RATE: f64 = 0.9;

/// Length of generated transaction ids.
const TRANSACTION_ID_LEN: usize = 8;

/// Errors from a payment attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The gateway declined the charge. No order may be created.
    #[error("payment was declined")]
    Declined,
}

/// Successful charge result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Transaction id issued by the gateway.
    pub payment_id: String,
    pub method: PaymentMethod,
}

/// A payment backend the checkout flow can charge against.
pub trait PaymentGateway {
    /// Attempt to charge `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Declined`] when the charge is refused.
    fn charge(
        &self,
        amount: Decimal,
    ) -> impl Future<Output = Result<PaymentReceipt, PaymentError>> + Send;
}

/// The randomized payment simulation.
///
/// Sleeps [`SIMULATED_DELAY`], then approves with probability
/// [`SIMULATED_SUCCESS_RATE`], yielding an uppercase alphanumeric
/// transaction id.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    method: PaymentMethod,
    success_rate: f64,
    delay: Duration,
}

impl SimulatedGateway {
    /// Gateway for the given payment method with the standard simulation
    /// parameters.
    #[must_use]
    pub const fn new(method: PaymentMethod) -> Self {
        Self {
            method,
            success_rate: SIMULATED_SUCCESS_RATE,
            delay: SIMULATED_DELAY,
        }
    }

    /// Override the approval probability. Values outside `0.0..=1.0` are
    /// clamped.
    #[must_use]
    pub fn with_success_rate(mut self, success_rate: f64) -> Self {
        self.success_rate = success_rate.clamp(0.0, 1.0);
        self
    }

    /// Override the processing delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        let approved = rand::rng().random_bool(self.success_rate);
        if approved {
            let receipt = PaymentReceipt {
                payment_id: transaction_id(),
                method: self.method,
            };
            tracing::info!(payment_id = %receipt.payment_id, %amount, "payment approved");
            Ok(receipt)
        } else {
            tracing::warn!(%amount, "payment declined");
            Err(PaymentError::Declined)
        }
    }
}

/// Deterministic gateway for tests and scripted demos.
#[derive(Debug, Clone)]
pub struct StaticGateway {
    approve: bool,
    method: PaymentMethod,
}

impl StaticGateway {
    /// Gateway that approves every charge.
    #[must_use]
    pub const fn approving(method: PaymentMethod) -> Self {
        Self {
            approve: true,
            method,
        }
    }

    /// Gateway that declines every charge.
    #[must_use]
    pub const fn declining() -> Self {
        Self {
            approve: false,
            method: PaymentMethod::Card,
        }
    }
}

impl PaymentGateway for StaticGateway {
    async fn charge(&self, _amount: Decimal) -> Result<PaymentReceipt, PaymentError> {
        if self.approve {
            Ok(PaymentReceipt {
                payment_id: "STATIC01".to_string(),
                method: self.method,
            })
        } else {
            Err(PaymentError::Declined)
        }
    }
}

/// Generate an uppercase alphanumeric transaction id.
fn transaction_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TRANSACTION_ID_LEN)
        .map(|byte| char::from(byte).to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn transaction_ids_are_short_uppercase_alphanumeric() {
        for _ in 0..50 {
            let id = transaction_id();
            assert_eq!(id.len(), TRANSACTION_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn forced_approval_yields_receipt_with_method() {
        let gateway = SimulatedGateway::new(PaymentMethod::Mpesa).with_success_rate(1.0);
        let receipt = gateway.charge(Decimal::new(4620, 0)).await.unwrap();
        assert_eq!(receipt.method, PaymentMethod::Mpesa);
        assert_eq!(receipt.payment_id.len(), TRANSACTION_ID_LEN);
    }

    #[tokio::test(start_paused = true)]
    async fn forced_decline_is_an_error() {
        let gateway = SimulatedGateway::new(PaymentMethod::Card).with_success_rate(0.0);
        assert_eq!(
            gateway.charge(Decimal::new(100, 0)).await,
            Err(PaymentError::Declined)
        );
    }

    #[tokio::test]
    async fn static_gateway_is_deterministic() {
        let approve = StaticGateway::approving(PaymentMethod::AirtelMoney);
        assert!(approve.charge(Decimal::ONE).await.is_ok());

        let decline = StaticGateway::declining();
        assert_eq!(
            decline.charge(Decimal::ONE).await,
            Err(PaymentError::Declined)
        );
    }
}
