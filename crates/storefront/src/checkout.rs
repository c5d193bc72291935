//! Checkout: quote math and the cart → payment → order flow.
//!
//! Order creation is all-or-nothing. The gateway is charged first; only an
//! approved charge places the order (with payment already confirmed) and
//! clears the cart. A declined charge leaves the cart exactly as it was and
//! creates nothing.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use stride_core::{
    CartService, OrderDraft, OrderError, OrderId, OrderService, OrderStatus, PaymentDetails,
};

use crate::config::StorefrontConfig;
use crate::payment::{PaymentError, PaymentGateway};

/// Errors from the checkout flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// The gateway refused the charge; no order was created.
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    /// The order store rejected the placement.
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Priced order summary shown to the customer before payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuote {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Pricing policy applied at checkout: a flat shipping fee plus a tax rate
/// on the cart subtotal.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutPolicy {
    pub shipping_fee: Decimal,
    pub tax_rate: Decimal,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            shipping_fee: Decimal::new(300, 0),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

impl CheckoutPolicy {
    /// Policy from the loaded configuration.
    #[must_use]
    pub const fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            shipping_fee: config.shipping_fee,
            tax_rate: config.tax_rate,
        }
    }

    /// Price the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to price.
    pub fn quote(&self, cart: &CartService) -> Result<OrderQuote, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal = cart.subtotal();
        let tax = subtotal * self.tax_rate;
        Ok(OrderQuote {
            subtotal,
            shipping: self.shipping_fee,
            tax,
            total: subtotal + self.shipping_fee + tax,
        })
    }

    /// Run the full checkout: charge the gateway, place the order with
    /// payment confirmed, clear the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart and
    /// [`CheckoutError::Payment`] when the charge is declined - in both
    /// cases the cart and order store are untouched.
    #[instrument(skip(self, cart, orders, gateway))]
    pub async fn checkout<G: PaymentGateway>(
        &self,
        cart: &mut CartService,
        orders: &mut OrderService,
        gateway: &G,
    ) -> Result<OrderId, CheckoutError> {
        let quote = self.quote(cart)?;
        tracing::info!(total = %quote.total, "charging payment gateway");

        let receipt = gateway.charge(quote.total).await?;

        let id = orders.place_order(OrderDraft {
            items: cart.lines().to_vec(),
            total_price: quote.total,
            shipping: quote.shipping,
            tax: quote.tax,
            payment: Some(PaymentDetails {
                method: receipt.method,
                payment_id: receipt.payment_id,
            }),
            initial_status: OrderStatus::PaymentConfirmed,
        })?;

        cart.clear();
        tracing::info!(order_id = %id, "checkout complete, cart cleared");
        Ok(id)
    }
}

/// Confirm payment on an existing order and clear the customer's cart.
///
/// # Errors
///
/// Propagates [`OrderError`] from the store; the cart is cleared only when
/// the status change succeeded.
pub fn mark_order_paid(
    orders: &mut OrderService,
    cart: &mut CartService,
    id: OrderId,
) -> Result<(), OrderError> {
    orders.mark_paid(id)?;
    cart.clear();
    Ok(())
}
