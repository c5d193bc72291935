//! Scripted shopping session against the simulated payment gateway.
//!
//! Mirrors a real visit: browse the catalog through a filter, fill the cart,
//! get a quote, pay through the randomized gateway, and - on approval - end
//! up with a confirmed order, an empty cart, and a payment notification. A
//! declined payment leaves the cart intact for another try.

use stride_admin::persist as order_persist;
use stride_core::{CartService, PaymentMethod};
use stride_storefront::catalog::{ProductFilter, SortOption};
use stride_storefront::checkout::{CheckoutError, CheckoutPolicy};
use stride_storefront::payment::SimulatedGateway;
use stride_storefront::persist as cart_persist;

use super::{CommandError, config, products_path, seed};

/// Run the demo session.
///
/// # Errors
///
/// Returns [`CommandError`] for bad arguments or persistence failures. A
/// declined payment is a normal outcome, not an error.
pub async fn run(method: &str) -> Result<(), CommandError> {
    let config = config()?;
    let method: PaymentMethod = method.parse().map_err(CommandError::InvalidArgument)?;

    let products = seed::load_or_sample(&products_path(&config));

    // Browse: best-selling running shoes.
    let mut filter = ProductFilter::new();
    filter.toggle_category("running");
    filter.sort = SortOption::BestSelling;
    let picks = filter.apply(&products);
    println!("Browsing {} running shoes (of {} total)", picks.len(), products.len());

    let Some(first) = picks.first().cloned() else {
        println!("Catalog is empty - run `stride seed` first");
        return Ok(());
    };
    let second = picks.get(1).cloned();

    // Fill the cart.
    let mut cart = CartService::new();
    cart.add(first.clone(), "9", 2)?;
    println!("Added 2 x {} (size 9)", first.name);
    if let Some(product) = second {
        cart.add(product.clone(), "10", 1)?;
        println!("Added 1 x {} (size 10)", product.name);
    }

    // Quote and pay.
    let policy = CheckoutPolicy::from_config(&config);
    let quote = policy
        .quote(&cart)
        .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
    println!(
        "Subtotal Ksh {} + shipping Ksh {} + tax Ksh {} = Ksh {}",
        quote.subtotal, quote.shipping, quote.tax, quote.total
    );
    println!("Paying with {method}...");

    let mut orders = order_persist::load_orders(&config.order_store_path())?;
    let gateway = SimulatedGateway::new(method);

    match policy.checkout(&mut cart, &mut orders, &gateway).await {
        Ok(id) => {
            println!("Payment approved - order #{id} confirmed");
            if let Some(payment) = orders.order(id).and_then(|order| order.payment.as_ref()) {
                println!("Transaction {} via {}", payment.payment_id, payment.method);
            }
            println!("Cart is now empty: {}", cart.is_empty());
            for notification in orders.notifications_for_order(id) {
                println!("[{}] {}", notification.kind, notification.message);
            }
        }
        Err(CheckoutError::Payment(_)) => {
            println!("Payment failed - your cart is untouched, try again");
        }
        Err(e) => return Err(CommandError::InvalidArgument(e.to_string())),
    }

    cart_persist::save_cart(&cart, &config.cart_store_path())?;
    order_persist::save_orders(&orders, &config.order_store_path())?;
    Ok(())
}
