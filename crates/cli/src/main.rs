//! Stride CLI - Drive the store from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Write the sample product catalog into the data directory
//! stride seed
//!
//! # Run a scripted shopping session (cart, simulated payment, checkout)
//! stride demo
//!
//! # Manage orders
//! stride orders list --status shipped
//! stride orders show 1754640000000
//! stride orders set-status 1754640000000 shipped --note "Left warehouse"
//! stride orders add-note 1754640000000 "Fragile box" --customer-visible
//! stride orders mark-paid 1754640000000
//!
//! # Manage notifications
//! stride notifications list --unread
//! stride notifications mark-all-read
//! stride notifications clear
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the sample product catalog
//! - `demo` - Run a scripted shopping session against the simulated gateway
//! - `orders` - List and mutate orders
//! - `notifications` - List and manage the notification feed

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output is the CLI's product; it goes to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stride")]
#[command(author, version, about = "Stride store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample product catalog into the data directory
    Seed,
    /// Run a scripted shopping session with the simulated payment gateway
    Demo {
        /// Payment method to simulate (`card`, `mpesa`, `airtel`)
        #[arg(short, long, default_value = "card")]
        method: String,
    },
    /// List and mutate orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// List and manage notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Filter by status (e.g., `shipped`, "Pending Payment")
        #[arg(short, long)]
        status: Option<String>,

        /// Search order ids, product names, and brands
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Only orders placed on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only orders placed on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Page number (10 orders per page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one order with its history, notes, and notifications
    Show {
        /// Order id
        id: i64,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order id
        id: i64,

        /// Target status (e.g., `processing`, `out_for_delivery`)
        status: String,

        /// Note recorded on the status event
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Attach an admin note to an order
    AddNote {
        /// Order id
        id: i64,

        /// Note text
        text: String,

        /// Make the note visible to the customer
        #[arg(long)]
        customer_visible: bool,
    },
    /// Confirm payment on an order and clear the cart
    MarkPaid {
        /// Order id
        id: i64,
    },
}

#[derive(Subcommand)]
enum NotificationAction {
    /// List notifications
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark one notification as read
    MarkRead {
        /// Notification id
        id: String,
    },
    /// Mark every notification as read
    MarkAllRead,
    /// Remove one notification
    Remove {
        /// Notification id
        id: String,
    },
    /// Remove every notification
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "stride=info,stride_core=info,stride_storefront=info,stride_admin=info".into()
                }),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Demo { method } => commands::demo::run(&method).await?,
        Commands::Orders { action } => match action {
            OrderAction::List {
                status,
                search,
                from,
                to,
                page,
            } => commands::orders::list(
                status.as_deref(),
                search,
                from.as_deref(),
                to.as_deref(),
                page,
            )?,
            OrderAction::Show { id } => commands::orders::show(id)?,
            OrderAction::SetStatus { id, status, note } => {
                commands::orders::set_status(id, &status, note.as_deref())?;
            }
            OrderAction::AddNote {
                id,
                text,
                customer_visible,
            } => commands::orders::add_note(id, &text, customer_visible)?,
            OrderAction::MarkPaid { id } => commands::orders::mark_paid(id)?,
        },
        Commands::Notifications { action } => match action {
            NotificationAction::List { unread } => commands::notifications::list(unread)?,
            NotificationAction::MarkRead { id } => commands::notifications::mark_read(&id)?,
            NotificationAction::MarkAllRead => commands::notifications::mark_all_read()?,
            NotificationAction::Remove { id } => commands::notifications::remove(&id)?,
            NotificationAction::Clear => commands::notifications::clear()?,
        },
    }
    Ok(())
}
