//! FastBite CLI - order food from the terminal.
//!
//! A thin adapter over `fastbite-storefront`: it maps subcommands onto
//! session operations and prints the rendered cart rows. All state lives in
//! the storefront library and its local store.
//!
//! # Usage
//!
//! ```bash
//! # Build a cart
//! fastbite add "Paneer Tikka" 250.00
//! fastbite combo
//! fastbite show
//! fastbite remove 0
//!
//! # Order
//! fastbite signin asha@example.com --password hunter2aa
//! fastbite checkout --name Asha --phone 9876543210 \
//!     --address "12 MG Road" --payment cod
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use fastbite_storefront::api::ContactMessage;
use fastbite_storefront::checkout::DeliveryDetails;
use fastbite_storefront::notify::Notifier;
use fastbite_storefront::session::StorefrontSession;
use fastbite_storefront::view::CartPage;
use rust_decimal::Decimal;

/// The hero banner's one-click order.
const COMBO_NAME: &str = "Chef's Special Combo";
const COMBO_PRICE: Decimal = Decimal::from_parts(1499, 0, 0, false, 2);

#[derive(Parser)]
#[command(name = "fastbite")]
#[command(author, version, about = "FastBite storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a dish to the cart
    Add {
        /// Dish name
        name: String,
        /// Unit price
        price: Decimal,
    },
    /// Add the Chef's Special Combo to the cart
    Combo,
    /// Remove a cart row by its displayed index
    Remove {
        /// Row index as shown by `show`
        index: usize,
    },
    /// Show the cart
    Show,
    /// Place the order for the current cart
    Checkout {
        /// Delivery name
        #[arg(long)]
        name: Option<String>,
        /// Delivery phone number
        #[arg(long)]
        phone: Option<String>,
        /// Delivery address
        #[arg(long)]
        address: Option<String>,
        /// Payment method (e.g. cod, upi, card)
        #[arg(long)]
        payment: Option<String>,
    },
    /// Sign in to an existing account
    Signin {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        /// Display name
        name: String,
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },
    /// Sign out
    Signout,
    /// Send a message to the restaurant
    Contact {
        /// Your name
        name: String,
        /// Your email
        email: String,
        /// Subject line
        subject: String,
        /// Message body
        message: String,
    },
}

/// Notifier that prints toasts straight to the terminal.
#[derive(Debug, Clone, Copy, Default)]
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    #[allow(clippy::print_stdout)]
    fn notify(&self, message: &str) {
        println!("» {message}");
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = StorefrontSession::from_env(Box::new(TerminalNotifier))?;
    execute(cli.command, &mut session).await
}

/// Failures bubble up so the process exits nonzero; the session has already
/// toasted the user-facing message by the time they do.
async fn execute(
    command: Commands,
    session: &mut StorefrontSession,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Add { name, price } => {
            session.add_item(&name, price);
            print_badge(session);
        }
        Commands::Combo => {
            session.add_item(COMBO_NAME, COMBO_PRICE);
            print_badge(session);
        }
        Commands::Remove { index } => {
            session.remove_item(index);
            print_page(&session.cart_page());
        }
        Commands::Show => {
            print_page(&session.cart_page());
        }
        Commands::Checkout {
            name,
            phone,
            address,
            payment,
        } => {
            let details = delivery_details(name, phone, address, payment);
            match session.checkout(details.as_ref()).await {
                Ok(()) => print_confirmation(session),
                Err(err) => {
                    if let Some(target) = err.redirect {
                        print_redirect(target);
                    }
                    // The toast already described the failure.
                    return Err(err.into());
                }
            }
        }
        Commands::Signin { email, password } => {
            session.sign_in(&email, &password).await?;
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            session.sign_up(&name, &email, &password, &confirm).await?;
        }
        Commands::Signout => {
            session.sign_out();
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            session
                .send_message(ContactMessage {
                    name,
                    email,
                    subject,
                    message,
                })
                .await?;
        }
    }

    Ok(())
}

/// An order form is "present" as soon as any field is given; missing fields
/// then fail validation exactly like blank inputs would.
fn delivery_details(
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    payment: Option<String>,
) -> Option<DeliveryDetails> {
    if name.is_none() && phone.is_none() && address.is_none() && payment.is_none() {
        return None;
    }
    Some(DeliveryDetails {
        name: name.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        address: address.unwrap_or_default(),
        payment: payment.unwrap_or_default(),
    })
}

#[allow(clippy::print_stdout)]
fn print_badge(session: &StorefrontSession) {
    println!("Cart: {} item(s)", session.cart_count());
}

#[allow(clippy::print_stdout)]
fn print_page(page: &CartPage) {
    if page.is_empty {
        println!("Your cart is empty.");
    } else {
        for row in &page.rows {
            println!(
                "[{}] {:<28} x{:<3} {}",
                row.index, row.name, row.quantity, row.line_total
            );
        }
    }
    println!("Total: {}", page.total);
}

#[allow(clippy::print_stdout)]
fn print_confirmation(session: &StorefrontSession) {
    if session.order_confirmed() {
        println!("Your order is confirmed. We'll start cooking right away.");
    }
}

#[allow(clippy::print_stdout)]
fn print_redirect(target: &str) {
    println!("Sign in at {target} and try again.");
}
