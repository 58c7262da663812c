//! The storefront session: single owner of in-memory state.
//!
//! `StorefrontSession` replaces the page-global cart variable of a browser
//! storefront with one explicitly owned object. It loads the cart from the
//! local store at startup, mirrors every mutation back into the store, and
//! drives the checkout, auth, and contact flows. Every flow that can fail
//! surfaces exactly one toast through the configured [`Notifier`] before
//! returning its error.

use fastbite_core::{AccessToken, Email};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::api::{ApiClient, ApiError, ContactMessage, OrderItem};
use crate::cart::Cart;
use crate::checkout::{CheckoutError, CheckoutState, DeliveryDetails};
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::notify::Notifier;
use crate::store::LocalStore;
use crate::view::CartPage;

/// A single user session over the storefront.
///
/// Single-threaded and event-driven: callers invoke one operation at a
/// time, each runs to completion, and network calls are the only suspension
/// points. Exclusive access (`&mut self`) makes the operations atomic with
/// respect to each other.
pub struct StorefrontSession {
    config: StorefrontConfig,
    store: LocalStore,
    api: ApiClient,
    notifier: Box<dyn Notifier>,
    cart: Cart,
    checkout_state: CheckoutState,
    order_confirmed: bool,
}

impl StorefrontSession {
    /// Open a session: build the API client and load the persisted cart
    /// (empty if absent or corrupt).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: StorefrontConfig, notifier: Box<dyn Notifier>) -> Result<Self, AppError> {
        let store = LocalStore::open(config.data_dir.clone());
        let api = ApiClient::new(config.api_base_url.clone())?;
        let cart = store.load_cart();

        Ok(Self {
            config,
            store,
            api,
            notifier,
            cart,
            checkout_state: CheckoutState::Idle,
            order_confirmed: false,
        })
    }

    /// Open a session configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the HTTP client
    /// fails to build.
    pub fn from_env(notifier: Box<dyn Notifier>) -> Result<Self, AppError> {
        Self::new(StorefrontConfig::from_env()?, notifier)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a dish, persist, and confirm with a toast.
    pub fn add_item(&mut self, name: &str, price: Decimal) {
        self.cart.add_item(name, price);
        self.store.save_cart(&self.cart);
        self.notifier.notify(&format!("{name} added to cart."));
    }

    /// Remove the cart row at `index`; out-of-range is a silent no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.cart.remove_item(index) {
            self.store.save_cart(&self.cart);
            true
        } else {
            false
        }
    }

    /// Empty the cart and persist the empty state.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.store.save_cart(&self.cart);
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Units in the cart; what the count badge shows.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Render the cart into display rows in the configured currency.
    #[must_use]
    pub fn cart_page(&self) -> CartPage {
        CartPage::render(&self.cart, self.config.currency)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Where the last checkout attempt got to.
    #[must_use]
    pub const fn checkout_state(&self) -> CheckoutState {
        self.checkout_state
    }

    /// Whether the order-confirmation element should be revealed.
    #[must_use]
    pub const fn order_confirmed(&self) -> bool {
        self.order_confirmed
    }

    /// Place the order for the current cart.
    ///
    /// Runs the local guards (non-empty cart, complete delivery details
    /// when a form is present, stored token), then submits the cart to the
    /// order endpoint. On success the cart is cleared in memory and in the
    /// store, and the confirmation flag is set. On any failure the cart is
    /// preserved so the user can retry.
    ///
    /// A call while a previous submission is still awaiting its response is
    /// rejected with [`crate::checkout::CheckoutErrorKind::Busy`] and issues
    /// no second request. That submission can only still be pending if its
    /// future was dropped before resolving, so the rejection also moves the
    /// state to `Failed`; the attempt after it runs normally.
    ///
    /// # Errors
    ///
    /// Returns the [`CheckoutError`] describing the rejection; its message
    /// has already been surfaced as a toast.
    #[instrument(skip(self, details))]
    pub async fn checkout(
        &mut self,
        details: Option<&DeliveryDetails>,
    ) -> Result<(), CheckoutError> {
        if self.checkout_state == CheckoutState::Submitting {
            // The pending submission was abandoned at its await point; its
            // outcome is unknown, so reject once and let the next call run.
            self.checkout_state = CheckoutState::Failed;
            let err = CheckoutError::busy();
            self.notifier.notify(&err.message);
            return Err(err);
        }

        self.order_confirmed = false;
        self.checkout_state = CheckoutState::Validating;

        if self.cart.is_empty() {
            return Err(self.fail(CheckoutError::empty_cart()));
        }
        if let Some(details) = details {
            if !details.is_complete() {
                return Err(self.fail(CheckoutError::missing_details()));
            }
        }
        let Some(token) = self.store.load_token() else {
            return Err(self.fail(CheckoutError::not_signed_in()));
        };

        self.checkout_state = CheckoutState::Submitting;
        let items: Vec<OrderItem> = self
            .cart
            .items()
            .iter()
            .map(|item| OrderItem {
                name: item.name.clone(),
                quantity: item.qty,
                price: item.price,
            })
            .collect();

        let result = self.api.create_order(&token, &items).await;
        match result {
            Ok(()) => {
                self.checkout_state = CheckoutState::Success;
                self.cart.clear();
                self.store.save_cart(&self.cart);
                self.order_confirmed = true;
                self.notifier.notify("Order placed successfully!");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "order submission failed");
                Err(self.fail(CheckoutError::from_api(&err)))
            }
        }
    }

    /// Move to `Failed` and surface the rejection as a toast.
    fn fail(&mut self, err: CheckoutError) -> CheckoutError {
        self.checkout_state = CheckoutState::Failed;
        self.notifier.notify(&err.message);
        err
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Whether a token is currently stored.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.store.load_token().is_some()
    }

    /// Sign in and store the returned token.
    ///
    /// # Errors
    ///
    /// Returns the failure after surfacing it as a toast: a locally
    /// rejected email, a server rejection (its extracted message), or a
    /// transport failure.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let email = self.parse_email(email)?;
        let result = self.api.login(&email, password).await;
        match result {
            Ok(auth) => {
                self.store_auth(auth.token);
                self.notifier.notify("Signed in successfully.");
                Ok(())
            }
            Err(err) => Err(self.fail_api(err)),
        }
    }

    /// Create an account and store the returned token.
    ///
    /// The confirmation password is checked locally before anything is
    /// sent, mirroring the sign-up form.
    ///
    /// # Errors
    ///
    /// As [`Self::sign_in`], plus [`AppError::PasswordMismatch`] when the
    /// confirmation differs.
    #[instrument(skip(self, password, confirm))]
    pub async fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), AppError> {
        if password != confirm {
            let err = AppError::PasswordMismatch;
            self.notifier.notify(&err.to_string());
            return Err(err);
        }

        let email = self.parse_email(email)?;
        let result = self.api.signup(name.trim(), &email, password).await;
        match result {
            Ok(auth) => {
                self.store_auth(auth.token);
                self.notifier.notify("Account created.");
                Ok(())
            }
            Err(err) => Err(self.fail_api(err)),
        }
    }

    /// Forget the stored token.
    pub fn sign_out(&mut self) {
        self.store.clear_token();
        self.notifier.notify("Signed out.");
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Send a contact message; the stored token is attached when present.
    ///
    /// # Errors
    ///
    /// Returns the failure after surfacing it as a toast.
    #[instrument(skip(self, message))]
    pub async fn send_message(&mut self, message: ContactMessage) -> Result<(), AppError> {
        let message = message.trimmed();
        let token = self.store.load_token();
        let result = self.api.send_message(token.as_ref(), &message).await;
        match result {
            Ok(()) => {
                self.notifier
                    .notify("Thank you! Your message has been received.");
                Ok(())
            }
            Err(err) => Err(self.fail_api(err)),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn parse_email(&self, raw: &str) -> Result<Email, AppError> {
        Email::parse(raw).map_err(|err| {
            self.notifier.notify(&err.to_string());
            AppError::Email(err)
        })
    }

    fn store_auth(&mut self, token: Option<String>) {
        if let Some(token) = token {
            self.store.save_token(&AccessToken::new(token));
        }
    }

    /// Toast an API failure: server rejections verbatim, transport failures
    /// as a generic message.
    fn fail_api(&mut self, err: ApiError) -> AppError {
        match &err {
            ApiError::Server { message, .. } => self.notifier.notify(message),
            ApiError::Http(_) | ApiError::BaseUrl(_) => {
                self.notifier.notify("Network error. Please try again.");
            }
        }
        AppError::Api(err)
    }
}
