//! Cart panel and checkout overlay
//!
//! The panel owns the session cart and the overlay state machine:
//! browsing the item rows, the optional contact-info step, and the
//! checkout result dialog. The overlay always re-renders from cart state;
//! removals close and reopen it rather than patching rows in place.

use tui_input::Input;

use shared::{Cart, CartItem, ContactInfo, MenuItem, OrderConfirmation, OrderSubmission};
use tavola_client::ClientResult;

use crate::utils::price::format_usd;

pub const EMPTY_CART_MSG: &str = "Your cart is empty";
pub const ORDER_RETRY_MSG: &str = "Error creating order. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Phone,
            ContactField::Phone => ContactField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your name (optional)",
            ContactField::Email => "Your email (optional)",
            ContactField::Phone => "Your phone (optional)",
        }
    }
}

/// Inline replacement for the serial contact prompts: one form step,
/// every field optional and defaulting to empty.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: Input,
    pub email: Input,
    pub phone: Input,
    pub focus: Option<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            focus: Some(ContactField::Name),
            ..Self::default()
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus? {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
        }
    }

    pub fn info(&self) -> ContactInfo {
        ContactInfo {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            phone: self.phone.value().to_string(),
        }
    }
}

/// Blocking-dialog replacement shown after a checkout attempt
#[derive(Debug, Clone)]
pub struct CheckoutDialog {
    pub message: String,
    pub success: bool,
}

#[derive(Debug)]
pub enum OverlayStage {
    /// Item rows, total and the checkout control
    Items,
    /// Contact collection before the order request goes out
    Contact(ContactForm),
    /// Result dialog; dismissing it closes the overlay on success and
    /// returns to the rows otherwise
    Dialog(CheckoutDialog),
}

/// One overlay instance; at most one exists at a time
#[derive(Debug)]
pub struct CartOverlay {
    pub selected: usize,
    pub stage: OverlayStage,
}

impl CartOverlay {
    fn new() -> Self {
        Self {
            selected: 0,
            stage: OverlayStage::Items,
        }
    }
}

/// Cart state plus overlay lifecycle
#[derive(Debug, Default)]
pub struct CartPanel {
    pub cart: Cart,
    overlay: Option<CartOverlay>,
}

impl CartPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item count shown in the header badge
    pub fn badge(&self) -> usize {
        self.cart.len()
    }

    /// Add a menu item to the cart; returns the alert text
    pub fn add(&mut self, item: &MenuItem) -> String {
        self.cart
            .add_item(CartItem::new(item.id, item.name.clone(), item.price));
        format!("{} added to your order!", item.name)
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn overlay(&self) -> Option<&CartOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut CartOverlay> {
        self.overlay.as_mut()
    }

    /// Open a freshly rendered overlay over the current cart state
    pub fn open(&mut self) {
        self.overlay = Some(CartOverlay::new());
    }

    pub fn close(&mut self) {
        self.overlay = None;
    }

    pub fn select_next(&mut self) {
        let len = self.cart.len();
        if let Some(overlay) = self.overlay.as_mut()
            && len > 0
        {
            overlay.selected = (overlay.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.cart.len();
        if let Some(overlay) = self.overlay.as_mut()
            && len > 0
        {
            overlay.selected = (overlay.selected + len - 1) % len;
        }
    }

    /// Remove the selected row, then close and reopen the overlay so the
    /// rows are rebuilt from the updated cart.
    pub fn remove_selected(&mut self) {
        let Some(overlay) = self.overlay.as_ref() else {
            return;
        };
        let index = overlay.selected;
        if self.cart.remove_item(index).is_none() {
            tracing::warn!(index, "Ignoring cart removal with out-of-range index");
            return;
        }
        self.close();
        self.open();
    }

    /// Move from the item rows to the contact-info step
    pub fn begin_checkout(&mut self) {
        if let Some(overlay) = self.overlay.as_mut()
            && matches!(overlay.stage, OverlayStage::Items)
        {
            overlay.stage = OverlayStage::Contact(ContactForm::new());
        }
    }

    /// Abandon the contact step without touching the cart
    pub fn cancel_checkout(&mut self) {
        if let Some(overlay) = self.overlay.as_mut()
            && matches!(overlay.stage, OverlayStage::Contact(_))
        {
            overlay.stage = OverlayStage::Items;
        }
    }

    /// Take the contact details and build the order payload; one line per
    /// cart item, quantity always 1.
    pub fn take_submission(&mut self) -> Option<OrderSubmission> {
        let overlay = self.overlay.as_mut()?;
        let OverlayStage::Contact(form) = &overlay.stage else {
            return None;
        };
        let submission = OrderSubmission::from_cart(&self.cart, form.info());
        Some(submission)
    }

    /// Apply the checkout outcome. `total` is the cart total captured when
    /// the order was dispatched.
    ///
    /// A success clears the cart even when the overlay was closed while
    /// the order was in flight; the server accepted it, and a re-checkout
    /// from the stale cart would place the order twice.
    pub fn apply_order_outcome(&mut self, total: f64, result: ClientResult<OrderConfirmation>) {
        let dialog = match result {
            Ok(confirmation) if confirmation.success => {
                self.cart.clear();
                CheckoutDialog {
                    message: format!(
                        "Order #{} created successfully! Total: {}",
                        confirmation.order_id,
                        format_usd(total)
                    ),
                    success: true,
                }
            }
            Ok(confirmation) => CheckoutDialog {
                message: format!(
                    "Error creating order: {}",
                    confirmation.message.unwrap_or_default()
                ),
                success: false,
            },
            Err(e) => {
                tracing::error!("Error creating order: {}", e);
                CheckoutDialog {
                    message: ORDER_RETRY_MSG.to_string(),
                    success: false,
                }
            }
        };
        match self.overlay.as_mut() {
            Some(overlay) => overlay.stage = OverlayStage::Dialog(dialog),
            None if dialog.success => tracing::info!("{}", dialog.message),
            None => tracing::warn!("{}", dialog.message),
        }
    }

    /// Dismiss the result dialog; a success dialog closes the overlay,
    /// a failure returns to the item rows with the cart untouched.
    pub fn dismiss_dialog(&mut self) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        if let OverlayStage::Dialog(dialog) = &overlay.stage {
            if dialog.success {
                self.close();
            } else {
                overlay.selected = 0;
                overlay.stage = OverlayStage::Items;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_client::ClientError;

    fn panel_with_items() -> CartPanel {
        let mut panel = CartPanel::new();
        panel.add(&MenuItem::new(Some(1), "Bruschetta", "starters", 8.50));
        panel.add(&MenuItem::new(Some(4), "Risotto", "mains", 18.00));
        panel.add(&MenuItem::new(None, "Tiramisu", "desserts", 7.25));
        panel
    }

    #[test]
    fn add_reports_the_item_name() {
        let mut panel = CartPanel::new();
        let msg = panel.add(&MenuItem::new(Some(1), "Bruschetta", "starters", 8.50));
        assert_eq!(msg, "Bruschetta added to your order!");
        assert_eq!(panel.badge(), 1);
    }

    #[test]
    fn removing_reopens_a_fresh_overlay() {
        let mut panel = panel_with_items();
        panel.open();
        panel.select_next();
        panel.select_next();
        panel.remove_selected();

        assert_eq!(panel.badge(), 2);
        let overlay = panel.overlay().unwrap();
        assert_eq!(overlay.selected, 0);
        assert!(matches!(overlay.stage, OverlayStage::Items));
    }

    #[test]
    fn removing_index_zero_shifts_the_rest() {
        let mut panel = panel_with_items();
        panel.open();
        panel.remove_selected();

        let names: Vec<&str> = panel.cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Risotto", "Tiramisu"]);
        assert!((panel.cart.total() - 25.25).abs() < 1e-9);
    }

    #[test]
    fn removal_from_an_empty_cart_is_a_noop() {
        let mut panel = CartPanel::new();
        panel.open();
        panel.remove_selected();
        assert!(panel.is_open());
        assert_eq!(panel.badge(), 0);
    }

    #[test]
    fn empty_cart_still_reaches_the_contact_step() {
        let mut panel = CartPanel::new();
        panel.open();
        panel.begin_checkout();
        let submission = panel.take_submission().unwrap();
        assert!(submission.items.is_empty());
    }

    #[test]
    fn submission_carries_contact_info_and_unit_quantities() {
        let mut panel = panel_with_items();
        panel.open();
        panel.begin_checkout();
        if let Some(overlay) = panel.overlay_mut()
            && let OverlayStage::Contact(form) = &mut overlay.stage
        {
            form.name = Input::new("Ada".into());
        }

        let submission = panel.take_submission().unwrap();
        assert_eq!(submission.customer_name, "Ada");
        assert_eq!(submission.customer_email, "");
        assert_eq!(submission.items.len(), 3);
        assert!(submission.items.iter().all(|l| l.quantity == 1));
        assert_eq!(submission.items[2].id, 0);
    }

    #[test]
    fn successful_checkout_clears_the_cart_and_closes_on_dismiss() {
        let mut panel = panel_with_items();
        let total = panel.cart.total();
        panel.open();
        panel.begin_checkout();

        panel.apply_order_outcome(
            total,
            Ok(OrderConfirmation {
                success: true,
                order_id: 42,
                message: None,
            }),
        );

        assert!(panel.cart.is_empty());
        assert_eq!(panel.badge(), 0);
        if let OverlayStage::Dialog(dialog) = &panel.overlay().unwrap().stage {
            assert!(dialog.success);
            assert_eq!(
                dialog.message,
                "Order #42 created successfully! Total: $33.75"
            );
        } else {
            panic!("expected dialog stage");
        }

        panel.dismiss_dialog();
        assert!(!panel.is_open());
    }

    #[test]
    fn rejected_checkout_leaves_the_cart_untouched() {
        let mut panel = panel_with_items();
        let total = panel.cart.total();
        panel.open();
        panel.begin_checkout();

        panel.apply_order_outcome(
            total,
            Ok(OrderConfirmation {
                success: false,
                order_id: 0,
                message: Some("Kitchen closed".into()),
            }),
        );

        assert_eq!(panel.badge(), 3);
        assert!((panel.cart.total() - total).abs() < 1e-9);
        if let OverlayStage::Dialog(dialog) = &panel.overlay().unwrap().stage {
            assert!(!dialog.success);
            assert_eq!(dialog.message, "Error creating order: Kitchen closed");
        } else {
            panic!("expected dialog stage");
        }

        panel.dismiss_dialog();
        assert!(panel.is_open());
        assert_eq!(panel.badge(), 3);
    }

    #[test]
    fn success_arriving_after_close_still_clears_the_cart() {
        let mut panel = panel_with_items();
        let total = panel.cart.total();
        panel.open();
        panel.begin_checkout();

        // User backs out and closes while the order is in flight
        panel.cancel_checkout();
        panel.close();

        panel.apply_order_outcome(
            total,
            Ok(OrderConfirmation {
                success: true,
                order_id: 7,
                message: None,
            }),
        );

        assert!(panel.cart.is_empty());
        assert_eq!(panel.badge(), 0);
        assert!(!panel.is_open());
    }

    #[test]
    fn failure_arriving_after_close_leaves_the_cart_alone() {
        let mut panel = panel_with_items();
        let total = panel.cart.total();
        panel.open();
        panel.begin_checkout();
        panel.cancel_checkout();
        panel.close();

        panel.apply_order_outcome(total, Err(ClientError::InvalidResponse("boom".into())));

        assert_eq!(panel.badge(), 3);
        assert!(!panel.is_open());
    }

    #[test]
    fn transport_failure_shows_the_retry_dialog() {
        let mut panel = panel_with_items();
        let total = panel.cart.total();
        panel.open();
        panel.begin_checkout();

        panel.apply_order_outcome(total, Err(ClientError::InvalidResponse("boom".into())));

        assert_eq!(panel.badge(), 3);
        if let OverlayStage::Dialog(dialog) = &panel.overlay().unwrap().stage {
            assert_eq!(dialog.message, ORDER_RETRY_MSG);
        } else {
            panic!("expected dialog stage");
        }
    }
}
