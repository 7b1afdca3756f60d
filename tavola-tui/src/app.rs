//! Application state and event routing
//!
//! `App` is the composition root: it owns every component, routes key
//! input to whichever component has focus, and dispatches network calls
//! as background tasks. Each task sends exactly one [`UiEvent`] back over
//! the channel; outcomes are applied in arrival order on the UI loop.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

use shared::{ApiOutcome, Availability, OrderConfirmation};
use tavola_client::{ClientResult, RestaurantApi};

use crate::components::alerts::{AlertKind, AlertSlot};
use crate::components::cart::{CartPanel, OverlayStage};
use crate::components::menu_filter::MenuBoard;
use crate::components::navigation::{NavMenu, PageScroll};
use crate::components::newsletter::NewsletterForm;
use crate::components::reservation::{ReservationField, ReservationForm};
use crate::utils::time::current_year;

/// Completion of a background network call
#[derive(Debug)]
pub enum UiEvent {
    ReservationSubmitted(ClientResult<ApiOutcome>),
    AvailabilityChecked {
        seq: u64,
        result: ClientResult<Availability>,
    },
    OrderPlaced {
        /// Cart total captured when the order was dispatched
        total: f64,
        result: ClientResult<OrderConfirmation>,
    },
    Subscribed(ClientResult<ApiOutcome>),
}

/// Which part of the page receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Browse,
    Reservation,
    Newsletter,
}

pub struct App {
    api: Arc<dyn RestaurantApi>,
    tx: mpsc::UnboundedSender<UiEvent>,
    rx: mpsc::UnboundedReceiver<UiEvent>,

    pub page: PageScroll,
    pub nav: NavMenu,
    pub menu: MenuBoard,
    pub reservation: ReservationForm,
    pub cart: CartPanel,
    pub newsletter: NewsletterForm,
    /// Alert slot anchored to the reservation form (also used by cart
    /// additions)
    pub form_alert: AlertSlot,
    /// Alert slot anchored to the newsletter form
    pub newsletter_alert: AlertSlot,
    /// Set once at startup
    pub footer_year: i32,

    pub focus: Focus,
    pub show_logs: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn RestaurantApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            tx,
            rx,
            page: PageScroll::new(),
            nav: NavMenu::new(),
            menu: MenuBoard::default_menu(),
            reservation: ReservationForm::new(),
            cart: CartPanel::new(),
            newsletter: NewsletterForm::new(),
            form_alert: AlertSlot::new(),
            newsletter_alert: AlertSlot::new(),
            footer_year: current_year(),
            focus: Focus::Browse,
            show_logs: false,
            should_quit: false,
        }
    }

    // ===== Input routing =====

    pub fn handle_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        let now = Instant::now();
        if self.cart.is_open() {
            self.handle_cart_key(key);
            return;
        }
        match self.focus {
            Focus::Browse => self.handle_browse_key(key, now),
            Focus::Reservation => self.handle_reservation_key(key),
            Focus::Newsletter => self.handle_newsletter_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) {
        if self.nav.open {
            match key.code {
                KeyCode::Up => self.nav.select_prev(),
                KeyCode::Down => self.nav.select_next(),
                KeyCode::Enter => {
                    let anchor = self.nav.activate();
                    self.scroll_to_anchor(anchor);
                }
                KeyCode::Esc | KeyCode::Char('m') => self.nav.close(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('m') => self.nav.toggle(),
            KeyCode::Char('c') => self.open_cart(),
            KeyCode::Char('r') => self.focus = Focus::Reservation,
            KeyCode::Char('n') => self.focus = Focus::Newsletter,
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::Left => self.menu.select_prev(),
            KeyCode::Right => self.menu.select_next(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.add_visible_item(index, now);
            }
            KeyCode::Up => self.page.scroll_by(-1),
            KeyCode::Down => self.page.scroll_by(1),
            KeyCode::PageUp => self.page.scroll_by(-10),
            KeyCode::PageDown => self.page.scroll_by(10),
            _ => {}
        }
    }

    fn handle_reservation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Browse,
            KeyCode::Tab => self.reservation.focus_next(),
            KeyCode::Enter => self.submit_reservation(),
            KeyCode::Left if self.reservation.focus == ReservationField::Time => {
                if self.reservation.time_prev() {
                    self.check_availability();
                }
            }
            KeyCode::Right if self.reservation.focus == ReservationField::Time => {
                if self.reservation.time_next() {
                    self.check_availability();
                }
            }
            _ => {
                if let Some(input) = self.reservation.focused_input() {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
    }

    fn handle_newsletter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Browse,
            KeyCode::Enter => self.subscribe(),
            _ => {
                self.newsletter.email.handle_event(&Event::Key(key));
            }
        }
    }

    fn handle_cart_key(&mut self, key: KeyEvent) {
        #[derive(Clone, Copy)]
        enum Stage {
            Items,
            Contact,
            Dialog,
        }
        let Some(overlay) = self.cart.overlay() else {
            return;
        };
        let stage = match overlay.stage {
            OverlayStage::Items => Stage::Items,
            OverlayStage::Contact(_) => Stage::Contact,
            OverlayStage::Dialog(_) => Stage::Dialog,
        };

        match (stage, key.code) {
            (Stage::Items, KeyCode::Esc) => self.close_cart(),
            (Stage::Items, KeyCode::Up) => self.cart.select_prev(),
            (Stage::Items, KeyCode::Down) => self.cart.select_next(),
            (Stage::Items, KeyCode::Char('x') | KeyCode::Delete) => self.cart.remove_selected(),
            (Stage::Items, KeyCode::Enter) => self.cart.begin_checkout(),
            (Stage::Contact, KeyCode::Esc) => self.cart.cancel_checkout(),
            (Stage::Contact, KeyCode::Tab) => {
                if let Some(overlay) = self.cart.overlay_mut()
                    && let OverlayStage::Contact(form) = &mut overlay.stage
                    && let Some(focus) = form.focus
                {
                    form.focus = Some(focus.next());
                }
            }
            (Stage::Contact, KeyCode::Enter) => self.place_order(),
            (Stage::Contact, _) => {
                if let Some(overlay) = self.cart.overlay_mut()
                    && let OverlayStage::Contact(form) = &mut overlay.stage
                    && let Some(input) = form.focused_input()
                {
                    input.handle_event(&Event::Key(key));
                }
            }
            (Stage::Dialog, KeyCode::Enter | KeyCode::Esc) => {
                self.cart.dismiss_dialog();
                if !self.cart.is_open() {
                    self.page.locked = false;
                }
            }
            _ => {}
        }
    }

    // ===== Component actions =====

    pub fn open_cart(&mut self) {
        self.cart.open();
        self.page.locked = true;
    }

    pub fn close_cart(&mut self) {
        self.cart.close();
        self.page.locked = false;
    }

    /// Add the nth currently visible menu item to the cart
    pub fn add_visible_item(&mut self, index: usize, now: Instant) {
        let Some(item) = self.menu.visible_items().get(index).cloned().cloned() else {
            return;
        };
        let message = self.cart.add(&item);
        self.form_alert.show(message, AlertKind::Success, now);
    }

    /// Animated scroll to a named page section; unknown anchors are a
    /// no-op.
    pub fn scroll_to_anchor(&mut self, anchor: &str) {
        let anchors = crate::ui::section_anchors(self);
        if let Some((_, position)) = anchors.iter().find(|(name, _)| *name == anchor) {
            self.page.scroll_to(*position);
        }
    }

    // ===== Network dispatch =====
    //
    // Each dispatcher captures what it needs, spawns the call and
    // returns immediately; the outcome arrives later as a UiEvent.

    pub fn submit_reservation(&mut self) {
        let request = self.reservation.request();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.create_reservation(&request).await;
            let _ = tx.send(UiEvent::ReservationSubmitted(result));
        });
    }

    pub fn check_availability(&mut self) {
        let Some((seq, query)) = self.reservation.begin_availability_check() else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.check_availability(&query).await;
            let _ = tx.send(UiEvent::AvailabilityChecked { seq, result });
        });
    }

    pub fn place_order(&mut self) {
        let Some(submission) = self.cart.take_submission() else {
            return;
        };
        let total = self.cart.cart.total();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.create_order(&submission).await;
            let _ = tx.send(UiEvent::OrderPlaced { total, result });
        });
    }

    pub fn subscribe(&mut self) {
        let email = self.newsletter.submit_email();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.subscribe(&email).await;
            let _ = tx.send(UiEvent::Subscribed(result));
        });
    }

    // ===== Outcome application =====

    pub fn apply_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::ReservationSubmitted(result) => {
                self.reservation
                    .apply_submit(result, &mut self.form_alert, now);
            }
            UiEvent::AvailabilityChecked { seq, result } => {
                self.reservation.apply_availability(seq, result);
            }
            UiEvent::OrderPlaced { total, result } => {
                self.cart.apply_order_outcome(total, result);
            }
            UiEvent::Subscribed(result) => {
                self.newsletter
                    .apply_outcome(result, &mut self.newsletter_alert, now);
            }
        }
    }

    /// Apply all completed network outcomes, in arrival order
    pub fn drain_events(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event, now);
            applied += 1;
        }
        applied
    }

    /// Per-frame housekeeping: scroll animation and alert expiry
    pub fn tick(&mut self, now: Instant) {
        self.page.tick();
        self.form_alert.expire(now);
        self.newsletter_alert.expire(now);
    }
}
