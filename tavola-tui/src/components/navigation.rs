//! Navigation controller
//!
//! Nav menu toggle, animated scrolling to page sections, and the sticky
//! header flag. Scroll positions are virtual rows into the rendered page.

/// Rows kept above a section when scrolling to it (header clearance)
pub const HEADER_SCROLL_MARGIN: u16 = 80;

/// Scroll offset past which the header renders as sticky
pub const STICKY_SCROLL_THRESHOLD: u16 = 100;

/// Rows moved per tick while easing toward a scroll target
const SCROLL_STEP: u16 = 8;

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Menu", anchor: "menu" },
    NavLink { label: "Reservations", anchor: "reservations" },
    NavLink { label: "Newsletter", anchor: "newsletter" },
];

/// Collapsible nav menu state
#[derive(Debug)]
pub struct NavMenu {
    pub open: bool,
    pub selected: usize,
}

impl NavMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Menu button glyph for the current state
    pub fn icon(&self) -> &'static str {
        if self.open { "✕" } else { "☰" }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % NAV_LINKS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + NAV_LINKS.len() - 1) % NAV_LINKS.len();
    }

    /// Activate the selected link: the menu closes (resetting the icon)
    /// and the target anchor is returned for the scroll request.
    pub fn activate(&mut self) -> &'static str {
        self.close();
        NAV_LINKS[self.selected].anchor
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical scroll state of the page
#[derive(Debug, Default)]
pub struct PageScroll {
    pub offset: u16,
    target: Option<u16>,
    /// Scrolling is suspended while an overlay is open
    pub locked: bool,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an animated scroll so `position` ends up just below the
    /// header.
    pub fn scroll_to(&mut self, position: u16) {
        if self.locked {
            return;
        }
        self.target = Some(position.saturating_sub(HEADER_SCROLL_MARGIN));
    }

    /// Immediate scroll by a signed number of rows; cancels any animation
    pub fn scroll_by(&mut self, delta: i32) {
        if self.locked {
            return;
        }
        self.target = None;
        let next = self.offset as i32 + delta;
        self.offset = next.clamp(0, u16::MAX as i32) as u16;
    }

    /// Whether the header is in its sticky state
    pub fn is_sticky(&self) -> bool {
        self.offset > STICKY_SCROLL_THRESHOLD
    }

    /// Advance the scroll animation one step
    pub fn tick(&mut self) {
        if let Some(target) = self.target {
            if self.offset < target {
                self.offset = (self.offset + SCROLL_STEP).min(target);
            } else if self.offset > target {
                self.offset = self.offset.saturating_sub(SCROLL_STEP).max(target);
            }
            if self.offset == target {
                self.target = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_the_icon_glyph() {
        let mut nav = NavMenu::new();
        assert_eq!(nav.icon(), "☰");
        nav.toggle();
        assert!(nav.open);
        assert_eq!(nav.icon(), "✕");
        nav.toggle();
        assert_eq!(nav.icon(), "☰");
    }

    #[test]
    fn activating_a_link_closes_the_menu() {
        let mut nav = NavMenu::new();
        nav.toggle();
        nav.select_next();
        let anchor = nav.activate();
        assert_eq!(anchor, "menu");
        assert!(!nav.open);
        assert_eq!(nav.icon(), "☰");
    }

    #[test]
    fn sticky_flag_follows_the_threshold() {
        let mut page = PageScroll::new();
        page.offset = STICKY_SCROLL_THRESHOLD;
        assert!(!page.is_sticky());
        page.offset = STICKY_SCROLL_THRESHOLD + 1;
        assert!(page.is_sticky());
    }

    #[test]
    fn scroll_to_keeps_the_header_margin() {
        let mut page = PageScroll::new();
        page.scroll_to(200);
        for _ in 0..100 {
            page.tick();
        }
        assert_eq!(page.offset, 200 - HEADER_SCROLL_MARGIN);

        // Targets above the margin clamp to the top
        page.scroll_to(40);
        for _ in 0..100 {
            page.tick();
        }
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn locked_page_ignores_scroll_requests() {
        let mut page = PageScroll::new();
        page.locked = true;
        page.scroll_to(500);
        page.scroll_by(10);
        page.tick();
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn scroll_by_clamps_at_the_top() {
        let mut page = PageScroll::new();
        page.scroll_by(-5);
        assert_eq!(page.offset, 0);
        page.scroll_by(12);
        assert_eq!(page.offset, 12);
    }
}
