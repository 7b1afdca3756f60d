//! Menu filter
//!
//! Category buttons over the menu board. Selecting a category recomputes
//! every item's visibility from scratch; there is no incremental diffing,
//! so repeated selections are idempotent.

use shared::{CATEGORY_ALL, MenuItem};

/// A menu item plus its current visibility
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub visible: bool,
}

/// The menu board with its category filter
#[derive(Debug)]
pub struct MenuBoard {
    categories: Vec<&'static str>,
    active: usize,
    entries: Vec<MenuEntry>,
}

impl MenuBoard {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut board = Self {
            categories: vec![CATEGORY_ALL, "starters", "mains", "desserts", "drinks"],
            active: 0,
            entries: items
                .into_iter()
                .map(|item| MenuEntry {
                    item,
                    visible: true,
                })
                .collect(),
        };
        board.apply();
        board
    }

    /// The menu the storefront opens with
    pub fn default_menu() -> Self {
        Self::new(vec![
            MenuItem::new(Some(1), "Bruschetta al Pomodoro", "starters", 8.50),
            MenuItem::new(Some(2), "Carpaccio di Manzo", "starters", 13.00),
            MenuItem::new(Some(3), "Burrata e Prosciutto", "starters", 12.50),
            MenuItem::new(Some(4), "Risotto ai Funghi", "mains", 18.00),
            MenuItem::new(Some(5), "Tagliatelle al Ragù", "mains", 16.50),
            MenuItem::new(Some(6), "Branzino al Forno", "mains", 24.00),
            MenuItem::new(Some(7), "Ossobuco alla Milanese", "mains", 26.50),
            MenuItem::new(Some(8), "Tiramisu", "desserts", 7.25),
            MenuItem::new(Some(9), "Panna Cotta", "desserts", 6.75),
            MenuItem::new(Some(10), "Chianti Classico (glass)", "drinks", 9.00),
            MenuItem::new(Some(11), "Limonata della Casa", "drinks", 4.50),
        ])
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// Index of the single active category button
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_category(&self) -> &'static str {
        self.categories[self.active]
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Activate the button at `index` and recompute all visibilities
    pub fn select(&mut self, index: usize) {
        if index < self.categories.len() {
            self.active = index;
            self.apply();
        }
    }

    pub fn select_next(&mut self) {
        self.select((self.active + 1) % self.categories.len());
    }

    pub fn select_prev(&mut self) {
        self.select((self.active + self.categories.len() - 1) % self.categories.len());
    }

    fn apply(&mut self) {
        let category = self.categories[self.active];
        for entry in &mut self.entries {
            entry.visible = category == CATEGORY_ALL || entry.item.category == category;
        }
    }

    /// Currently visible items, in menu order
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| &e.item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> MenuBoard {
        MenuBoard::new(vec![
            MenuItem::new(Some(1), "Bruschetta", "starters", 8.50),
            MenuItem::new(Some(2), "Risotto", "mains", 18.00),
            MenuItem::new(Some(3), "Tiramisu", "desserts", 7.25),
            MenuItem::new(Some(4), "Carpaccio", "starters", 13.00),
        ])
    }

    #[test]
    fn all_shows_every_item() {
        let board = board();
        assert_eq!(board.active_category(), CATEGORY_ALL);
        assert!(board.entries().iter().all(|e| e.visible));
    }

    #[test]
    fn category_shows_only_matching_items() {
        let mut board = board();
        let starters = board
            .categories()
            .iter()
            .position(|c| *c == "starters")
            .unwrap();
        board.select(starters);

        let visible: Vec<&str> = board
            .visible_items()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Bruschetta", "Carpaccio"]);
        assert!(
            board
                .entries()
                .iter()
                .filter(|e| !e.visible)
                .all(|e| e.item.category != "starters")
        );
    }

    #[test]
    fn exactly_one_button_is_active() {
        let mut board = board();
        board.select(2);
        board.select(1);
        assert_eq!(board.active(), 1);
    }

    #[test]
    fn selecting_all_again_restores_everything() {
        let mut board = board();
        board.select(1);
        board.select(0);
        assert!(board.entries().iter().all(|e| e.visible));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut board = board();
        board.select(99);
        assert_eq!(board.active(), 0);
    }
}
