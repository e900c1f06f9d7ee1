//! # Cart Commands
//!
//! Product additions, keyed removal, and the drawer toggle.

use tracing::{debug, error};

use petshop_core::LineItemId;

use crate::adapters::ProductTile;
use crate::state::Session;

impl Session {
    /// Adds a product from its tile to the cart.
    ///
    /// ## Behavior
    /// - Parses the tile's display price (currency prefix, decimal comma)
    /// - Appends a new line item — identical products accumulate as
    ///   separate entries
    /// - Re-renders, notifies, and opens the drawer for visual feedback
    ///
    /// ## Failure
    /// A price that does not parse aborts the click: no cart mutation,
    /// no notification, only a diagnostic log.
    pub fn add_product(&mut self, tile: &ProductTile) {
        debug!(name = %tile.name, "add_product command");

        let price = match tile.parse_price() {
            Ok(price) => price,
            Err(err) => {
                error!(%err, price_text = %tile.price_text, "could not parse product price");
                return;
            }
        };

        match self.cart.add(&tile.name, price) {
            Ok(_) => {
                self.render();
                self.notify(&format!("\"{}\" added to cart!", tile.name.trim()));
                self.set_drawer_open(true);
            }
            Err(err) => {
                error!(%err, name = %tile.name, "product rejected by cart");
            }
        }
    }

    /// Removes the line item with the given id.
    ///
    /// A stale id — the item was already removed or the cart was cleared
    /// since the affordance was rendered — is a quiet no-op.
    pub fn remove_item(&mut self, id: &LineItemId) {
        debug!(%id, "remove_item command");

        match self.cart.remove(id) {
            Some(_) => {
                self.render();
                self.notify("Item removed from cart.");
            }
            None => {
                debug!(%id, "remove for unknown line item ignored");
            }
        }
    }

    /// Toggles the cart drawer open/closed.
    ///
    /// Bound to clicks on the cart region itself (outside any button).
    pub fn toggle_drawer(&mut self) {
        debug!("toggle_drawer command");
        let open = !self.drawer_open;
        self.set_drawer_open(open);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use petshop_core::Money;

    use crate::adapters::ProductTile;
    use crate::testing::PageLog;

    #[test]
    fn test_add_product_parses_comma_decimal_and_currency_prefix() {
        let log = PageLog::default();
        let mut session = log.session();

        session.add_product(&ProductTile::new("Ração 10kg", "R$ 120,50"));

        assert_eq!(session.cart().total(), Money::from_cents(12050));
        let view = log.last_view().unwrap();
        assert_eq!(view.rows[0].name, "Ração 10kg");
        assert_eq!(view.total.as_deref(), Some("R$ 120,50"));
        assert_eq!(log.notifications(), ["\"Ração 10kg\" added to cart!"]);
        assert!(session.drawer_open());
    }

    #[test]
    fn test_add_product_parse_failure_is_silent() {
        let log = PageLog::default();
        let mut session = log.session();
        let renders_before = log.view_count();

        session.add_product(&ProductTile::new("Etiqueta rasgada", "R$ --"));

        // No mutation, no render, no notification: the user sees nothing.
        assert!(session.cart().is_empty());
        assert_eq!(log.view_count(), renders_before);
        assert!(log.notifications().is_empty());
        assert!(!session.drawer_open());
    }

    #[test]
    fn test_same_product_twice_accumulates_two_rows() {
        let log = PageLog::default();
        let mut session = log.session();
        let tile = ProductTile::new("Brinquedo", "R$ 25,90");

        session.add_product(&tile);
        session.add_product(&tile);

        let view = log.last_view().unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total.as_deref(), Some("R$ 51,80"));
    }

    #[test]
    fn test_remove_item_by_row_key() {
        let log = PageLog::default();
        let mut session = log.session();
        session.add_product(&ProductTile::new("Banho", "R$ 40,00"));
        session.add_product(&ProductTile::new("Tosa", "R$ 35,50"));

        // The remove affordance fires with the key its row carries.
        let row_id = log.last_view().unwrap().rows[0].id;
        session.remove_item(&row_id);

        assert_eq!(session.cart().total(), Money::from_cents(3550));
        let view = log.last_view().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Tosa");
        assert!(log
            .notifications()
            .contains(&"Item removed from cart.".to_string()));
    }

    #[test]
    fn test_remove_with_stale_id_is_noop() {
        let log = PageLog::default();
        let mut session = log.session();
        session.add_product(&ProductTile::new("Banho", "R$ 40,00"));

        let row_id = log.last_view().unwrap().rows[0].id;
        session.remove_item(&row_id);
        let renders = log.view_count();
        let notifications = log.notifications().len();

        // Affordance fires again after its row is gone.
        session.remove_item(&row_id);

        assert!(session.cart().is_empty());
        assert_eq!(log.view_count(), renders);
        assert_eq!(log.notifications().len(), notifications);
    }

    #[test]
    fn test_toggle_drawer() {
        let log = PageLog::default();
        let mut session = log.session();

        session.toggle_drawer();
        assert!(session.drawer_open());
        session.toggle_drawer();
        assert!(!session.drawer_open());
    }
}
