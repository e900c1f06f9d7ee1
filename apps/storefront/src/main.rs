//! Demo binary: a scripted Mundo Pet storefront session in the terminal.
//!
//! Walks the same path a shopper would click through — products straight
//! into the cart, services through the confirmation popup, a removal, a
//! finalized purchase — with the console collaborators standing in for
//! the page.

use tracing::info;

use storefront::adapters::{ProductTile, ServiceAction};
use storefront::console::{ConsoleCheckout, ConsoleSurface, ConsoleToast};
use storefront::Session;

fn main() {
    storefront::init_tracing();
    info!("Mundo Pet storefront demo starting");

    let mut session = Session::new(
        Box::new(ConsoleSurface),
        Box::new(ConsoleToast::new()),
        Box::new(ConsoleCheckout),
    );

    // The storefront catalog: tiles render display prices, service
    // triggers carry metadata prices.
    let racao = ProductTile::new("Ração Premium 10kg", "R$ 120,50");
    let brinquedo = ProductTile::new("Brinquedo Mordedor", "R$ 25,90");
    let rasgada = ProductTile::new("Etiqueta rasgada", "R$ --");
    let banho = ServiceAction::new("Banho", "40.00");
    let tosa = ServiceAction::new("Tosa", "35.50");

    // Shopper browses products.
    session.add_product(&racao);
    session.add_product(&brinquedo);

    // A mangled tile: logged, nothing visible happens.
    session.add_product(&rasgada);

    // Services go through the popup.
    session.request_service(&banho);
    session.confirm_service();
    session.request_service(&tosa);
    session.cancel_service();

    // Second thoughts about the toy.
    let toy_row = session
        .view()
        .rows
        .iter()
        .find(|row| row.name == "Brinquedo Mordedor")
        .map(|row| row.id);
    if let Some(id) = toy_row {
        session.remove_item(&id);
    }

    let receipt = session.view();
    println!(
        "{}",
        serde_json::to_string_pretty(&receipt).expect("cart view serializes")
    );

    session.finalize_purchase();

    // Finalizing an empty cart is a guided no-op.
    session.finalize_purchase();

    info!("demo finished");
}
