use rango_app::AppState;
use rango_shared::money::format_amount;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Walks each role through a short session against the configured seed.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rango_app=debug,rango_order=info,rango_cart=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut state = AppState::load()?;
    let symbol = state.config.currency.symbol.clone();

    // Customer
    for restaurant in state.directory.search("burger", None) {
        tracing::info!("Search hit: {} ({})", restaurant.name, restaurant.cuisine);
    }
    state.directory.toggle_favorite("1")?;

    let mut session = state.open_session("1")?;
    tracing::info!(
        "Menu of {}: {} items in {:?}",
        session.restaurant().name,
        session.menu().items().len(),
        session.menu().categories()
    );
    session.add("1")?;
    session.add("1")?;
    session.add("3")?;
    session.remove("1");
    let summary = session.summary();
    tracing::info!(
        "Cart at {}: {} items, subtotal {}, total {}",
        session.restaurant().name,
        summary.item_count,
        format_amount(&symbol, summary.subtotal),
        session.format_total()
    );

    // Restaurant
    let pending: Vec<String> = state
        .kitchen
        .orders()
        .iter()
        .filter(|o| o.status.next_action().is_some())
        .map(|o| o.id.clone())
        .collect();
    for id in &pending {
        let action = state.kitchen.get(id).and_then(|o| o.status.next_action()).unwrap_or("none");
        let transition = state.advance_kitchen_order(id)?;
        let badge = transition.status().presentation();
        tracing::info!("Kitchen {} '{}': now {} [{:?}, {}]", id, action, badge.label, badge.tone, badge.icon);
    }
    tracing::info!(
        "Kitchen: {} pending, revenue {}, average {}",
        state.kitchen.pending_count(),
        format_amount(&symbol, state.kitchen.revenue()),
        format_amount(&symbol, state.kitchen.average_order_value())
    );

    // Courier
    for online in [false, true] {
        state.set_courier_online(online);
        tracing::info!(
            "Courier online={}: {} available",
            state.courier_online(),
            state.available_deliveries().len()
        );
    }
    let available: Vec<String> = state.available_deliveries().iter().map(|d| d.id.clone()).collect();
    for id in &available {
        state.advance_delivery(id)?;
    }
    for delivery in state.dispatch.active_orders() {
        tracing::info!(
            "Active delivery {} for {} ({:?}): {} [{}]",
            delivery.id,
            delivery.customer,
            delivery.customer_phone,
            delivery.status.label(),
            delivery.status.presentation().icon
        );
    }
    tracing::info!("Courier earnings: {}", format_amount(&symbol, state.dispatch.earnings()));

    let events = state.publish_events();
    tracing::info!("Published {} status changes", events.len());

    Ok(())
}
