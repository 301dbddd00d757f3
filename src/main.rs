use chrono::{Duration, Utc};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

mod board;
mod domain;

use board::{ColumnStats, OrderBoard};
use domain::order::{
    format_elapsed, DeliveryMethod, LineItem, Order, OrderStatus, Priority, Station,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_board=debug")),
        )
        .init();

    tracing::info!("Starting kitchen order board demo");

    let mut board = OrderBoard::new(seed_orders());
    let counts = board.station_counts();
    tracing::info!("Loaded {} orders", board.len());
    for station in Station::ALL {
        tracing::info!("  {}: {} orders", station.name(), counts.for_station(station));
    }

    // Script the lifecycle the kitchen would drive by hand: one mutation per
    // one-second display tick, re-deriving every view against a fresh clock.
    let burger = find_order(&board, "8901");
    let pizza = find_order(&board, "8902");
    let wings = find_order(&board, "8903");

    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
    for tick in 0..8u32 {
        ticker.tick().await;
        let now = Utc::now();

        match tick {
            1 => board.update_status(burger, OrderStatus::InProgress, now)?,
            2 => {
                let item = board.get(burger).and_then(|o| o.items.first().map(|i| i.id));
                if let Some(item_id) = item {
                    board.toggle_item(burger, item_id)?;
                }
            }
            3 => board.update_priority(pizza, Priority::Urgent)?,
            4 => board.record_modification(pizza, now)?,
            5 => board.update_status(wings, OrderStatus::Completed, now)?,
            6 => board.dismiss_alert(pizza),
            _ => {}
        }

        render(&board, now);
    }

    // Final station-filtered snapshot, as the grill screen would show it.
    let grill = board.view(Some(Station::Grill));
    tracing::info!(
        "Grill view: {} new / {} in progress / {} ready / {} completed",
        grill.new.len(),
        grill.in_progress.len(),
        grill.ready.len(),
        grill.completed.len()
    );
    println!("{}", serde_json::to_string_pretty(&grill)?);

    tracing::info!("Demo complete");
    Ok(())
}

fn render(board: &OrderBoard, now: chrono::DateTime<Utc>) {
    let view = board.view(None);
    for status in OrderStatus::ALL {
        let bucket = view.bucket(status);
        let stats = ColumnStats::for_orders(bucket, now);
        tracing::info!(
            column = ?status,
            orders = stats.orders,
            urgent = stats.urgent,
            avg = %format_elapsed(stats.avg_elapsed_minutes),
            items = stats.items,
            "column"
        );
        for order in bucket {
            tracing::debug!(
                order = %order.number,
                elapsed = %format_elapsed(order.elapsed_minutes(now)),
                urgency = ?order.urgency(now),
                progress = %format!("{:.0}%", order.completion_percentage()),
                "ticket"
            );
        }
    }

    let metrics = board.metrics(now);
    tracing::info!(
        active = metrics.active_orders,
        total = metrics.total_orders,
        avg_prep = %format!("{:.1}m", metrics.average_prep_minutes),
        completion = %format!("{:.1}%", metrics.completion_rate),
        alerts = board.alerts().len(),
        "board metrics"
    );
}

fn find_order(board: &OrderBoard, number: &str) -> Uuid {
    board
        .orders()
        .iter()
        .find(|order| order.number == number)
        .map(|order| order.id)
        .expect("seed order present")
}

/// The same spread of tickets the kitchen screen ships as its demo data:
/// every station, every status, and one already-overdue dine-in order.
fn seed_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: Uuid::new_v4(),
            number: "8901".to_string(),
            customer_name: "John Smith".to_string(),
            delivery_method: DeliveryMethod::DineIn,
            table_number: Some("12".to_string()),
            address: None,
            station: Station::Grill,
            priority: Priority::Normal,
            status: OrderStatus::New,
            estimated_minutes: 15,
            items: vec![
                LineItem::new("Classic Cheeseburger", 2, "No onions, extra cheese"),
                LineItem::new("French Fries", 2, "Extra crispy"),
            ],
            created_at: now - Duration::minutes(5),
            last_updated: now,
        },
        Order {
            id: Uuid::new_v4(),
            number: "8902".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            delivery_method: DeliveryMethod::Delivery,
            table_number: None,
            address: Some("123 Main St, Apt 4B".to_string()),
            station: Station::Grill,
            priority: Priority::High,
            status: OrderStatus::InProgress,
            estimated_minutes: 25,
            items: vec![
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Margherita Pizza".to_string(),
                    quantity: 1,
                    special_instructions: "Light cheese, extra basil".to_string(),
                    completed: true,
                },
                LineItem::new("Caesar Salad", 1, "Dressing on the side"),
            ],
            created_at: now - Duration::minutes(12),
            last_updated: now,
        },
        Order {
            id: Uuid::new_v4(),
            number: "8903".to_string(),
            customer_name: "Mike Davis".to_string(),
            delivery_method: DeliveryMethod::Pickup,
            table_number: None,
            address: None,
            station: Station::Fryer,
            priority: Priority::Normal,
            status: OrderStatus::Ready,
            estimated_minutes: 10,
            items: vec![
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Chicken Wings".to_string(),
                    quantity: 12,
                    special_instructions: "Buffalo sauce, extra hot".to_string(),
                    completed: true,
                },
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Onion Rings".to_string(),
                    quantity: 1,
                    special_instructions: String::new(),
                    completed: true,
                },
            ],
            created_at: now - Duration::minutes(8),
            last_updated: now,
        },
        Order {
            id: Uuid::new_v4(),
            number: "8904".to_string(),
            customer_name: "Emily Chen".to_string(),
            delivery_method: DeliveryMethod::DineIn,
            table_number: Some("8".to_string()),
            address: None,
            station: Station::Salad,
            priority: Priority::Normal,
            status: OrderStatus::Completed,
            estimated_minutes: 20,
            items: vec![
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Greek Salad".to_string(),
                    quantity: 1,
                    special_instructions: "No olives".to_string(),
                    completed: true,
                },
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Iced Tea".to_string(),
                    quantity: 2,
                    special_instructions: "Extra lemon".to_string(),
                    completed: true,
                },
            ],
            created_at: now - Duration::minutes(25),
            last_updated: now,
        },
        Order {
            id: Uuid::new_v4(),
            number: "8905".to_string(),
            customer_name: "David Wilson".to_string(),
            delivery_method: DeliveryMethod::Delivery,
            table_number: None,
            address: Some("456 Oak Ave".to_string()),
            station: Station::Grill,
            priority: Priority::Urgent,
            status: OrderStatus::New,
            estimated_minutes: 30,
            items: vec![
                LineItem::new("BBQ Bacon Burger", 1, "Medium rare, no pickles"),
                LineItem::new("Sweet Potato Fries", 1, ""),
                LineItem::new("Chocolate Milkshake", 1, "Extra whipped cream"),
            ],
            created_at: now - Duration::minutes(3),
            last_updated: now,
        },
        Order {
            id: Uuid::new_v4(),
            number: "8906".to_string(),
            customer_name: "Lisa Brown".to_string(),
            delivery_method: DeliveryMethod::Pickup,
            table_number: None,
            address: None,
            station: Station::Beverages,
            priority: Priority::Normal,
            status: OrderStatus::InProgress,
            estimated_minutes: 15,
            items: vec![
                LineItem {
                    id: Uuid::new_v4(),
                    name: "Cappuccino".to_string(),
                    quantity: 2,
                    special_instructions: "Extra foam".to_string(),
                    completed: true,
                },
                LineItem::new("Blueberry Muffin", 2, "Warmed"),
            ],
            created_at: now - Duration::minutes(18),
            last_updated: now,
        },
    ]
}
