use serde::Serialize;

use crate::domain::order::{Order, OrderStatus, Station};

// ============================================================================
// Board Views - Status Partition and Station Counts
// ============================================================================

/// The four status buckets the board renders as columns.
///
/// Buckets are disjoint, keep the input collection's order, and together
/// hold exactly the station-filtered input. The view owns copies so the
/// presentation layer never aliases the board's collection.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub new: Vec<Order>,
    pub in_progress: Vec<Order>,
    pub ready: Vec<Order>,
    pub completed: Vec<Order>,
}

impl BoardView {
    pub fn partition(orders: &[Order], station: Option<Station>) -> Self {
        let mut view = Self {
            new: Vec::new(),
            in_progress: Vec::new(),
            ready: Vec::new(),
            completed: Vec::new(),
        };

        for order in orders {
            if let Some(station) = station {
                if order.station != station {
                    continue;
                }
            }
            view.bucket_mut(order.status).push(order.clone());
        }

        view
    }

    pub fn bucket(&self, status: OrderStatus) -> &[Order] {
        match status {
            OrderStatus::New => &self.new,
            OrderStatus::InProgress => &self.in_progress,
            OrderStatus::Ready => &self.ready,
            OrderStatus::Completed => &self.completed,
        }
    }

    pub fn total(&self) -> usize {
        OrderStatus::ALL
            .iter()
            .map(|status| self.bucket(*status).len())
            .sum()
    }

    fn bucket_mut(&mut self, status: OrderStatus) -> &mut Vec<Order> {
        match status {
            OrderStatus::New => &mut self.new,
            OrderStatus::InProgress => &mut self.in_progress,
            OrderStatus::Ready => &mut self.ready,
            OrderStatus::Completed => &mut self.completed,
        }
    }
}

/// Per-station order counts for the filter bar, taken over the unfiltered
/// collection.
#[derive(Debug, Clone, Serialize)]
pub struct StationCounts {
    pub all: usize,
    pub grill: usize,
    pub fryer: usize,
    pub salad: usize,
    pub beverages: usize,
}

impl StationCounts {
    pub fn count(orders: &[Order]) -> Self {
        let per_station = |station: Station| {
            orders.iter().filter(|order| order.station == station).count()
        };
        Self {
            all: orders.len(),
            grill: per_station(Station::Grill),
            fryer: per_station(Station::Fryer),
            salad: per_station(Station::Salad),
            beverages: per_station(Station::Beverages),
        }
    }

    pub fn for_station(&self, station: Station) -> usize {
        match station {
            Station::Grill => self.grill,
            Station::Fryer => self.fryer,
            Station::Salad => self.salad,
            Station::Beverages => self.beverages,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{DeliveryMethod, LineItem, Priority};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn order(number: &str, station: Station, status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            number: number.to_string(),
            customer_name: "Mike Davis".to_string(),
            delivery_method: DeliveryMethod::Delivery,
            table_number: None,
            address: Some("456 Oak Ave".to_string()),
            station,
            priority: Priority::Normal,
            status,
            estimated_minutes: 15,
            items: vec![LineItem::new("Chicken Wings", 12, "Buffalo sauce, extra hot")],
            created_at: now - Duration::minutes(8),
            last_updated: now,
        }
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("8901", Station::Grill, OrderStatus::New),
            order("8902", Station::Grill, OrderStatus::InProgress),
            order("8903", Station::Fryer, OrderStatus::Ready),
            order("8904", Station::Salad, OrderStatus::Completed),
            order("8905", Station::Grill, OrderStatus::New),
            order("8906", Station::Beverages, OrderStatus::InProgress),
        ]
    }

    #[test]
    fn test_partition_covers_input_without_overlap() {
        let orders = sample_orders();
        let view = BoardView::partition(&orders, None);

        assert_eq!(view.total(), orders.len());

        // Disjoint: each input id appears exactly once across the buckets.
        let mut seen: Vec<Uuid> = OrderStatus::ALL
            .iter()
            .flat_map(|status| view.bucket(*status).iter().map(|order| order.id))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), orders.len());

        // Each bucket holds only its own status.
        for status in OrderStatus::ALL {
            assert!(view.bucket(status).iter().all(|order| order.status == status));
        }
    }

    #[test]
    fn test_partition_preserves_collection_order() {
        let orders = sample_orders();
        let view = BoardView::partition(&orders, None);
        assert_eq!(view.new[0].number, "8901");
        assert_eq!(view.new[1].number, "8905");
    }

    #[test]
    fn test_station_filter_restricts_buckets() {
        let orders = sample_orders();
        let view = BoardView::partition(&orders, Some(Station::Grill));

        assert_eq!(view.total(), 3);
        for status in OrderStatus::ALL {
            assert!(view
                .bucket(status)
                .iter()
                .all(|order| order.station == Station::Grill));
        }
    }

    #[test]
    fn test_absent_filter_yields_full_collection() {
        let orders = sample_orders();
        assert_eq!(BoardView::partition(&orders, None).total(), orders.len());
    }

    #[test]
    fn test_partition_of_empty_collection() {
        let view = BoardView::partition(&[], Some(Station::Fryer));
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_station_counts() {
        let orders = sample_orders();
        let counts = StationCounts::count(&orders);
        assert_eq!(counts.all, 6);
        assert_eq!(counts.grill, 3);
        assert_eq!(counts.fryer, 1);
        assert_eq!(counts.salad, 1);
        assert_eq!(counts.beverages, 1);
        assert_eq!(counts.for_station(Station::Grill), 3);
    }
}
