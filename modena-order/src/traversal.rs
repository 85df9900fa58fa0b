use modena_catalog::car::Car;

use crate::order::{Order, OrderError};

/// Cursor-driven walk over an order, yielding cars in canonical name
/// order (case-insensitive, ties by insertion).
///
/// Every step re-sorts the order's current contents and yields the car
/// at the cursor, so the walk is a live view: cars added to the order
/// while it is open take part in later steps. A car landing at an
/// already-passed position is missed, and one landing at the current
/// position repeats a name; the cursor only ever moves forward. Each
/// step hands out a clone, never a reference into the order.
#[derive(Debug)]
pub struct OrderTraversal<'a> {
    order: &'a Order,
    cursor: usize,
}

impl<'a> OrderTraversal<'a> {
    pub(crate) fn new(order: &'a Order) -> Self {
        Self { order, cursor: 0 }
    }

    /// True while the cursor is behind the order's current car count.
    pub fn has_next(&self) -> bool {
        self.cursor < self.order.len()
    }

    /// The next car in sorted order, or `TraversalExhausted` once the
    /// cursor has passed every car currently in the order.
    pub fn try_next(&mut self) -> Result<Car, OrderError> {
        let car = self
            .order
            .nth_sorted(self.cursor)
            .ok_or(OrderError::TraversalExhausted)?;
        self.cursor += 1;
        Ok(car)
    }
}

impl Iterator for OrderTraversal<'_> {
    type Item = Car;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modena_catalog::builder::CarBuilder;
    use modena_catalog::feature::FeatureGroup;
    use modena_core::money::Price;
    use rust_decimal_macros::dec;

    fn car(name: &str) -> Car {
        CarBuilder::new()
            .name(name)
            .base_price(Price::new(dec!(1000)).unwrap())
            .features(FeatureGroup::new("Features"))
            .build()
    }

    fn visited_names(order: &Order) -> Vec<String> {
        order
            .create_iterator()
            .map(|car| car.name.unwrap_or_default())
            .collect()
    }

    #[test]
    fn yields_cars_in_case_insensitive_name_order() {
        let order = Order::new();
        order.add_item(car("Zeta"));
        order.add_item(car("alpha"));
        order.add_item(car("Mike"));

        assert_eq!(visited_names(&order), vec!["alpha", "Mike", "Zeta"]);

        let mut traversal = order.create_iterator();
        for _ in 0..3 {
            traversal.try_next().unwrap();
        }
        assert!(!traversal.has_next());
        assert_eq!(traversal.try_next(), Err(OrderError::TraversalExhausted));
    }

    #[test]
    fn exhausts_after_the_last_car() {
        let order = Order::new();
        order.add_item(car("alpha"));

        let mut traversal = order.create_iterator();
        assert!(traversal.has_next());
        assert!(traversal.try_next().is_ok());

        assert!(!traversal.has_next());
        assert_eq!(traversal.try_next(), Err(OrderError::TraversalExhausted));
        // Exhaustion is stable over repeated calls.
        assert_eq!(traversal.try_next(), Err(OrderError::TraversalExhausted));
    }

    #[test]
    fn an_empty_order_is_exhausted_immediately() {
        let order = Order::new();
        let mut traversal = order.create_iterator();

        assert!(!traversal.has_next());
        assert_eq!(traversal.try_next(), Err(OrderError::TraversalExhausted));
    }

    #[test]
    fn a_car_added_beyond_the_cursor_joins_the_walk() {
        let order = Order::new();
        order.add_item(car("Alpha"));
        order.add_item(car("Beta"));

        let mut traversal = order.create_iterator();
        let mut seen = vec![traversal.try_next().unwrap()];

        order.add_item(car("Zed"));
        while traversal.has_next() {
            seen.push(traversal.try_next().unwrap());
        }

        let names: Vec<&str> = seen.iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Zed"]);
    }

    #[test]
    fn a_car_added_before_the_cursor_shifts_the_view() {
        let order = Order::new();
        order.add_item(car("Beta"));
        order.add_item(car("Delta"));

        let mut traversal = order.create_iterator();
        let mut seen = vec![traversal.try_next().unwrap()];

        // "Alpha" lands at position zero, which the cursor has already
        // passed; position one is now "Beta" again.
        order.add_item(car("Alpha"));
        while traversal.has_next() {
            seen.push(traversal.try_next().unwrap());
        }

        let names: Vec<&str> = seen.iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["Beta", "Beta", "Delta"]);
        assert_eq!(seen.len(), order.len());
    }

    #[test]
    fn two_traversals_over_one_order_run_independently() {
        let order = Order::new();
        order.add_item(car("alpha"));
        order.add_item(car("beta"));

        let mut first = order.create_iterator();
        let mut second = order.create_iterator();

        assert_eq!(
            first.try_next().map(|c| c.name).unwrap().as_deref(),
            Some("alpha")
        );
        assert_eq!(
            second.try_next().map(|c| c.name).unwrap().as_deref(),
            Some("alpha")
        );
    }

    #[test]
    fn yielded_cars_are_clones_not_views() {
        let order = Order::new();
        order.add_item(car("alpha"));

        let mut traversal = order.create_iterator();
        let mut yielded = traversal.try_next().unwrap();
        yielded.name = Some("renamed".to_string());

        assert_eq!(
            order.nth_sorted(0).and_then(|c| c.name).as_deref(),
            Some("alpha")
        );
    }
}
