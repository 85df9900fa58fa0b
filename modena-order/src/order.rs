use std::cell::RefCell;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use modena_catalog::car::{Car, CarError};

use crate::traversal::OrderTraversal;

/// A customer's order: any number of configured cars, duplicates
/// allowed, held in insertion order.
///
/// Cars sit behind a `RefCell` because a traversal is a live view of
/// the order it came from: additions made while a traversal is open
/// must show up in its later steps. The order belongs to one logical
/// thread; it is not a concurrent structure.
#[derive(Debug, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    cars: RefCell<Vec<Car>>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// `try_next` called after every car has been visited.
    #[error("order traversal exhausted")]
    TraversalExhausted,

    /// A car in the order was never fully built.
    #[error(transparent)]
    Unbuilt(#[from] CarError),
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            cars: RefCell::new(Vec::new()),
        }
    }

    /// Appends a car. There is no de-duplication; the same
    /// configuration can be ordered twice.
    pub fn add_item(&self, car: Car) {
        self.cars.borrow_mut().push(car);
    }

    pub fn len(&self) -> usize {
        self.cars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.borrow().is_empty()
    }

    /// A fresh traversal over this order, starting at position zero.
    pub fn create_iterator(&self) -> OrderTraversal<'_> {
        OrderTraversal::new(self)
    }

    /// Sum of every car's total price, in insertion order.
    pub fn grand_total(&self) -> Result<Decimal, OrderError> {
        let mut total = Decimal::ZERO;
        for car in self.cars.borrow().iter() {
            total += car.total_price()?;
        }
        Ok(total)
    }

    /// The car at `position` once the current contents are sorted by
    /// name, case-insensitively. The sort is stable, so cars with equal
    /// names keep their insertion order; an unset name sorts as the
    /// empty string.
    pub(crate) fn nth_sorted(&self, position: usize) -> Option<Car> {
        let cars = self.cars.borrow();
        let mut by_name: Vec<usize> = (0..cars.len()).collect();
        by_name.sort_by_key(|&index| {
            cars[index]
                .name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
        });
        by_name.get(position).map(|&index| cars[index].clone())
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
