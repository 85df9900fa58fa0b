use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use modena_core::money::{format_usd, MoneyError, Price};

/// A single priced add-on. Immutable once constructed; the negative
/// check happens here and is never re-run during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    name: String,
    price: Price,
}

impl FeatureItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, MoneyError> {
        Ok(Self {
            name: name.into(),
            price: Price::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price.amount()
    }
}

/// A named collection of features and nested groups.
///
/// Children are owned exclusively by their parent, so the structure is a
/// tree by construction. Insertion order drives display; pricing does
/// not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGroup {
    name: String,
    features: Vec<Feature>,
}

impl FeatureGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Appends a feature at the end of the group.
    pub fn add_feature(&mut self, feature: impl Into<Feature>) {
        self.features.push(feature.into());
    }

    /// Removes the first child equal to `feature`. Removing something
    /// that is not present changes nothing; the return value says
    /// whether a child was dropped.
    pub fn remove_feature(&mut self, feature: &Feature) -> bool {
        match self.features.iter().position(|child| child == feature) {
            Some(index) => {
                self.features.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of all descendant prices, recomputed from scratch on every
    /// call. A group has no price of its own.
    pub fn price(&self) -> Decimal {
        self.features.iter().map(Feature::price).sum()
    }

    /// Header line for the group, then every child at one deeper indent.
    pub fn display_lines(&self, depth: usize) -> Vec<String> {
        let mut lines = vec![format!("{}{}:", "  ".repeat(depth), self.name)];
        for feature in &self.features {
            lines.extend(feature.display_lines(depth + 1));
        }
        lines
    }
}

/// A node in the feature tree: either one priced item or a group of
/// further nodes. The variant set is closed; pricing and display match
/// over exactly these two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Item(FeatureItem),
    Group(FeatureGroup),
}

impl Feature {
    /// An item's own price, or the recursive sum of a group's children.
    pub fn price(&self) -> Decimal {
        match self {
            Feature::Item(item) => item.price(),
            Feature::Group(group) => group.price(),
        }
    }

    /// Console lines for this subtree, two spaces of indent per depth
    /// level, children in insertion order.
    pub fn display_lines(&self, depth: usize) -> Vec<String> {
        match self {
            Feature::Item(item) => vec![format!(
                "{}- {}: {}",
                "  ".repeat(depth),
                item.name(),
                format_usd(item.price())
            )],
            Feature::Group(group) => group.display_lines(depth),
        }
    }
}

impl From<FeatureItem> for Feature {
    fn from(item: FeatureItem) -> Self {
        Feature::Item(item)
    }
}

impl From<FeatureGroup> for Feature {
    fn from(group: FeatureGroup) -> Self {
        Feature::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn item(name: &str, price: Decimal) -> FeatureItem {
        FeatureItem::new(name, price).unwrap()
    }

    fn sports_tree() -> FeatureGroup {
        let mut tech = FeatureGroup::new("Tech Features");
        tech.add_feature(item("Premium Sound System", dec!(1500.99)));
        tech.add_feature(item("Bluetooth Connectivity", dec!(1200.99)));

        let mut paint = FeatureGroup::new("Paint Job");
        paint.add_feature(item("Red Paint", dec!(1000.99)));
        paint.add_feature(item("Blue Paint", dec!(1000.99)));

        let mut root = FeatureGroup::new("Personalized Sports Car Features");
        root.add_feature(item("Turbo Engine", dec!(2000.50)));
        root.add_feature(tech);
        root.add_feature(paint);
        root
    }

    #[test]
    fn item_prices_are_validated_at_construction() {
        assert!(FeatureItem::new("Ejector Seat", dec!(-1)).is_err());
    }

    #[test]
    fn a_leaf_prices_and_renders_itself() {
        let leaf = Feature::from(item("LCD Screen", dec!(500.89)));

        assert_eq!(leaf.price(), dec!(500.89));
        assert_eq!(leaf.display_lines(0), vec!["- LCD Screen: $500.89"]);
    }

    #[test]
    fn an_empty_group_prices_to_zero() {
        let group = FeatureGroup::new("Extras");

        assert!(group.is_empty());
        assert_eq!(group.price(), dec!(0));
        assert_eq!(group.display_lines(0), vec!["Extras:"]);
    }

    #[test]
    fn a_nested_tree_sums_every_descendant() {
        assert_eq!(sports_tree().price(), dec!(6704.46));
    }

    #[test]
    fn display_walks_depth_first_in_insertion_order() {
        let lines = sports_tree().display_lines(0);

        assert_eq!(
            lines,
            vec![
                "Personalized Sports Car Features:",
                "  - Turbo Engine: $2000.50",
                "  Tech Features:",
                "    - Premium Sound System: $1500.99",
                "    - Bluetooth Connectivity: $1200.99",
                "  Paint Job:",
                "    - Red Paint: $1000.99",
                "    - Blue Paint: $1000.99",
            ]
        );
    }

    #[test]
    fn pricing_and_display_are_idempotent() {
        let tree = sports_tree();

        assert_eq!(tree.price(), tree.price());
        assert_eq!(tree.display_lines(0), tree.display_lines(0));
    }

    #[test]
    fn remove_drops_the_first_matching_child_only() {
        let mut paint = FeatureGroup::new("Paint Job");
        paint.add_feature(item("Blue Paint", dec!(1000.99)));
        paint.add_feature(item("Blue Paint", dec!(1000.99)));

        let target = Feature::from(item("Blue Paint", dec!(1000.99)));
        assert!(paint.remove_feature(&target));
        assert_eq!(paint.len(), 1);
        assert_eq!(paint.price(), dec!(1000.99));
    }

    #[test]
    fn removing_an_absent_feature_changes_nothing() {
        let mut tree = sports_tree();
        let before = tree.clone();

        let absent = Feature::from(item("Sunroof", dec!(899.99)));
        assert!(!tree.remove_feature(&absent));
        assert_eq!(tree, before);
    }

    #[test]
    fn removal_matches_whole_subtrees() {
        let mut tree = sports_tree();

        let mut paint = FeatureGroup::new("Paint Job");
        paint.add_feature(item("Red Paint", dec!(1000.99)));
        paint.add_feature(item("Blue Paint", dec!(1000.99)));

        assert!(tree.remove_feature(&Feature::from(paint)));
        assert_eq!(tree.price(), dec!(4702.48));
    }

    fn arb_feature() -> impl Strategy<Value = Feature> {
        let leaf = (any::<u32>(), "[A-Za-z ]{1,12}").prop_map(|(cents, name)| {
            Feature::from(
                FeatureItem::new(name, Decimal::new(i64::from(cents), 2)).unwrap(),
            )
        });
        leaf.prop_recursive(4, 24, 4, |inner| {
            (prop::collection::vec(inner, 0..4), "[A-Za-z ]{1,12}").prop_map(
                |(children, name)| {
                    let mut group = FeatureGroup::new(name);
                    for child in children {
                        group.add_feature(child);
                    }
                    Feature::from(group)
                },
            )
        })
    }

    fn leaf_prices(feature: &Feature) -> Vec<Decimal> {
        let mut prices = Vec::new();
        let mut stack = vec![feature];
        while let Some(node) = stack.pop() {
            match node {
                Feature::Item(item) => prices.push(item.price()),
                Feature::Group(group) => stack.extend(group.features()),
            }
        }
        prices
    }

    fn node_count(feature: &Feature) -> usize {
        let mut count = 0;
        let mut stack = vec![feature];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Feature::Group(group) = node {
                stack.extend(group.features());
            }
        }
        count
    }

    proptest! {
        #[test]
        fn tree_price_equals_the_sum_of_its_leaves(tree in arb_feature()) {
            let expected: Decimal = leaf_prices(&tree).iter().copied().sum();
            prop_assert_eq!(tree.price(), expected);
        }

        #[test]
        fn display_emits_one_line_per_node(tree in arb_feature()) {
            prop_assert_eq!(tree.display_lines(0).len(), node_count(&tree));
        }
    }
}
