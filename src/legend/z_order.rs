//! Draw/display order maintenance for legend items.
//!
//! Convention: the item with the smallest `z_order` is the first legend
//! entry and is painted first (bottom layer); the item with the largest
//! `z_order` is the last entry and is painted last (top layer, visually
//! wins overlaps). The list itself is kept sorted ascending by `z_order`.

use rustc_hash::FxHashMap;

use super::classify::LegendItem;
use super::LegendValue;

/// `key → z_order` mapping emitted after a reorder, consumed by the
/// draw-order-dependent rendering collaborator. Keys use the hidden-value
/// encoding (null as `"null"`).
pub type ZOrderMap = FxHashMap<String, usize>;

/// Sort items ascending by `z_order` for display.
pub fn sort_for_display(items: &mut [LegendItem]) {
    items.sort_by_key(|it| it.z_order);
}

/// Snapshot the current `key → z_order` assignment.
#[must_use]
pub fn z_order_map(items: &[LegendItem]) -> ZOrderMap {
    items
        .iter()
        .map(|it| (it.value.key().to_owned(), it.z_order))
        .collect()
}

/// Move `dragged` to `target`'s former position and renumber.
///
/// The dragged item is removed from the list and reinserted at the position
/// the target occupied before the removal, then every item's `z_order` is
/// renumbered to the contiguous sequence `0..n-1` matching the new list
/// order. Returns the resulting [`ZOrderMap`], or `None` for the no-op
/// cases (`dragged == target`, either value absent).
pub fn reorder(
    items: &mut Vec<LegendItem>,
    dragged: &LegendValue,
    target: &LegendValue,
) -> Option<ZOrderMap> {
    if dragged == target {
        return None;
    }
    let dragged_idx = items.iter().position(|it| &it.value == dragged)?;
    let target_idx = items.iter().position(|it| &it.value == target)?;

    let moved = items.remove(dragged_idx);
    items.insert(target_idx, moved);

    for (z, item) in items.iter_mut().enumerate() {
        item.z_order = z;
    }
    Some(z_order_map(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PointShape;

    fn item(value: LegendValue, z_order: usize) -> LegendItem {
        LegendItem {
            value,
            color: "#888888".to_owned(),
            shape: PointShape::Circle,
            count: 1,
            is_visible: true,
            z_order,
            extracted_from_other: false,
        }
    }

    fn sample() -> Vec<LegendItem> {
        vec![
            item(LegendValue::Value("A".to_owned()), 0),
            item(LegendValue::Value("B".to_owned()), 1),
            item(LegendValue::Value("C".to_owned()), 2),
            item(LegendValue::Null, 3),
        ]
    }

    fn order(items: &[LegendItem]) -> Vec<&str> {
        items.iter().map(|it| it.value.key()).collect()
    }

    #[test]
    fn drag_down_inserts_after_target_position() {
        let mut items = sample();
        let map = reorder(
            &mut items,
            &LegendValue::Value("A".to_owned()),
            &LegendValue::Value("C".to_owned()),
        )
        .unwrap();

        assert_eq!(order(&items), ["B", "C", "A", "null"]);
        assert_eq!(map["A"], 2);
        assert_eq!(map["B"], 0);
        assert_eq!(map["null"], 3);
    }

    #[test]
    fn drag_up_inserts_before_target() {
        let mut items = sample();
        let _ = reorder(
            &mut items,
            &LegendValue::Null,
            &LegendValue::Value("B".to_owned()),
        )
        .unwrap();
        assert_eq!(order(&items), ["A", "null", "B", "C"]);
    }

    #[test]
    fn z_orders_stay_contiguous_after_reorder() {
        let mut items = sample();
        let _ = reorder(
            &mut items,
            &LegendValue::Value("C".to_owned()),
            &LegendValue::Value("A".to_owned()),
        )
        .unwrap();
        let orders: Vec<usize> = items.iter().map(|it| it.z_order).collect();
        assert_eq!(orders, [0, 1, 2, 3]);
    }

    #[test]
    fn self_drop_is_a_no_op() {
        let mut items = sample();
        let before = items.clone();
        let value = LegendValue::Value("B".to_owned());
        assert!(reorder(&mut items, &value, &value).is_none());
        assert_eq!(items, before);
    }

    #[test]
    fn missing_values_are_a_no_op() {
        let mut items = sample();
        let before = items.clone();
        assert!(reorder(
            &mut items,
            &LegendValue::Value("ghost".to_owned()),
            &LegendValue::Value("A".to_owned()),
        )
        .is_none());
        assert!(reorder(
            &mut items,
            &LegendValue::Value("A".to_owned()),
            &LegendValue::Value("ghost".to_owned()),
        )
        .is_none());
        assert_eq!(items, before);
    }

    #[test]
    fn sort_for_display_orders_by_z() {
        let mut items = vec![
            item(LegendValue::Value("B".to_owned()), 1),
            item(LegendValue::Value("A".to_owned()), 0),
        ];
        sort_for_display(&mut items);
        assert_eq!(order(&items), ["A", "B"]);
    }
}
