//! Inventory domain: tests for slot stacking and ordering.

use super::resources::Inventory;

#[test]
fn test_first_pickup_appends_a_slot() {
    let mut inventory = Inventory::default();
    inventory.add("item_tea_leaf");

    assert_eq!(inventory.slots.len(), 1);
    assert_eq!(inventory.count("item_tea_leaf"), 1);
}

#[test]
fn test_repeat_pickups_stack_instead_of_appending() {
    let mut inventory = Inventory::default();
    inventory.add("item_spirit_ember");
    inventory.add("item_spirit_ember");
    inventory.add("item_spirit_ember");

    assert_eq!(inventory.slots.len(), 1);
    assert_eq!(inventory.count("item_spirit_ember"), 3);
}

#[test]
fn test_slot_order_follows_first_pickup_order() {
    let mut inventory = Inventory::default();
    inventory.add("item_old_lantern");
    inventory.add("item_tea_leaf");
    inventory.add("item_old_lantern");

    let ids: Vec<&str> = inventory.slots.iter().map(|s| s.item_id.as_str()).collect();
    assert_eq!(ids, vec!["item_old_lantern", "item_tea_leaf"]);
    assert_eq!(inventory.total_items(), 3);
}

#[test]
fn test_count_for_unknown_item_is_zero() {
    let inventory = Inventory::default();
    assert_eq!(inventory.count("item_never_seen"), 0);
    assert_eq!(inventory.total_items(), 0);
}
