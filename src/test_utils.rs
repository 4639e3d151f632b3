//! Fixtures shared by unit tests, integration tests and benches.
//!
//! Compiled under `cfg(test)` or the `test-utils` feature only.

use crate::primitives::{Address, Coin, Execution, ExecutionBuilder, Item, KeyValue};
use crate::types::BlockHeight;

/// A well-formed bech32 account used throughout the tests.
pub const TEST_SENDER: &str = "cosmos1y8vysg9hmvavkdxpvccv2ve3nssv5avm0kt337";

pub const TEST_COOKBOOK_ID: &str = "cookbook-0001";
pub const TEST_RECIPE_ID: &str = "recipe-0001";

/// Blocks between scheduling and completion for the fixture recipe.
pub const TEST_BLOCK_INTERVAL: BlockHeight = 5;

pub fn test_sender() -> Address {
    Address::new(TEST_SENDER)
}

/// An item named `name`; `ordinal` keeps same-named items distinct.
pub fn gen_item(cookbook_id: &str, sender: &Address, name: &str, ordinal: u32) -> Item {
    Item {
        id: format!("{}-{}-{}", cookbook_id, name.to_lowercase(), ordinal),
        cookbook_id: cookbook_id.to_string(),
        sender: sender.clone(),
        node_version: "0.0.1".to_string(),
        doubles: vec![KeyValue::new("endurance", "100.00".to_string())],
        longs: vec![KeyValue::new("HP", 100)],
        strings: vec![KeyValue::new("Name", name.to_string())],
        tradeable: true,
        ..Default::default()
    }
}

/// An execution of the fixture recipe scheduled `TEST_BLOCK_INTERVAL`
/// blocks after `current_height`: consumes two "Raichu" items and some
/// coins, produces a "Zombie".
pub fn gen_execution(sender: Address, current_height: BlockHeight) -> Execution {
    let inputs = vec![
        gen_item(TEST_COOKBOOK_ID, &sender, "Raichu", 0),
        gen_item(TEST_COOKBOOK_ID, &sender, "Raichu", 1),
    ];
    let outputs = vec![gen_item(TEST_COOKBOOK_ID, &sender, "Zombie", 0)];

    ExecutionBuilder::new(TEST_RECIPE_ID, sender)
        .coin_inputs(vec![Coin::new("wood", 5)])
        .coin_outputs(vec![Coin::new("chair", 1)])
        .item_inputs(inputs)
        .item_outputs(outputs)
        .scheduled(current_height, TEST_BLOCK_INTERVAL)
        .build()
}
