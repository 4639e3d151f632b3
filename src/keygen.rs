//!
//! Identifier generation for executions.
//!
//! An execution id is the hex digest of a canonical byte encoding of the
//! record's semantic content. The encoding is:
//!
//! * a fixed domain prefix, then each field behind a one-byte tag, in the
//!   order recipe_id, coin_inputs, coin_outputs, item_inputs, item_outputs,
//!   block_height, sender;
//! * strings as `u64` little-endian length followed by UTF-8 bytes;
//! * sequences as `u64` little-endian count followed by the elements **in the
//!   order given**. Reordering inputs or outputs therefore changes the id;
//! * integers little-endian at their declared width.
//!
//! `id` and `completed` never enter the encoding.

use crate::crypto::{ClassicHasher, Hasher};
use crate::primitives::{Coin, Execution, ExecutionId, Fingerprint, Item, KeyValue};

const DOMAIN: &[u8] = b"execution-keeper/execution/v1";

const TAG_RECIPE_ID: u8 = 0x01;
const TAG_COIN_INPUTS: u8 = 0x02;
const TAG_COIN_OUTPUTS: u8 = 0x03;
const TAG_ITEM_INPUTS: u8 = 0x04;
const TAG_ITEM_OUTPUTS: u8 = 0x05;
const TAG_BLOCK_HEIGHT: u8 = 0x06;
const TAG_SENDER: u8 = 0x07;

/// Derives execution ids with the digest suite `H`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator<H: Hasher = ClassicHasher> {
    hasher: H,
}

impl<H: Hasher> IdGenerator<H> {
    pub fn new(hasher: H) -> Self {
        IdGenerator { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Digest of `canonical_bytes(exec)`.
    pub fn fingerprint(&self, exec: &Execution) -> Fingerprint {
        Fingerprint(self.hasher.digest(&canonical_bytes(exec)))
    }

    /// Lowercase hex of the fingerprint. Always 64 characters.
    pub fn key_gen(&self, exec: &Execution) -> ExecutionId {
        let id = ExecutionId::from(self.fingerprint(exec));
        tracing::trace!(id = %id, suite = ?self.hasher.suite(), "derived execution id");
        id
    }
}

/// Canonical encoding of the content fields of `exec`.
pub fn canonical_bytes(exec: &Execution) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(256);
    bytes.extend_from_slice(DOMAIN);

    bytes.push(TAG_RECIPE_ID);
    append_str(&mut bytes, &exec.recipe_id);

    bytes.push(TAG_COIN_INPUTS);
    append_coins(&mut bytes, &exec.coin_inputs);

    bytes.push(TAG_COIN_OUTPUTS);
    append_coins(&mut bytes, &exec.coin_outputs);

    bytes.push(TAG_ITEM_INPUTS);
    append_items(&mut bytes, &exec.item_inputs);

    bytes.push(TAG_ITEM_OUTPUTS);
    append_items(&mut bytes, &exec.item_outputs);

    bytes.push(TAG_BLOCK_HEIGHT);
    bytes.extend_from_slice(&exec.block_height.to_le_bytes());

    bytes.push(TAG_SENDER);
    append_str(&mut bytes, exec.sender.as_str());

    bytes
}

fn append_len(bytes: &mut Vec<u8>, len: usize) {
    bytes.extend_from_slice(&(len as u64).to_le_bytes());
}

fn append_str(bytes: &mut Vec<u8>, s: &str) {
    append_len(bytes, s.len());
    bytes.extend_from_slice(s.as_bytes());
}

fn append_coins(bytes: &mut Vec<u8>, coins: &[Coin]) {
    append_len(bytes, coins.len());
    for coin in coins {
        append_str(bytes, &coin.denom);
        bytes.extend_from_slice(&coin.amount.to_le_bytes());
    }
}

fn append_kvs<V>(bytes: &mut Vec<u8>, kvs: &[KeyValue<V>], mut value: impl FnMut(&mut Vec<u8>, &V)) {
    append_len(bytes, kvs.len());
    for kv in kvs {
        append_str(bytes, &kv.key);
        value(bytes, &kv.value);
    }
}

fn append_items(bytes: &mut Vec<u8>, items: &[Item]) {
    append_len(bytes, items.len());
    for item in items {
        append_str(bytes, &item.id);
        append_str(bytes, &item.cookbook_id);
        append_str(bytes, item.sender.as_str());
        append_str(bytes, &item.node_version);
        append_kvs(bytes, &item.doubles, |b, v| append_str(b, v));
        append_kvs(bytes, &item.longs, |b, v| b.extend_from_slice(&v.to_le_bytes()));
        append_kvs(bytes, &item.strings, |b, v| append_str(b, v));
        append_str(bytes, &item.owner_recipe_id);
        append_str(bytes, &item.owner_trade_id);
        bytes.push(u8::from(item.tradeable));
        bytes.extend_from_slice(&item.last_update.to_le_bytes());
        bytes.extend_from_slice(&item.transfer_fee.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::FipsHasher;
    use crate::primitives::{Address, ExecutionBuilder};

    fn base() -> Execution {
        ExecutionBuilder::new("recipe-1", Address::new("cosmos1alice"))
            .coin_inputs(vec![Coin::new("wood", 3), Coin::new("stone", 2)])
            .coin_outputs(vec![Coin::new("plank", 1)])
            .block_height(42)
            .build()
    }

    #[test]
    fn key_gen_is_deterministic() {
        let exec = base();
        assert_eq!(exec.key_gen(), exec.key_gen());
        assert_eq!(base().id, exec.id);
    }

    #[test]
    fn id_and_completed_are_excluded() {
        let exec = base();
        let mut other = exec.clone();
        other.id = ExecutionId::from("something-else");
        other.completed = true;
        assert_eq!(canonical_bytes(&exec), canonical_bytes(&other));
    }

    #[test]
    fn input_order_is_significant() {
        let exec = base();
        let mut swapped = exec.clone();
        swapped.coin_inputs.reverse();
        assert_ne!(exec.key_gen(), swapped.key_gen());
    }

    #[test]
    fn length_prefix_prevents_boundary_shifts() {
        // "ab" + "c" must not collide with "a" + "bc".
        let mut left = base();
        left.recipe_id = "ab".into();
        left.sender = Address::new("c");
        let mut right = base();
        right.recipe_id = "a".into();
        right.sender = Address::new("bc");
        assert_ne!(left.key_gen(), right.key_gen());
    }

    #[test]
    fn coins_moving_between_inputs_and_outputs_change_the_id() {
        let exec = base();
        let mut moved = exec.clone();
        let coin = moved.coin_inputs.pop().unwrap();
        moved.coin_outputs.push(coin);
        assert_ne!(exec.key_gen(), moved.key_gen());
    }

    #[test]
    fn item_attributes_feed_the_digest() {
        let mut exec = base();
        exec.item_inputs.push(Item {
            id: "item-1".into(),
            strings: vec![KeyValue::new("Name", "Raichu".to_string())],
            ..Default::default()
        });
        let before = exec.key_gen();
        exec.item_inputs[0].strings[0].value = "Pikachu".into();
        assert_ne!(before, exec.key_gen());
    }

    fn minimal() -> Execution {
        ExecutionBuilder::new("r", Address::new("s")).build()
    }

    #[test]
    fn canonical_bytes_layout_is_fixed() {
        let bytes = canonical_bytes(&minimal());
        let mut expected = DOMAIN.to_vec();
        expected.extend_from_slice(&[0x01, 1, 0, 0, 0, 0, 0, 0, 0, b'r']);
        for tag in [0x02, 0x03, 0x04, 0x05] {
            expected.push(tag);
            expected.extend_from_slice(&[0; 8]);
        }
        expected.push(0x06);
        expected.extend_from_slice(&[0; 8]);
        expected.extend_from_slice(&[0x07, 1, 0, 0, 0, 0, 0, 0, 0, b's']);
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), 94);
    }

    // Stored records are keyed by these values; changing the encoding
    // orphans every existing record.
    #[test]
    fn classic_id_is_stable() {
        assert_eq!(
            minimal().id.as_str(),
            "ef0fc2df7c381fea67a648942f9f8667862ec191fd41b0c35159ac61b80c6cd3"
        );
    }

    #[test]
    fn fips_id_is_stable() {
        assert_eq!(
            IdGenerator::new(FipsHasher).key_gen(&minimal()).as_str(),
            "af32fc77b3c57b03386a47237e84a4e6bde269f1ecf978852e4afc8870c19c01"
        );
    }

    fn named_item(name: &str) -> Item {
        Item {
            id: format!("item-{}", name),
            strings: vec![KeyValue::new("Name", name.to_string())],
            ..Default::default()
        }
    }

    #[test]
    fn item_order_is_significant() {
        let mut exec = base();
        exec.item_inputs = vec![named_item("Raichu"), named_item("Zombie")];
        exec.item_outputs = vec![named_item("Pikachu"), named_item("Ghost")];

        let mut inputs_swapped = exec.clone();
        inputs_swapped.item_inputs.reverse();
        assert_ne!(exec.key_gen(), inputs_swapped.key_gen());

        let mut outputs_swapped = exec.clone();
        outputs_swapped.item_outputs.reverse();
        assert_ne!(exec.key_gen(), outputs_swapped.key_gen());
    }

    #[test]
    fn coin_output_order_is_significant() {
        let mut exec = base();
        exec.coin_outputs.push(Coin::new("nail", 4));
        let mut swapped = exec.clone();
        swapped.coin_outputs.reverse();
        assert_ne!(exec.key_gen(), swapped.key_gen());
    }

    #[test]
    fn fips_generator_yields_distinct_ids() {
        let exec = base();
        let fips = IdGenerator::new(FipsHasher).key_gen(&exec);
        assert_ne!(fips, exec.key_gen());
        assert_eq!(fips.as_str().len(), 64);
    }
}
