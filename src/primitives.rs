use std::fmt;

use crate::crypto::{ClassicHasher, Hasher};
use crate::keygen::IdGenerator;
use crate::types::{Amount, BlockHeight};

// --- Identities -------------------------------------------------------------

/// Account identity of an execution owner, e.g. `cosmos1y8v...`.
/// An empty address is representable but can never be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Address(addr.into())
    }

    /// True when the address carries no identity: zero length or only
    /// whitespace.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage key of an execution.
///
/// Assigned once from the content fingerprint at creation. After an update
/// the stored record may no longer hash to this key; the key still wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(pub String);

impl ExecutionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes used as the key in the backing store.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionId {
    fn from(s: &str) -> Self {
        ExecutionId(s.to_string())
    }
}

impl From<String> for ExecutionId {
    fn from(s: String) -> Self {
        ExecutionId(s)
    }
}

/// 32-byte digest of an execution's semantic content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<Fingerprint> for ExecutionId {
    fn from(fp: Fingerprint) -> Self {
        ExecutionId(fp.to_hex())
    }
}

// --- Resources --------------------------------------------------------------

/// A fungible amount of one denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Amount) -> Self {
        Coin { denom: denom.into(), amount }
    }
}

/// Named attribute on an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct KeyValue<V> {
    pub key: String,
    pub value: V,
}

impl<V> KeyValue<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        KeyValue { key: key.into(), value }
    }
}

/// Non-fungible resource consumed or produced by an execution.
///
/// Doubles are carried as decimal strings so that the canonical encoding
/// never depends on float formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: String,
    pub cookbook_id: String,
    pub sender: Address,
    pub node_version: String,
    pub doubles: Vec<KeyValue<String>>,
    pub longs: Vec<KeyValue<i64>>,
    pub strings: Vec<KeyValue<String>>,
    pub owner_recipe_id: String,
    pub owner_trade_id: String,
    pub tradeable: bool,
    pub last_update: BlockHeight,
    pub transfer_fee: u64,
}

// --- Execution --------------------------------------------------------------

/// A scheduled recipe run owned by `sender`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Execution {
    pub id: ExecutionId,
    pub recipe_id: String,
    pub coin_inputs: Vec<Coin>,
    pub coin_outputs: Vec<Coin>,
    pub item_inputs: Vec<Item>,
    pub item_outputs: Vec<Item>,
    /// Height at or after which the execution may complete.
    pub block_height: BlockHeight,
    pub sender: Address,
    pub completed: bool,
}

impl Execution {
    /// Content fingerprint under the CLASSIC suite. Ignores `id` and `completed`.
    pub fn fingerprint(&self) -> Fingerprint {
        IdGenerator::<ClassicHasher>::default().fingerprint(self)
    }

    /// Derives the storage key from the current content.
    ///
    /// Does not assign it: `id` is fixed at creation.
    pub fn key_gen(&self) -> ExecutionId {
        IdGenerator::<ClassicHasher>::default().key_gen(self)
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Assembles an `Execution` and assigns its id.
#[derive(Debug, Clone, Default)]
pub struct ExecutionBuilder {
    recipe_id: String,
    coin_inputs: Vec<Coin>,
    coin_outputs: Vec<Coin>,
    item_inputs: Vec<Item>,
    item_outputs: Vec<Item>,
    block_height: BlockHeight,
    sender: Address,
}

impl ExecutionBuilder {
    pub fn new(recipe_id: impl Into<String>, sender: Address) -> Self {
        ExecutionBuilder {
            recipe_id: recipe_id.into(),
            sender,
            ..Default::default()
        }
    }

    pub fn coin_inputs(mut self, coins: Vec<Coin>) -> Self {
        self.coin_inputs = coins;
        self
    }

    pub fn coin_outputs(mut self, coins: Vec<Coin>) -> Self {
        self.coin_outputs = coins;
        self
    }

    pub fn item_inputs(mut self, items: Vec<Item>) -> Self {
        self.item_inputs = items;
        self
    }

    pub fn item_outputs(mut self, items: Vec<Item>) -> Self {
        self.item_outputs = items;
        self
    }

    pub fn block_height(mut self, height: BlockHeight) -> Self {
        self.block_height = height;
        self
    }

    /// Schedules completion `interval` blocks after `current`.
    pub fn scheduled(mut self, current: BlockHeight, interval: BlockHeight) -> Self {
        self.block_height = current.saturating_add(interval);
        self
    }

    /// Builds with the CLASSIC suite.
    pub fn build(self) -> Execution {
        self.build_with(&IdGenerator::<ClassicHasher>::default())
    }

    pub fn build_with<H: Hasher>(self, generator: &IdGenerator<H>) -> Execution {
        let mut exec = Execution {
            id: ExecutionId::default(),
            recipe_id: self.recipe_id,
            coin_inputs: self.coin_inputs,
            coin_outputs: self.coin_outputs,
            item_inputs: self.item_inputs,
            item_outputs: self.item_outputs,
            block_height: self.block_height,
            sender: self.sender,
            completed: false,
        };
        exec.id = generator.key_gen(&exec);
        exec
    }
}
