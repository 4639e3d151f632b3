#![no_main]

// Harness: keygen_determinism – the same content always derives the same id,
// and `completed` never influences it.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use execution_keeper::{Address, Coin, ExecutionBuilder};

#[derive(Arbitrary, Debug)]
struct Content {
    recipe: String,
    sender: String,
    coins: Vec<(String, u64)>,
    height: u64,
}

fuzz_target!(|c: Content| {
    let build = || {
        ExecutionBuilder::new(c.recipe.clone(), Address::new(c.sender.clone()))
            .coin_inputs(c.coins.iter().map(|(d, a)| Coin::new(d.clone(), u128::from(*a))).collect())
            .block_height(c.height)
            .build()
    };
    let a = build();
    let mut b = build();
    assert_eq!(a.id, b.id);
    b.completed = true;
    assert_eq!(b.key_gen(), a.id);
});
