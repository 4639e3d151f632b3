#![no_main]

// Harness: keeper_ops – arbitrary sequences of set/get/update against a
// shadow map. Invariants: empty senders are never stored, update never
// creates, get returns exactly the last value written under a key.

use std::collections::HashMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use execution_keeper::{
    Address, Coin, Context, ExecutionBuilder, ExecutionId, Keeper, MemoryStore,
};

#[derive(Arbitrary, Debug)]
enum Op {
    Set { recipe: String, sender: String, amount: u64, height: u64 },
    Get { slot: u8 },
    Update { slot: u8, sender: String, completed: bool },
    GetRaw { id: String },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut store = MemoryStore::new();
    let mut ctx = Context::new(&mut store, 0);
    let keeper = Keeper::new();
    let mut shadow = HashMap::new();
    let mut ids: Vec<ExecutionId> = Vec::new();

    for op in ops {
        match op {
            Op::Set { recipe, sender, amount, height } => {
                let exec = ExecutionBuilder::new(recipe, Address::new(sender))
                    .coin_inputs(vec![Coin::new("coin", u128::from(amount))])
                    .block_height(height)
                    .build();
                match keeper.set_execution(&mut ctx, &exec) {
                    Ok(()) => {
                        ids.push(exec.id.clone());
                        shadow.insert(exec.id.clone(), exec);
                    }
                    Err(e) => {
                        assert!(e.is_validation());
                        assert!(exec.sender.is_empty());
                    }
                }
            }
            Op::Get { slot } => {
                if let Some(id) = ids.get(slot as usize % ids.len().max(1)) {
                    let got = keeper.get_execution(&ctx, id).expect("stored id must resolve");
                    assert_eq!(Some(&got), shadow.get(id));
                }
            }
            Op::Update { slot, sender, completed } => {
                let Some(id) = ids.get(slot as usize % ids.len().max(1)).cloned() else {
                    continue;
                };
                let mut next = shadow[&id].clone();
                next.sender = Address::new(sender);
                next.completed = completed;
                match keeper.update_execution(&mut ctx, &id, &next) {
                    Ok(()) => {
                        shadow.insert(id, next);
                    }
                    Err(e) => {
                        assert!(e.is_validation());
                        assert!(next.sender.is_empty());
                    }
                }
            }
            Op::GetRaw { id } => {
                let id = ExecutionId::from(id);
                match keeper.get_execution(&ctx, &id) {
                    Ok(got) => assert_eq!(Some(&got), shadow.get(&id)),
                    Err(e) => assert!(e.is_not_found() && !shadow.contains_key(&id)),
                }
            }
        }
    }
    assert_eq!(ctx.store().len(), shadow.len());
});
