//!
//! Keyed persistence for execution records.
//!
//! Layout: one entry per execution, key = the id's UTF-8 bytes, value = the
//! JSON encoding of the whole record. No secondary indexes.

use crate::error::KeeperError;
use crate::keeper::context::Context;
use crate::primitives::{Execution, ExecutionId};
use crate::store::KvStore;

/// Stateless façade over the store carried by a `Context`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keeper;

impl Keeper {
    pub fn new() -> Self {
        Keeper
    }

    /// Writes `exec` under `exec.id`, replacing any existing record.
    ///
    /// Fails before touching the store if the sender is empty.
    pub fn set_execution<S: KvStore + ?Sized>(
        &self,
        ctx: &mut Context<'_, S>,
        exec: &Execution,
    ) -> Result<(), KeeperError> {
        Self::check_sender("set_execution", exec)?;

        let value = serde_json::to_vec(exec)?;
        ctx.store_mut().set(exec.id.as_bytes(), value)?;

        tracing::debug!(id = %exec.id, height = exec.block_height, "stored execution");
        Ok(())
    }

    /// Fetches the record stored under `id`.
    pub fn get_execution<S: KvStore + ?Sized>(
        &self,
        ctx: &Context<'_, S>,
        id: &ExecutionId,
    ) -> Result<Execution, KeeperError> {
        let bytes = ctx.store().get(id.as_bytes())?.ok_or_else(|| {
            tracing::warn!(id = %id, "execution lookup missed");
            KeeperError::NotFound(format!("the execution doesn't exist: {}", id))
        })?;

        let exec = serde_json::from_slice(&bytes)?;
        tracing::debug!(id = %id, "loaded execution");
        Ok(exec)
    }

    /// Replaces the whole record stored under `id` with `exec`.
    ///
    /// The record stays keyed by `id` even when `exec.id` says otherwise.
    /// Never creates: a missing `id` is `NotFound`.
    pub fn update_execution<S: KvStore + ?Sized>(
        &self,
        ctx: &mut Context<'_, S>,
        id: &ExecutionId,
        exec: &Execution,
    ) -> Result<(), KeeperError> {
        if !ctx.store().has(id.as_bytes())? {
            tracing::warn!(id = %id, "update of unknown execution");
            return Err(KeeperError::NotFound(format!(
                "the exec with id {} does not exist",
                id
            )));
        }
        Self::check_sender("update_execution", exec)?;

        if exec.id != *id {
            tracing::debug!(key = %id, content_id = %exec.id, "record id differs from storage key");
        }

        let value = serde_json::to_vec(exec)?;
        ctx.store_mut().set(id.as_bytes(), value)?;

        tracing::debug!(id = %id, completed = exec.completed, "updated execution");
        Ok(())
    }

    fn check_sender(op: &str, exec: &Execution) -> Result<(), KeeperError> {
        if exec.sender.is_empty() {
            tracing::warn!(id = %exec.id, op, "rejected execution without sender");
            return Err(KeeperError::Validation(format!(
                "{}: the sender cannot be empty",
                op
            )));
        }
        Ok(())
    }
}
