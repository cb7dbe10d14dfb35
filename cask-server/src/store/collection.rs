//! Generic CRUD over one collection.
//!
//! Mirrors the behavioral contract all collections share: bodies are taken
//! as raw JSON, stamped with identity and timestamps, then validated into
//! their typed model. Updates shallow-merge the patch over the stored
//! entity before re-validating, so clients can PUT just the fields they
//! changed.

use std::marker::PhantomData;

use serde_json::{Map, Value};

use shared::{merge, util};

use super::{Database, Entity};
use crate::utils::{AppError, AppResult};

/// Interpret a request body as a JSON object.
pub fn as_object(body: Value) -> AppResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(AppError::validation(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// True when the body has no usable value under `key`: the key is missing,
/// null, or an empty string.
pub fn is_blank(map: &Map<String, Value>, key: &str) -> bool {
    match map.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Stamp identity and lifecycle timestamps on a create body.
/// Values the client supplied are kept.
pub fn stamp_new(map: &mut Map<String, Value>) {
    if is_blank(map, "id") {
        map.insert("id".into(), Value::String(util::entity_id()));
    }
    let now = util::now_iso();
    if is_blank(map, "created_at") {
        map.insert("created_at".into(), Value::String(now.clone()));
    }
    if is_blank(map, "updated_at") {
        map.insert("updated_at".into(), Value::String(now));
    }
}

/// Decode a prepared JSON value into its typed entity. Failures are 400s.
pub fn decode<T: Entity>(value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|err| AppError::validation(format!("invalid {} payload: {err}", T::LABEL)))
}

/// Shallow-merge `patch` over the stored entity, pin the id from the URL
/// path and restamp `updated_at`.
pub fn merge_patch<T: Entity>(
    existing: &T,
    patch: Map<String, Value>,
    id: &str,
) -> AppResult<Value> {
    let Value::Object(base) = serde_json::to_value(existing)? else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "stored {} did not serialize to an object",
            T::LABEL
        )));
    };
    let mut merged = merge::shallow_merge(base, patch);
    merged.insert("id".into(), Value::String(id.to_string()));
    merged.insert("updated_at".into(), Value::String(util::now_iso()));
    Ok(Value::Object(merged))
}

/// Typed CRUD handle over one collection.
///
/// Orders do not go through this for writes; their handlers run the same
/// stamping and merging inside a single [`Database::mutate`] cycle so stock
/// adjustments persist atomically with the order.
pub struct Collection<T: Entity> {
    db: Database,
    _entity: PhantomData<T>,
}

impl<T: Entity> Collection<T> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(T::collection(&self.db.read().await?).clone())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        Ok(T::collection(&self.db.read().await?)
            .iter()
            .find(|entity| entity.id() == id)
            .cloned())
    }

    pub async fn create(&self, body: Value) -> AppResult<T> {
        let mut map = as_object(body)?;
        stamp_new(&mut map);
        let entity: T = decode(Value::Object(map))?;
        let created = entity.clone();
        self.db
            .mutate(move |doc| {
                T::collection_mut(doc).push(entity);
                Ok(())
            })
            .await?;
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: Value) -> AppResult<T> {
        let patch = as_object(patch)?;
        let id = id.to_string();
        self.db
            .mutate(move |doc| {
                let slot = T::collection_mut(doc);
                let pos = slot
                    .iter()
                    .position(|entity| entity.id() == id)
                    .ok_or_else(|| {
                        AppError::not_found(format!("{} {id} not found", T::LABEL))
                    })?;
                let updated: T = decode(merge_patch(&slot[pos], patch, &id)?)?;
                slot[pos] = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.db
            .mutate(move |doc| {
                let slot = T::collection_mut(doc);
                let pos = slot
                    .iter()
                    .position(|entity| entity.id() == id)
                    .ok_or_else(|| {
                        AppError::not_found(format!("{} {id} not found", T::LABEL))
                    })?;
                slot.remove(pos);
                Ok(())
            })
            .await
    }
}
