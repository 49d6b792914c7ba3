//! Get-or-create helpers for entities shared across items.
//!
//! Tags, authors, and artists are referenced by many items; the first
//! item to mention one creates it, later items resolve it through the
//! tracker.

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::{ArtistRecord, AuthorRecord, TagRecord};
use inventory_core::types::EntityId;

use crate::context::ImportContext;

pub async fn get_or_create_tag(
    ctx: &mut ImportContext,
    record: &TagRecord,
) -> Result<EntityId, ImportError> {
    if let Some(id) = ctx.entity_uuid(&record.backward_compatibility, EntityType::Tag) {
        return Ok(id);
    }
    if ctx.skip_writes() {
        return Ok(ctx.register_placeholder(&record.backward_compatibility, EntityType::Tag));
    }
    let id = ctx.strategy.write_tag(record).await?;
    ctx.register(id.clone(), &record.backward_compatibility, EntityType::Tag);
    Ok(id)
}

pub async fn get_or_create_author(
    ctx: &mut ImportContext,
    record: &AuthorRecord,
) -> Result<EntityId, ImportError> {
    if let Some(id) = ctx.entity_uuid(&record.backward_compatibility, EntityType::Author) {
        return Ok(id);
    }
    if ctx.skip_writes() {
        return Ok(ctx.register_placeholder(&record.backward_compatibility, EntityType::Author));
    }
    let id = ctx.strategy.write_author(record).await?;
    ctx.register(id.clone(), &record.backward_compatibility, EntityType::Author);
    Ok(id)
}

pub async fn get_or_create_artist(
    ctx: &mut ImportContext,
    record: &ArtistRecord,
) -> Result<EntityId, ImportError> {
    if let Some(id) = ctx.entity_uuid(&record.backward_compatibility, EntityType::Artist) {
        return Ok(id);
    }
    if ctx.skip_writes() {
        return Ok(ctx.register_placeholder(&record.backward_compatibility, EntityType::Artist));
    }
    let id = ctx.strategy.write_artist(record).await?;
    ctx.register(id.clone(), &record.backward_compatibility, EntityType::Artist);
    Ok(id)
}
