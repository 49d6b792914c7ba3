//! REST API write strategy.
//!
//! Persists through the target application's API: one `POST
//! /api/<resource>` per entity store, `PATCH /api/<resource>/<id>/default`
//! for the default-setting calls, and attach endpoints for the
//! many-to-many links. The created identifier is read from the response's
//! `data.id`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::{
    ArtistRecord, AuthorRecord, CollectionRecord, CollectionTranslationRecord, ContextRecord,
    ContextTranslationRecord, CountryRecord, CountryTranslationRecord, ItemItemLinkRecord,
    ItemItemLinkTranslationRecord, ItemRecord, ItemTranslationRecord, LanguageRecord,
    LanguageTranslationRecord, PartnerRecord, PartnerTranslationRecord, ProjectRecord,
    ProjectTranslationRecord, TagRecord,
};
use inventory_core::types::EntityId;

use crate::strategy::WriteStrategy;

/// API resource name for a target table (`country_translations` ->
/// `country-translation`).
fn resource_for_table(table: &str) -> Option<String> {
    EntityType::ALL
        .iter()
        .find(|ty| ty.table() == table)
        .map(|ty| ty.as_str().replace('_', "-"))
}

pub struct ApiStrategy {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiStrategy {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn into_checked_json(
        resp: reqwest::Response,
    ) -> Result<serde_json::Value, ImportError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImportError::Api {
                status: status.as_u16(),
                body,
            });
        }
        resp.json().await.map_err(ImportError::http)
    }

    /// POST a store request and return the created identifier.
    async fn store<T: Serialize + Sync>(
        &self,
        resource: &str,
        record: &T,
    ) -> Result<EntityId, ImportError> {
        let resp = self
            .authed(self.client.post(self.url(resource)).json(record))
            .send()
            .await
            .map_err(ImportError::http)?;
        let value = Self::into_checked_json(resp).await?;
        value
            .pointer("/data/id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ImportError::Api {
                status: 200,
                body: format!("{resource} store response is missing data.id"),
            })
    }

    /// POST a store request whose response identifier is not needed.
    async fn store_unit<T: Serialize + Sync>(
        &self,
        resource: &str,
        record: &T,
    ) -> Result<(), ImportError> {
        let resp = self
            .authed(self.client.post(self.url(resource)).json(record))
            .send()
            .await
            .map_err(ImportError::http)?;
        Self::into_checked_json(resp).await.map(|_| ())
    }

    async fn patch(&self, path: &str, body: serde_json::Value) -> Result<(), ImportError> {
        let resp = self
            .authed(self.client.patch(self.url(path)).json(&body))
            .send()
            .await
            .map_err(ImportError::http)?;
        Self::into_checked_json(resp).await.map(|_| ())
    }

    async fn attach(&self, path: &str, body: serde_json::Value) -> Result<(), ImportError> {
        let resp = self
            .authed(self.client.post(self.url(path)).json(&body))
            .send()
            .await
            .map_err(ImportError::http)?;
        Self::into_checked_json(resp).await.map(|_| ())
    }
}

#[async_trait]
impl WriteStrategy for ApiStrategy {
    // -- Reference data ---------------------------------------------------

    async fn write_language(&self, record: &LanguageRecord) -> Result<EntityId, ImportError> {
        self.store("language", record).await
    }

    async fn write_language_translation(
        &self,
        record: &LanguageTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("language-translation", record).await
    }

    async fn write_country(&self, record: &CountryRecord) -> Result<EntityId, ImportError> {
        self.store("country", record).await
    }

    async fn write_country_translation(
        &self,
        record: &CountryTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("country-translation", record).await
    }

    // -- Core entities ----------------------------------------------------

    async fn write_context(&self, record: &ContextRecord) -> Result<EntityId, ImportError> {
        self.store("context", record).await
    }

    async fn write_context_translation(
        &self,
        record: &ContextTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("context-translation", record).await
    }

    async fn write_collection(&self, record: &CollectionRecord) -> Result<EntityId, ImportError> {
        self.store("collection", record).await
    }

    async fn write_collection_translation(
        &self,
        record: &CollectionTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("collection-translation", record).await
    }

    async fn write_project(&self, record: &ProjectRecord) -> Result<EntityId, ImportError> {
        self.store("project", record).await
    }

    async fn write_project_translation(
        &self,
        record: &ProjectTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("project-translation", record).await
    }

    async fn write_partner(&self, record: &PartnerRecord) -> Result<EntityId, ImportError> {
        self.store("partner", record).await
    }

    async fn write_partner_translation(
        &self,
        record: &PartnerTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("partner-translation", record).await
    }

    async fn write_item(&self, record: &ItemRecord) -> Result<EntityId, ImportError> {
        self.store("item", record).await
    }

    async fn write_item_translation(
        &self,
        record: &ItemTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("item-translation", record).await
    }

    async fn write_item_link(
        &self,
        record: &ItemItemLinkRecord,
    ) -> Result<EntityId, ImportError> {
        self.store("item-item-link", record).await
    }

    async fn write_item_link_translation(
        &self,
        record: &ItemItemLinkTranslationRecord,
    ) -> Result<(), ImportError> {
        self.store_unit("item-item-link-translation", record).await
    }

    // -- Supporting entities ----------------------------------------------

    async fn write_tag(&self, record: &TagRecord) -> Result<EntityId, ImportError> {
        match self.store("tag", record).await {
            Ok(id) => Ok(id),
            // 422 means the key is taken; resolve to the existing tag.
            Err(ImportError::Api { status: 422, .. }) => self
                .find_by_backward_compatibility("tags", &record.backward_compatibility)
                .await?
                .ok_or_else(|| ImportError::Api {
                    status: 422,
                    body: format!(
                        "tag rejected and not found: {}",
                        record.backward_compatibility
                    ),
                }),
            Err(err) => Err(err),
        }
    }

    async fn write_author(&self, record: &AuthorRecord) -> Result<EntityId, ImportError> {
        match self.store("author", record).await {
            Ok(id) => Ok(id),
            Err(ImportError::Api { status: 422, .. }) => self
                .find_by_backward_compatibility("authors", &record.backward_compatibility)
                .await?
                .ok_or_else(|| ImportError::Api {
                    status: 422,
                    body: format!(
                        "author rejected and not found: {}",
                        record.backward_compatibility
                    ),
                }),
            Err(err) => Err(err),
        }
    }

    async fn write_artist(&self, record: &ArtistRecord) -> Result<EntityId, ImportError> {
        match self.store("artist", record).await {
            Ok(id) => Ok(id),
            Err(ImportError::Api { status: 422, .. }) => self
                .find_by_backward_compatibility("artists", &record.backward_compatibility)
                .await?
                .ok_or_else(|| ImportError::Api {
                    status: 422,
                    body: format!(
                        "artist rejected and not found: {}",
                        record.backward_compatibility
                    ),
                }),
            Err(err) => Err(err),
        }
    }

    // -- Defaults ---------------------------------------------------------

    async fn set_default_language(&self, id: &str) -> Result<(), ImportError> {
        self.patch(&format!("language/{id}/default"), json!({ "is_default": true }))
            .await
    }

    async fn set_default_context(&self, id: &str) -> Result<(), ImportError> {
        self.patch(&format!("context/{id}/default"), json!({ "is_default": true }))
            .await
    }

    // -- Attaches ---------------------------------------------------------

    async fn attach_tags_to_item(
        &self,
        item_id: &str,
        tag_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        self.attach(&format!("item/{item_id}/tags"), json!({ "attach": tag_ids }))
            .await
    }

    async fn attach_artists_to_item(
        &self,
        item_id: &str,
        artist_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        if artist_ids.is_empty() {
            return Ok(());
        }
        self.attach(
            &format!("item/{item_id}/artists"),
            json!({ "attach": artist_ids }),
        )
        .await
    }

    async fn attach_items_to_collection(
        &self,
        collection_id: &str,
        item_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        if item_ids.is_empty() {
            return Ok(());
        }
        self.attach(
            &format!("collection/{collection_id}/items"),
            json!({ "attach": item_ids }),
        )
        .await
    }

    async fn attach_partners_to_collection(
        &self,
        collection_id: &str,
        partner_ids: &[EntityId],
        collection_type: &str,
    ) -> Result<(), ImportError> {
        if partner_ids.is_empty() {
            return Ok(());
        }
        self.attach(
            &format!("collection/{collection_id}/partners"),
            json!({ "attach": partner_ids, "collection_type": collection_type }),
        )
        .await
    }

    // -- Lookups ----------------------------------------------------------

    async fn exists(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<bool, ImportError> {
        Ok(self
            .find_by_backward_compatibility(table, backward_compatibility)
            .await?
            .is_some())
    }

    async fn find_by_backward_compatibility(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<Option<EntityId>, ImportError> {
        let Some(resource) = resource_for_table(table) else {
            return Ok(None);
        };
        let resp = self
            .authed(self.client.get(self.url(&resource)).query(&[(
                "backward_compatibility",
                backward_compatibility,
            )]))
            .send()
            .await
            .map_err(ImportError::http)?;
        // 404 just means no match; every other failure propagates.
        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        let value = Self::into_checked_json(resp).await?;
        let id = value
            .pointer("/data/0/id")
            .or_else(|| value.pointer("/data/id"))
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok(id)
    }
}
