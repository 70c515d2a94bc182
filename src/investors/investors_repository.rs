use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::investors_errors::{InvestorError, Result};
use super::investors_model::{
    Investor, InvestorRow, InvestorRowPatch, InvestorUpdate, NewInvestor, NewInvestorRow,
};
use super::investors_traits::InvestorPersistence;
use crate::auth::{AuthProviderTrait, UserIdentity};
use crate::rowstore::{Filter, OrderBy, RowStoreClient, RowStoreError, INVESTORS_TABLE};
use crate::storage::{JsonSlot, INVESTORS_SLOT};

/// Local-slot adapter: the collection lives in a named JSON slot and every
/// mutation rewrites it in full.
pub struct LocalInvestorRepository {
    slot: JsonSlot,
}

impl LocalInvestorRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            slot: JsonSlot::new(base_dir, INVESTORS_SLOT),
        }
    }
}

#[async_trait]
impl InvestorPersistence for LocalInvestorRepository {
    async fn load_all(&self) -> Result<Vec<Investor>> {
        Ok(self.slot.load())
    }

    async fn create(&self, data: NewInvestor) -> Result<Investor> {
        let now = Utc::now();
        Ok(Investor {
            id: uuid::Uuid::new_v4().to_string(),
            name: data.name,
            investor_type: data.investor_type,
            email: data.email,
            phone: data.phone,
            website: data.website,
            contact_person: data.contact_person,
            location: data.location,
            investment_focus: data.investment_focus,
            stage_preference: data.stage_preference,
            ticket_size: data.ticket_size,
            status: data.status,
            notes: data.notes,
            next_action: data.next_action,
            next_action_date: data.next_action_date,
            tags: data.tags,
            date_added: now,
            last_updated: now,
        })
    }

    async fn apply_update(&self, _id: &str, _patch: &InvestorUpdate) -> Result<()> {
        // The store's snapshot persistence carries the change.
        Ok(())
    }

    async fn remove(&self, _id: &str) -> Result<()> {
        Ok(())
    }

    async fn persist_snapshot(&self, records: &[Investor]) -> Result<()> {
        self.slot.save(records)?;
        Ok(())
    }
}

/// Remote row-store adapter: write-through against the backend `investors`
/// table, scoped to the current user identity on every operation.
pub struct RemoteInvestorRepository<C: RowStoreClient> {
    client: Arc<C>,
    auth: Arc<dyn AuthProviderTrait>,
}

impl<C: RowStoreClient> RemoteInvestorRepository<C> {
    pub fn new(client: Arc<C>, auth: Arc<dyn AuthProviderTrait>) -> Self {
        Self { client, auth }
    }

    fn current_user(&self) -> Result<UserIdentity> {
        self.auth.current_user().ok_or(InvestorError::NotAuthenticated)
    }
}

#[async_trait]
impl<C: RowStoreClient> InvestorPersistence for RemoteInvestorRepository<C> {
    async fn load_all(&self) -> Result<Vec<Investor>> {
        let user = self.current_user()?;
        debug!("Fetching investors for user {}", user.id);

        let rows = self
            .client
            .select(
                INVESTORS_TABLE,
                &[Filter::eq("user_id", user.id.clone())],
                Some(&OrderBy::desc("created_at")),
                None,
            )
            .await?;

        rows.into_iter()
            .map(|row| {
                let row: InvestorRow =
                    serde_json::from_value(row).map_err(RowStoreError::Serialization)?;
                Ok(Investor::from(row))
            })
            .collect()
    }

    async fn create(&self, data: NewInvestor) -> Result<Investor> {
        let user = self.current_user()?;
        let row = NewInvestorRow::from_form(&user.id, data);
        let payload = serde_json::to_value(&row).map_err(RowStoreError::Serialization)?;

        let stored = self.client.insert_returning(INVESTORS_TABLE, payload).await?;
        let stored: InvestorRow =
            serde_json::from_value(stored).map_err(RowStoreError::Serialization)?;
        Ok(stored.into())
    }

    async fn apply_update(&self, id: &str, patch: &InvestorUpdate) -> Result<()> {
        let user = self.current_user()?;
        let payload = serde_json::to_value(InvestorRowPatch::from(patch))
            .map_err(RowStoreError::Serialization)?;

        self.client
            .update(
                INVESTORS_TABLE,
                &[Filter::eq("id", id), Filter::eq("user_id", user.id)],
                payload,
            )
            .await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let user = self.current_user()?;
        self.client
            .delete(
                INVESTORS_TABLE,
                &[Filter::eq("id", id), Filter::eq("user_id", user.id)],
            )
            .await?;
        Ok(())
    }

    async fn persist_snapshot(&self, _records: &[Investor]) -> Result<()> {
        // Row writes above are already authoritative.
        Ok(())
    }
}
