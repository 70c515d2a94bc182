use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{debug, error};

use super::investors_errors::{InvestorError, Result};
use super::investors_model::{
    Investor, InvestorOutreach, InvestorStatus, InvestorType, InvestorUpdate, NewInvestor,
    StagePreference,
};
use super::investors_traits::InvestorPersistence;

/// Default number of rows shown in dashboard summaries.
pub const DEFAULT_DASHBOARD_LIMIT: usize = 4;

/// Store for the investor collection.
///
/// One service covers both persistence variants: the adapter decides whether
/// records live in a local slot or a remote row-store. Mutations are
/// write-through — the adapter must succeed before the in-memory collection
/// changes, so a failed remote write never leaves a phantom record visible.
pub struct InvestorService<P: InvestorPersistence> {
    persistence: Arc<P>,
    investors: RwLock<Vec<Investor>>,
    is_loading: AtomicBool,
    has_db_error: AtomicBool,
}

impl<P: InvestorPersistence> InvestorService<P> {
    pub fn new(persistence: Arc<P>) -> Self {
        Self {
            persistence,
            investors: RwLock::new(Vec::new()),
            is_loading: AtomicBool::new(false),
            has_db_error: AtomicBool::new(false),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Investor>> {
        self.investors.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Investor>> {
        self.investors.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Flags a missing-schema failure. Sticky: a later success does not clear
    /// it.
    fn note_failure(&self, err: &InvestorError) {
        if err.is_setup_required() {
            self.has_db_error.store(true, Ordering::SeqCst);
        }
    }

    /// Current collection snapshot.
    pub fn investors(&self) -> Vec<Investor> {
        self.read().clone()
    }

    /// True while a `refresh` round trip is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    /// True once any operation has failed because the backend schema is
    /// missing. Signals that first-time setup is required.
    pub fn has_db_error(&self) -> bool {
        self.has_db_error.load(Ordering::SeqCst)
    }

    /// Replaces the collection from authoritative storage. Call whenever the
    /// authenticated identity becomes available or changes.
    ///
    /// An absent identity is a silent no-op (sign-in simply hasn't happened
    /// yet). Any other failure leaves the previous collection in place.
    pub async fn refresh(&self) -> Result<()> {
        self.is_loading.store(true, Ordering::SeqCst);
        let outcome = self.persistence.load_all().await;
        self.is_loading.store(false, Ordering::SeqCst);

        match outcome {
            Ok(records) => {
                debug!("Loaded {} investors", records.len());
                *self.write() = records;
                Ok(())
            }
            Err(InvestorError::NotAuthenticated) => Ok(()),
            Err(err) => {
                error!("Failed to load investors: {}", err);
                self.note_failure(&err);
                Err(err)
            }
        }
    }

    /// Creates a record through the adapter and appends the canonical result
    /// to the collection.
    pub async fn add(&self, data: NewInvestor) -> Result<Investor> {
        let investor = match self.persistence.create(data).await {
            Ok(investor) => investor,
            Err(err) => {
                error!("Failed to add investor: {}", err);
                self.note_failure(&err);
                return Err(err);
            }
        };

        let snapshot = {
            let mut investors = self.write();
            investors.push(investor.clone());
            investors.clone()
        };
        self.persistence.persist_snapshot(&snapshot).await?;
        Ok(investor)
    }

    /// Merges the present fields of `patch` into the matching record,
    /// refreshing `last_updated`. Silent no-op when `id` is unknown locally.
    pub async fn update(&self, id: &str, patch: &InvestorUpdate) -> Result<()> {
        if let Err(err) = self.persistence.apply_update(id, patch).await {
            error!("Failed to update investor {}: {}", id, err);
            self.note_failure(&err);
            return Err(err);
        }

        let snapshot = {
            let mut investors = self.write();
            let Some(investor) = investors.iter_mut().find(|i| i.id == id) else {
                debug!("Update for unknown investor {}, ignoring", id);
                return Ok(());
            };
            patch.apply_to(investor);
            investor.last_updated = Utc::now();
            investors.clone()
        };
        self.persistence.persist_snapshot(&snapshot).await
    }

    /// Removes the matching record. Silent no-op when `id` is unknown locally.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if let Err(err) = self.persistence.remove(id).await {
            error!("Failed to delete investor {}: {}", id, err);
            self.note_failure(&err);
            return Err(err);
        }

        let snapshot = {
            let mut investors = self.write();
            let before = investors.len();
            investors.retain(|i| i.id != id);
            if investors.len() == before {
                debug!("Delete for unknown investor {}, ignoring", id);
                return Ok(());
            }
            investors.clone()
        };
        self.persistence.persist_snapshot(&snapshot).await
    }

    /// Outreach funnel aggregate over the current collection. Every enum
    /// variant is present in its map, zero-counted when unused.
    pub fn calculate_outreach(&self) -> InvestorOutreach {
        let investors = self.read();

        let mut by_status: HashMap<InvestorStatus, usize> =
            InvestorStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut by_type: HashMap<InvestorType, usize> =
            InvestorType::ALL.into_iter().map(|t| (t, 0)).collect();
        let mut by_stage: HashMap<StagePreference, usize> =
            StagePreference::ALL.into_iter().map(|p| (p, 0)).collect();

        for investor in investors.iter() {
            *by_status.entry(investor.status).or_default() += 1;
            *by_type.entry(investor.investor_type).or_default() += 1;
            *by_stage.entry(investor.stage_preference).or_default() += 1;
        }

        InvestorOutreach {
            total_investors: investors.len(),
            by_status,
            by_type,
            by_stage,
        }
    }

    /// Investors currently in `status`, in collection order.
    pub fn get_investors_by_status(&self, status: InvestorStatus) -> Vec<Investor> {
        self.read()
            .iter()
            .filter(|i| i.status == status)
            .cloned()
            .collect()
    }

    /// The `limit` most recently added investors, newest first.
    pub fn get_recently_added(&self, limit: usize) -> Vec<Investor> {
        let mut recent = self.investors();
        recent.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        recent.truncate(limit);
        recent
    }

    /// The `limit` soonest follow-ups. Investors without both a non-empty
    /// `next_action` and a `next_action_date` are dropped.
    pub fn get_upcoming_actions(&self, limit: usize) -> Vec<Investor> {
        let mut upcoming: Vec<Investor> = self
            .read()
            .iter()
            .filter(|i| {
                i.next_action.as_deref().is_some_and(|a| !a.is_empty())
                    && i.next_action_date.is_some()
            })
            .cloned()
            .collect();
        upcoming.sort_by_key(|i| i.next_action_date);
        upcoming.truncate(limit);
        upcoming
    }

    /// Case-insensitive substring search across name, email, type, location,
    /// contact person, status, and each focus entry. A blank query returns
    /// the whole collection in order.
    pub fn search(&self, query: &str) -> Vec<Investor> {
        let investors = self.read();
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return investors.clone();
        }

        investors
            .iter()
            .filter(|investor| {
                investor.name.to_lowercase().contains(&term)
                    || investor.email.to_lowercase().contains(&term)
                    || investor.investor_type.as_str().contains(&term)
                    || investor
                        .location
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&term))
                    || investor
                        .contact_person
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
                    || investor.status.as_str().contains(&term)
                    || investor
                        .investment_focus
                        .iter()
                        .any(|focus| focus.to_lowercase().contains(&term))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::investors::investors_model::{TicketCurrency, TicketSize};

    // --- Mock persistence: local-style, records kept nowhere ---
    #[derive(Default)]
    struct MockPersistence;

    #[async_trait]
    impl InvestorPersistence for MockPersistence {
        async fn load_all(&self) -> Result<Vec<Investor>> {
            Ok(Vec::new())
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
            Ok(())
        }

        async fn remove(&self, _id: &str) -> Result<()> {
            Ok(())
        }

        async fn persist_snapshot(&self, _records: &[Investor]) -> Result<()> {
            Ok(())
        }
    }

    fn new_investor(name: &str) -> NewInvestor {
        NewInvestor {
            name: name.to_string(),
            investor_type: InvestorType::Vc,
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            website: None,
            contact_person: None,
            location: None,
            investment_focus: vec!["FinTech".to_string()],
            stage_preference: StagePreference::Seed,
            ticket_size: None,
            status: InvestorStatus::Researching,
            notes: None,
            next_action: None,
            next_action_date: None,
            tags: vec![],
        }
    }

    fn service() -> InvestorService<MockPersistence> {
        InvestorService::new(Arc::new(MockPersistence))
    }

    #[tokio::test]
    async fn outreach_counts_follow_status_changes() {
        let service = service();
        let created = service.add(new_investor("Acme")).await.unwrap();

        let outreach = service.calculate_outreach();
        assert_eq!(outreach.total_investors, 1);
        assert_eq!(outreach.by_status[&InvestorStatus::Researching], 1);
        assert_eq!(outreach.by_status[&InvestorStatus::Invested], 0);

        std::thread::sleep(std::time::Duration::from_millis(2));
        service
            .update(
                &created.id,
                &InvestorUpdate {
                    status: Some(InvestorStatus::Invested),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let outreach = service.calculate_outreach();
        assert_eq!(outreach.by_status[&InvestorStatus::Researching], 0);
        assert_eq!(outreach.by_status[&InvestorStatus::Invested], 1);

        let updated = &service.investors()[0];
        assert!(updated.last_updated > created.last_updated);
        assert_eq!(updated.date_added, created.date_added);
    }

    #[tokio::test]
    async fn outreach_totals_are_consistent() {
        let service = service();
        for name in ["a", "b", "c"] {
            let mut data = new_investor(name);
            if name == "c" {
                data.status = InvestorStatus::Contacted;
            }
            service.add(data).await.unwrap();
        }

        let outreach = service.calculate_outreach();
        assert_eq!(outreach.total_investors, service.investors().len());
        assert_eq!(outreach.by_status.values().sum::<usize>(), outreach.total_investors);
        assert_eq!(outreach.by_type.values().sum::<usize>(), outreach.total_investors);
        assert_eq!(outreach.by_stage.values().sum::<usize>(), outreach.total_investors);
        // Closed enums: every variant has an entry, even at zero.
        assert_eq!(outreach.by_status.len(), InvestorStatus::ALL.len());
        assert_eq!(outreach.by_type.len(), InvestorType::ALL.len());
        assert_eq!(outreach.by_stage.len(), StagePreference::ALL.len());
    }

    #[tokio::test]
    async fn blank_search_returns_full_collection_in_order() {
        let service = service();
        for name in ["Acme", "Borealis", "Cygnus"] {
            service.add(new_investor(name)).await.unwrap();
        }

        let names: Vec<String> = service.search("").iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Acme", "Borealis", "Cygnus"]);
        let names: Vec<String> = service.search("   ").iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Acme", "Borealis", "Cygnus"]);
    }

    #[tokio::test]
    async fn search_matches_across_fields_case_insensitively() {
        let service = service();
        let mut a = new_investor("Acme Ventures");
        a.location = Some("Bengaluru".to_string());
        service.add(a).await.unwrap();
        let mut b = new_investor("Borealis");
        b.contact_person = Some("Priya Sharma".to_string());
        b.investment_focus = vec!["HealthTech".to_string()];
        service.add(b).await.unwrap();

        assert_eq!(service.search("ACME").len(), 1);
        assert_eq!(service.search("bengaluru").len(), 1);
        assert_eq!(service.search("priya").len(), 1);
        assert_eq!(service.search("healthtech").len(), 1);
        // Both hold the "vc" type and "researching" status.
        assert_eq!(service.search("vc").len(), 2);
        assert_eq!(service.search("researching").len(), 2);
        assert!(service.search("zeppelin").is_empty());
    }

    #[tokio::test]
    async fn upcoming_actions_sorted_ascending_and_filtered() {
        let service = service();

        let mut march = new_investor("March");
        march.next_action = Some("Send deck".to_string());
        march.next_action_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        service.add(march).await.unwrap();

        let mut january = new_investor("January");
        january.next_action = Some("Intro call".to_string());
        january.next_action_date = NaiveDate::from_ymd_opt(2025, 1, 15);
        service.add(january).await.unwrap();

        let mut undated = new_investor("Undated");
        undated.next_action = Some("Follow up".to_string());
        service.add(undated).await.unwrap();

        let mut blank_action = new_investor("Blank");
        blank_action.next_action = Some(String::new());
        blank_action.next_action_date = NaiveDate::from_ymd_opt(2025, 2, 1);
        service.add(blank_action).await.unwrap();

        let upcoming = service.get_upcoming_actions(DEFAULT_DASHBOARD_LIMIT);
        let names: Vec<&str> = upcoming.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["January", "March"]);
    }

    #[tokio::test]
    async fn recently_added_is_newest_first() {
        let service = service();
        service.add(new_investor("First")).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        service.add(new_investor("Second")).await.unwrap();

        let recent = service.get_recently_added(DEFAULT_DASHBOARD_LIMIT);
        let names: Vec<&str> = recent.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn investors_by_status_preserves_order() {
        let service = service();
        for name in ["a", "b"] {
            service.add(new_investor(name)).await.unwrap();
        }
        let mut contacted = new_investor("c");
        contacted.status = InvestorStatus::Contacted;
        service.add(contacted).await.unwrap();

        let researching = service.get_investors_by_status(InvestorStatus::Researching);
        let names: Vec<&str> = researching.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn update_merges_ticket_size() {
        let service = service();
        let created = service.add(new_investor("Acme")).await.unwrap();

        service
            .update(
                &created.id,
                &InvestorUpdate {
                    ticket_size: Some(TicketSize {
                        min: 50000.0,
                        max: 500000.0,
                        currency: TicketCurrency::USD,
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = &service.investors()[0];
        assert_eq!(updated.ticket_size.unwrap().max, 500000.0);
        assert_eq!(updated.name, "Acme");
    }

    #[tokio::test]
    async fn update_and_delete_with_unknown_id_are_noops() {
        let service = service();
        service.add(new_investor("Acme")).await.unwrap();

        service.update("missing", &InvestorUpdate::default()).await.unwrap();
        service.delete("missing").await.unwrap();
        assert_eq!(service.investors().len(), 1);
    }

    #[tokio::test]
    async fn local_repository_round_trips_collection() {
        use crate::investors::investors_repository::LocalInvestorRepository;

        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(LocalInvestorRepository::new(dir.path()));
        let service = InvestorService::new(repository.clone());
        service.refresh().await.unwrap();

        let mut data = new_investor("Acme");
        data.ticket_size = Some(TicketSize {
            min: 10000.0,
            max: 50000.0,
            currency: TicketCurrency::GBP,
        });
        data.tags = vec!["warm intro".to_string()];
        service.add(data).await.unwrap();

        let reloaded = InvestorService::new(repository);
        reloaded.refresh().await.unwrap();
        assert_eq!(reloaded.investors(), service.investors());
    }
}
