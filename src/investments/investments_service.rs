use std::cmp::Ordering;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::debug;

use super::investments_errors::Result;
use super::investments_model::{
    Investment, InvestmentPerformance, InvestmentUpdate, NewInvestment, Portfolio,
};
use super::investments_traits::InvestmentRepositoryTrait;

/// Default number of rows shown in dashboard summaries.
pub const DEFAULT_DASHBOARD_LIMIT: usize = 4;

/// Store for the investment collection.
///
/// Owns the in-memory collection; every mutation re-persists the full
/// collection through the repository. Aggregates are recomputed on each read.
pub struct InvestmentService<R: InvestmentRepositoryTrait> {
    repository: Arc<R>,
    investments: RwLock<Vec<Investment>>,
}

impl<R: InvestmentRepositoryTrait> InvestmentService<R> {
    /// Creates the service and loads the previously persisted collection.
    pub fn new(repository: Arc<R>) -> Self {
        let investments = repository.load_all();
        debug!("Loaded {} investments", investments.len());
        Self {
            repository,
            investments: RwLock::new(investments),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Investment>> {
        self.investments.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Investment>> {
        self.investments.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Current collection snapshot.
    pub fn investments(&self) -> Vec<Investment> {
        self.read().clone()
    }

    /// Adds a new investment, assigning its id and `last_updated`, and
    /// persists the collection.
    pub fn add(&self, data: NewInvestment) -> Result<Investment> {
        let investment = Investment {
            id: uuid::Uuid::new_v4().to_string(),
            name: data.name,
            investment_type: data.investment_type,
            symbol: data.symbol,
            quantity: data.quantity,
            buy_price: data.buy_price,
            current_price: data.current_price,
            buy_date: data.buy_date,
            last_updated: Utc::now(),
            notes: data.notes,
        };

        let mut investments = self.write();
        investments.push(investment.clone());
        self.repository.save_all(&investments)?;
        Ok(investment)
    }

    /// Merges the present fields of `patch` into the matching record and
    /// refreshes `last_updated`. Silent no-op when `id` is unknown.
    pub fn update(&self, id: &str, patch: &InvestmentUpdate) -> Result<()> {
        let mut investments = self.write();
        let Some(investment) = investments.iter_mut().find(|i| i.id == id) else {
            debug!("Update for unknown investment {}, ignoring", id);
            return Ok(());
        };
        patch.apply_to(investment);
        investment.last_updated = Utc::now();
        self.repository.save_all(&investments)?;
        Ok(())
    }

    /// Single-field convenience update of the current price.
    pub fn update_current_price(&self, id: &str, current_price: f64) -> Result<()> {
        self.update(
            id,
            &InvestmentUpdate {
                current_price: Some(current_price),
                ..Default::default()
            },
        )
    }

    /// Removes the matching record. Silent no-op when `id` is unknown.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut investments = self.write();
        let before = investments.len();
        investments.retain(|i| i.id != id);
        if investments.len() == before {
            debug!("Delete for unknown investment {}, ignoring", id);
            return Ok(());
        }
        self.repository.save_all(&investments)?;
        Ok(())
    }

    /// Aggregate valuation over the current collection.
    pub fn calculate_portfolio(&self) -> Portfolio {
        let investments = self.read();
        let total_invested: f64 = investments.iter().map(|i| i.quantity * i.buy_price).sum();
        let current_value: f64 = investments.iter().map(|i| i.quantity * i.current_price).sum();
        let total_gain_loss = current_value - total_invested;
        let total_gain_loss_percentage = if total_invested > 0.0 {
            total_gain_loss / total_invested * 100.0
        } else {
            0.0
        };

        Portfolio {
            investments: investments.clone(),
            total_invested,
            current_value,
            total_gain_loss,
            total_gain_loss_percentage,
        }
    }

    /// The `limit` best holdings by percentage gain, descending. Ties keep
    /// collection order.
    pub fn get_top_performers(&self, limit: usize) -> Vec<InvestmentPerformance> {
        let investments = self.read();
        let mut performers: Vec<InvestmentPerformance> = investments
            .iter()
            .map(|investment| InvestmentPerformance {
                investment: investment.clone(),
                gain_loss: investment.gain_loss(),
                gain_loss_percentage: investment.gain_loss_percentage(),
            })
            .collect();
        // Stable sort keeps collection order among equal percentages.
        performers.sort_by(|a, b| {
            b.gain_loss_percentage
                .partial_cmp(&a.gain_loss_percentage)
                .unwrap_or(Ordering::Equal)
        });
        performers.truncate(limit);
        performers
    }

    /// The `limit` most recently touched holdings, newest first.
    pub fn get_recent_activity(&self, limit: usize) -> Vec<Investment> {
        let investments = self.read();
        let mut recent = investments.clone();
        recent.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        recent.truncate(limit);
        recent
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    use chrono::NaiveDate;

    use super::*;
    use crate::investments::investments_model::InvestmentType;

    // --- Mock repository ---
    #[derive(Default)]
    struct MockRepository {
        saves: AtomicUsize,
    }

    impl InvestmentRepositoryTrait for MockRepository {
        fn load_all(&self) -> Vec<Investment> {
            Vec::new()
        }

        fn save_all(&self, _records: &[Investment]) -> Result<()> {
            self.saves.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(())
        }
    }

    fn new_investment(name: &str, quantity: f64, buy_price: f64, current_price: f64) -> NewInvestment {
        NewInvestment {
            name: name.to_string(),
            investment_type: InvestmentType::Stock,
            symbol: None,
            quantity,
            buy_price,
            current_price,
            buy_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            notes: None,
        }
    }

    fn service() -> InvestmentService<MockRepository> {
        InvestmentService::new(Arc::new(MockRepository::default()))
    }

    #[test]
    fn add_assigns_id_and_persists() {
        let service = service();
        let created = service.add(new_investment("ACME", 10.0, 100.0, 150.0)).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(service.investments().len(), 1);
        assert_eq!(service.repository.saves.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn portfolio_matches_hand_computed_totals() {
        let service = service();
        service.add(new_investment("ACME", 10.0, 100.0, 150.0)).unwrap();

        let portfolio = service.calculate_portfolio();
        assert_eq!(portfolio.total_invested, 1000.0);
        assert_eq!(portfolio.current_value, 1500.0);
        assert_eq!(portfolio.total_gain_loss, 500.0);
        assert_eq!(portfolio.total_gain_loss_percentage, 50.0);
    }

    #[test]
    fn portfolio_identities_hold() {
        let service = service();
        service.add(new_investment("a", 3.0, 7.5, 9.25)).unwrap();
        service.add(new_investment("b", 11.0, 42.0, 40.0)).unwrap();

        let portfolio = service.calculate_portfolio();
        assert_eq!(
            portfolio.current_value - portfolio.total_invested,
            portfolio.total_gain_loss
        );
    }

    #[test]
    fn empty_portfolio_has_zero_percentage() {
        let service = service();
        let portfolio = service.calculate_portfolio();
        assert_eq!(portfolio.total_invested, 0.0);
        assert_eq!(portfolio.total_gain_loss_percentage, 0.0);
    }

    #[test]
    fn top_performers_sorted_descending_with_stable_ties() {
        let service = service();
        // +50%, +10%, +50% (tie with the first), -20%
        let a = service.add(new_investment("a", 1.0, 100.0, 150.0)).unwrap();
        let b = service.add(new_investment("b", 1.0, 100.0, 110.0)).unwrap();
        let c = service.add(new_investment("c", 2.0, 10.0, 15.0)).unwrap();
        let d = service.add(new_investment("d", 1.0, 100.0, 80.0)).unwrap();

        let performers = service.get_top_performers(10);
        let ids: Vec<&str> = performers.iter().map(|p| p.investment.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), c.id.as_str(), b.id.as_str(), d.id.as_str()]);
        assert!(performers
            .windows(2)
            .all(|w| w[0].gain_loss_percentage >= w[1].gain_loss_percentage));
    }

    #[test]
    fn top_performers_truncates_to_limit() {
        let service = service();
        for i in 0..6 {
            service
                .add(new_investment(&format!("inv{}", i), 1.0, 100.0, 100.0 + i as f64))
                .unwrap();
        }
        assert_eq!(service.get_top_performers(4).len(), 4);
    }

    #[test]
    fn recent_activity_orders_by_last_updated() {
        let service = service();
        let a = service.add(new_investment("a", 1.0, 1.0, 1.0)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = service.add(new_investment("b", 1.0, 1.0, 1.0)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        service.update_current_price(&a.id, 2.0).unwrap();

        let recent = service.get_recent_activity(DEFAULT_DASHBOARD_LIMIT);
        let ids: Vec<&str> = recent.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);
    }

    #[test]
    fn update_merges_present_fields_and_refreshes_timestamp() {
        let service = service();
        let created = service.add(new_investment("ACME", 10.0, 100.0, 150.0)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));

        service
            .update(
                &created.id,
                &InvestmentUpdate {
                    current_price: Some(175.0),
                    notes: Some("quarterly check".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = &service.investments()[0];
        assert_eq!(updated.current_price, 175.0);
        assert_eq!(updated.notes.as_deref(), Some("quarterly check"));
        assert_eq!(updated.name, "ACME");
        assert!(updated.last_updated > created.last_updated);
    }

    #[test]
    fn update_unknown_id_is_silent_noop() {
        let service = service();
        service.add(new_investment("a", 1.0, 1.0, 1.0)).unwrap();
        let saves_before = service.repository.saves.load(AtomicOrdering::SeqCst);
        service.update("missing", &InvestmentUpdate::default()).unwrap();
        assert_eq!(service.repository.saves.load(AtomicOrdering::SeqCst), saves_before);
    }

    #[test]
    fn delete_removes_record_and_ignores_unknown_ids() {
        let service = service();
        let created = service.add(new_investment("a", 1.0, 1.0, 1.0)).unwrap();
        service.delete("missing").unwrap();
        assert_eq!(service.investments().len(), 1);
        service.delete(&created.id).unwrap();
        assert!(service.investments().is_empty());
    }

    #[test]
    fn form_validation_rejects_non_positive_amounts() {
        assert!(new_investment("a", 0.0, 1.0, 1.0).validate().is_err());
        assert!(new_investment("a", 1.0, -1.0, 1.0).validate().is_err());
        assert!(new_investment("", 1.0, 1.0, 1.0).validate().is_err());
        assert!(new_investment("a", 1.0, 1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn file_repository_round_trips_collection() {
        use crate::investments::investments_repository::FileInvestmentRepository;

        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(FileInvestmentRepository::new(dir.path()));
        let service = InvestmentService::new(repository.clone());
        service.add(new_investment("ACME", 10.0, 100.0, 150.0)).unwrap();
        let mut with_symbol = new_investment("Gold bar", 2.0, 55.0, 60.0);
        with_symbol.symbol = Some("XAU".to_string());
        with_symbol.notes = Some("vault".to_string());
        service.add(with_symbol).unwrap();

        let reloaded = InvestmentService::new(repository);
        assert_eq!(reloaded.investments(), service.investments());
    }
}
