pub mod investments_errors;
pub mod investments_model;
pub mod investments_repository;
pub mod investments_service;
pub mod investments_traits;

pub use investments_errors::InvestmentError;
pub use investments_model::{
    Investment, InvestmentPerformance, InvestmentType, InvestmentUpdate, NewInvestment, Portfolio,
};
pub use investments_repository::FileInvestmentRepository;
pub use investments_service::InvestmentService;
pub use investments_traits::InvestmentRepositoryTrait;
