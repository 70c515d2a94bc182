pub mod investors_errors;
pub mod investors_export;
pub mod investors_model;
pub mod investors_repository;
pub mod investors_service;
pub mod investors_traits;

pub use investors_errors::InvestorError;
pub use investors_export::{export_filename, to_csv};
pub use investors_model::{
    Investor, InvestorOutreach, InvestorRow, InvestorRowPatch, InvestorStatus, InvestorType,
    InvestorUpdate, NewInvestor, NewInvestorRow, StagePreference, TicketCurrency, TicketSize,
    INVESTMENT_FOCUS_OPTIONS,
};
pub use investors_repository::{LocalInvestorRepository, RemoteInvestorRepository};
pub use investors_service::InvestorService;
pub use investors_traits::InvestorPersistence;
