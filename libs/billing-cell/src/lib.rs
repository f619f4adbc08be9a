pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::BillingError;
pub use models::{
    CreateBillRequest, MedicalBill, PaidStatus, UpdateBillRequest, UpdatePaymentRequest,
};
pub use services::BillingService;
