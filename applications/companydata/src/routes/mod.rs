pub mod companies;
pub mod company_data;
pub mod health;
