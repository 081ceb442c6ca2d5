pub mod customers;
pub mod dialogs;
pub mod inventory;
pub mod login;
pub mod modal;
pub mod nav;
pub mod sales;
pub mod stock;
pub mod warehouses;
