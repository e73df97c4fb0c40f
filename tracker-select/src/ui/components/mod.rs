pub mod analytics;
pub mod delete_confirmation;
pub mod empty_state;
pub mod feed;
pub mod modals;
pub mod notifications;
pub mod selection_bar;
pub mod transactions_table;
