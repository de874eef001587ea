pub mod modal;
pub mod panels;
pub mod plot;
pub mod table;
