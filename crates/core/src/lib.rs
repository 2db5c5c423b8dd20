pub mod block;
pub mod form;
pub mod lead;
pub mod page;
pub mod query;
pub mod stats;
pub mod theme;
