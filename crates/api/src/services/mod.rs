pub mod forms;
pub mod leads;
