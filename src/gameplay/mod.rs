pub mod clouds;
pub mod session;
pub mod spawn;
