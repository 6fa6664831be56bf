pub mod school_repo;
pub mod school_store;
