pub mod backup;
pub mod material_request;
pub mod pages;
pub mod stats;
