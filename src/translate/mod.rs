pub mod google;
pub mod interface;
