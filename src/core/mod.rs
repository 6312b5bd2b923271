pub mod banner;
pub mod startup;
