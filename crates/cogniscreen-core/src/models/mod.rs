pub mod bands;
pub mod composite;
pub mod pattern;
pub mod profile;
pub mod report;
pub mod score;
