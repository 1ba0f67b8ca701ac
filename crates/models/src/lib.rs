pub mod errors;
pub mod db;
pub mod named_item;
pub mod activity_type;
pub mod application_type;
pub mod team;
pub mod project;

#[cfg(test)]
mod tests;
