pub mod cache;
pub mod config;
pub mod db;
pub mod di;
pub mod errors;

#[cfg(test)]
pub mod test_support;
