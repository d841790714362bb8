pub mod config;
pub mod database;
pub mod flash;
pub mod password;
#[cfg(test)]
pub mod testing;
pub mod validation;
