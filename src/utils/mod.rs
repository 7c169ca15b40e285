pub mod database;
pub mod pagination;
pub mod validation;

#[cfg(test)]
pub mod test;
