mod validate;
#[cfg(test)]
mod tests;

pub use validate::is_valid;
