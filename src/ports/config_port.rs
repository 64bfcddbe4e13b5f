//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    /// `Ok(None)` when the key is absent, `Err` when it is not a number.
    fn get_float(&self, section: &str, key: &str) -> Result<Option<f64>, String>;
}
