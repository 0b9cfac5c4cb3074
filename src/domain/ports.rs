use crate::domain::model::Limits;
use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn limits(&self) -> Limits;
    fn precision(&self) -> usize;
}
