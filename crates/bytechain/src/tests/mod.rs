mod slicing;

pub(crate) mod utils;
