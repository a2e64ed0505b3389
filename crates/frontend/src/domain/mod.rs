pub mod a001_cabinet;
pub mod a002_configuration;
