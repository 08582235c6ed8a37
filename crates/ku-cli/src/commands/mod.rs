pub mod config_ops;
pub mod text_ops;
