pub mod mbt_config;
