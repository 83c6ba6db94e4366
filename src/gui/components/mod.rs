// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod input_panel;
pub mod summary;
