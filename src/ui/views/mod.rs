pub mod chapter_detail;
pub mod chapter_list;
pub mod filter_bar;
pub mod sidebar;
pub mod subject_tabs;
