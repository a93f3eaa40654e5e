pub mod build_list;
