pub mod calendar;
pub mod class_list;
