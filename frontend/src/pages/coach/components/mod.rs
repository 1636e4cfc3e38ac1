pub mod client_detail;
pub mod client_list;
pub mod report_form;
