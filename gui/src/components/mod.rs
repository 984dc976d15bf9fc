// GUI components module
pub mod impact;
pub mod param_form;
pub mod results;
pub mod sensitivity;
pub mod toolbar;
