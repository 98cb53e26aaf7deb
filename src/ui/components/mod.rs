pub mod course_table;
pub mod feedback_modal;
pub mod input_field;
pub mod percent_bar;
pub mod projection_card;
pub mod results_card;
pub mod scenario_list;
