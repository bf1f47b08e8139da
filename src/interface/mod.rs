pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plans_csv, write_plans_json};
pub use prompts::{parse_usual_order, prompt_usual_order, prompt_yes_no, suggest_item_name};
pub use render::{display_catalog, display_solve_result};
