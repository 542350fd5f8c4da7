pub mod context;
pub mod count;
pub mod replace;

pub use context::{
    apply_filter_args, color_choice_to_mode, format_output, init_tracing, load_config,
    load_config_with, log_filter, run_analysis, summary_exit_code,
};
pub use count::{run_count, run_count_impl};
pub use replace::{run_replace, run_replace_impl};
