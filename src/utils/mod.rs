pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod quote;

pub(crate) use date::format_build_date;
pub(crate) use debug::{debug_log, set_debug};
pub(crate) use quote::shell_join;
