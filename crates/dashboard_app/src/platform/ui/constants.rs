pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const TITLE: &str = "Media Processing Dashboard";
pub const COL_INDEX: usize = 4;
pub const COL_FILE: usize = 40;
pub const COL_STATUS: usize = 36;
pub const PROGRESS_BAR_WIDTH: usize = 20;
