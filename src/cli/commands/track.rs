use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::tracker;

/// Open the interactive tracking form.
pub fn handle(cfg: &Config) -> AppResult<()> {
    tracker::run_tracker(cfg)
}
