//! elecdex browse - Interactive search TUI

use clap::Args;

use crate::app::AppContext;
use crate::error::{ElecError, Result};
use crate::tui::run_browse_tui;

#[derive(Args, Debug)]
pub struct BrowseArgs {}

pub fn run(ctx: &AppContext, _args: &BrowseArgs) -> Result<()> {
    if ctx.robot_mode {
        return Err(ElecError::NotInteractive(
            "browse is interactive; use `elecdex search` for machine output".to_string(),
        ));
    }

    run_browse_tui(|| ctx.controller())
}
