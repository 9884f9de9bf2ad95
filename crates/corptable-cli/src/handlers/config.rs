use std::path::Path;

use anyhow::{Result, bail};
use corptable_runtime::Config;
use tracing::info;

use crate::args::ConfigCommand;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &HandlerContext,
    command: ConfigCommand,
    config_path: &Path,
    config: &Config,
) -> Result<()> {
    match command {
        ConfigCommand::Path => ctx.render(presenters::present_config_path(config_path)),
        ConfigCommand::Show => ctx.render(presenters::present_config(config_path, config)),
        ConfigCommand::Init { force } => {
            let existed = config_path.exists();
            if existed && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(config_path)?;
            info!(path = %config_path.display(), "config written");
            ctx.render(presenters::present_config_init(config_path, existed))
        }
    }
}
