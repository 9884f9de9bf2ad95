use std::path::Path;

use corptable_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, Guidance,
    StatusBadge,
};

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
    })
}

pub fn present_config(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        page_size: config.page_size,
        seed: config.seed.as_ref().map(|p| p.display().to_string()),
        log_file: config.log_file.as_ref().map(|p| p.display().to_string()),
    });

    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file; using defaults"))
            .with_suggestion(
                Guidance::new("Create one with the defaults").with_command("corptable config init"),
            );
    }
    result
}

pub fn present_config_init(path: &Path, overwritten: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success("Config written"))
}
