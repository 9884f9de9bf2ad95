use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, TabularView,
};

pub struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
}

impl<'a> ConfigPathView<'a> {
    pub fn new(data: &'a ConfigPathViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}

impl TabularView for ConfigPathViewModel {
    fn header(&self) -> Vec<String> {
        vec!["path".to_string(), "exists".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.path.clone(), self.exists.to_string()]]
    }
}

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let unset = "(not set)";
        writeln!(f, "# {}", self.data.path)?;
        writeln!(f, "page_size = {}", self.data.page_size)?;
        writeln!(f, "seed      = {}", self.data.seed.as_deref().unwrap_or(unset))?;
        writeln!(
            f,
            "log_file  = {}",
            self.data.log_file.as_deref().unwrap_or(unset)
        )
    }
}

impl TabularView for ConfigViewModel {
    fn header(&self) -> Vec<String> {
        vec!["key".to_string(), "value".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let row = |key: &str, value: String| vec![key.to_string(), value];
        vec![
            row("path", self.path.clone()),
            row("page_size", self.page_size.to_string()),
            row("seed", self.seed.clone().unwrap_or_default()),
            row("log_file", self.log_file.clone().unwrap_or_default()),
        ]
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.overwritten {
            writeln!(f, "Replaced {}", self.data.path)
        } else {
            writeln!(f, "Created {}", self.data.path)
        }
    }
}

impl TabularView for ConfigInitViewModel {
    fn header(&self) -> Vec<String> {
        vec!["path".to_string(), "overwritten".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.path.clone(), self.overwritten.to_string()]]
    }
}
