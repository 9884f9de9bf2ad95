use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub page_size: usize,
    pub seed: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigPathView;
        Box::new(ConfigPathView::new(self))
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}
