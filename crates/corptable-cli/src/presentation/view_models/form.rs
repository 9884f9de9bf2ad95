use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldViewModel {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub focused: bool,
    /// Shown only once the field was visited
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewModel {
    pub title: String,
    pub fields: Vec<FormFieldViewModel>,
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmViewModel {
    pub title: String,
    pub message: String,
}
