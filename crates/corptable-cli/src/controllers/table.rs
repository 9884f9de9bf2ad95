use corptable_engine::evaluate;
use corptable_runtime::CompanyStore;
use corptable_types::{
    Company, CompanyField, CompanyId, CompanyPage, CompanyPatch, CompanyQuery, Sort,
    SortDirection,
};
use tracing::{debug, error};

use super::confirm::ConfirmDelete;
use super::form::{FormController, FormOutcome};
use crate::presentation::presenters::build_table_screen;
use crate::presentation::view_models::TableScreenViewModel;

/// One-line message shown under the table after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> Option<&str> {
        match self {
            Notice::None => None,
            Notice::Info(msg) | Notice::Success(msg) | Notice::Error(msg) => Some(msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Created(Company),
    Updated(Company),
    NotFound(CompanyId),
    Cancelled,
    Failed,
}

impl SubmitResult {
    /// Whether the form that produced the outcome can be dismissed.
    pub fn closes_form(&self) -> bool {
        !matches!(self, SubmitResult::NotFound(_) | SubmitResult::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(CompanyId),
    Declined,
    NotFound,
    Failed,
}

/// Table screen state: the store, the active query and the page it produced.
///
/// Every state change re-evaluates the query against a fresh snapshot of the
/// store, then pins `query.page` to the page actually shown so a page that
/// disappeared after a delete does not linger in the query.
pub struct TableController<S: CompanyStore> {
    store: S,
    query: CompanyQuery,
    page: CompanyPage,
    notice: Notice,
}

impl<S: CompanyStore> TableController<S> {
    pub fn new(store: S, page_size: usize) -> Self {
        let query = CompanyQuery::new(page_size.max(1));
        let page = evaluate(&store.list(), &query);
        Self {
            store,
            query,
            page,
            notice: Notice::None,
        }
    }

    pub fn page(&self) -> &CompanyPage {
        &self.page
    }

    pub fn query(&self) -> &CompanyQuery {
        &self.query
    }

    pub fn status(&self) -> &Notice {
        &self.notice
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = notice;
    }

    pub fn view_model(&self) -> TableScreenViewModel {
        build_table_screen(&self.page, &self.query, &self.notice)
    }

    fn refresh(&mut self) {
        self.page = evaluate(&self.store.list(), &self.query);
        self.query.page = self.page.page;
    }

    /// Move to page `n`. Out-of-range pages are ignored and return `false`.
    pub fn set_page(&mut self, n: usize) -> bool {
        if !self.page.contains_page(n) {
            debug!(requested = n, total_pages = self.page.total_pages, "page out of range");
            return false;
        }
        self.query.page = n;
        self.refresh();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.page.page.checked_sub(1) {
            Some(prev) => self.set_page(prev),
            None => false,
        }
    }

    pub fn set_sort(&mut self, key: CompanyField, direction: SortDirection) {
        self.query.sort = Some(Sort::new(key, direction));
        self.query.page = 1;
        self.refresh();
    }

    /// Header-click behaviour: ascending first, then flip on the same key.
    pub fn toggle_sort(&mut self, key: CompanyField) {
        let direction = match self.query.sort {
            Some(sort) if sort.key == key => sort.direction.reversed(),
            _ => SortDirection::Asc,
        };
        self.set_sort(key, direction);
    }

    pub fn set_filter(&mut self, text: &str) {
        self.query.filter = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.query.page = 1;
        self.refresh();
    }

    pub fn open_edit(&mut self, id: CompanyId) -> Option<FormController> {
        match self.store.get_by_id(id) {
            Some(company) => Some(FormController::for_edit(&company)),
            None => {
                self.notice = Notice::Error(format!("Company {} not found", id));
                None
            }
        }
    }

    pub fn open_add(&self) -> FormController {
        FormController::for_add()
    }

    /// Apply a closed form. Store failures are logged and reported in the
    /// status line; the table keeps its current page.
    pub fn submit(&mut self, outcome: FormOutcome) -> SubmitResult {
        let result = match outcome {
            FormOutcome::Cancelled => return SubmitResult::Cancelled,
            FormOutcome::Create(draft) => match self.store.add(draft) {
                Ok(company) => {
                    self.notice = Notice::Success(format!("Added \"{}\"", company.name));
                    SubmitResult::Created(company)
                }
                Err(err) => {
                    error!(error = %err, "failed to add company");
                    self.notice = Notice::Error(format!("Could not add company: {}", err));
                    return SubmitResult::Failed;
                }
            },
            FormOutcome::Update(id, draft) => {
                match self.store.update_by_id(id, CompanyPatch::from(draft)) {
                    Ok(Some(company)) => {
                        self.notice = Notice::Success(format!("Saved \"{}\"", company.name));
                        SubmitResult::Updated(company)
                    }
                    Ok(None) => {
                        self.notice = Notice::Error(format!("Company {} not found", id));
                        return SubmitResult::NotFound(id);
                    }
                    Err(err) => {
                        error!(%id, error = %err, "failed to update company");
                        self.notice =
                            Notice::Error(format!("Could not save company {}: {}", id, err));
                        return SubmitResult::Failed;
                    }
                }
            }
        };
        self.refresh();
        result
    }

    pub fn request_delete<C>(&mut self, id: CompanyId, confirm: &mut C) -> DeleteOutcome
    where
        C: ConfirmDelete + ?Sized,
    {
        let Some(company) = self.store.get_by_id(id) else {
            self.notice = Notice::Error(format!("Company {} not found", id));
            return DeleteOutcome::NotFound;
        };

        if !confirm.confirm_delete(&company) {
            self.notice = Notice::Info("Delete cancelled".to_string());
            return DeleteOutcome::Declined;
        }

        match self.store.delete_by_id(id) {
            Ok(true) => {
                self.notice = Notice::Success(format!("Deleted \"{}\"", company.name));
                self.refresh();
                DeleteOutcome::Deleted(id)
            }
            Ok(false) => {
                self.notice = Notice::Error(format!("Company {} not found", id));
                DeleteOutcome::NotFound
            }
            Err(err) => {
                error!(%id, error = %err, "failed to delete company");
                self.notice = Notice::Error(format!("Could not delete company {}: {}", id, err));
                DeleteOutcome::Failed
            }
        }
    }
}
