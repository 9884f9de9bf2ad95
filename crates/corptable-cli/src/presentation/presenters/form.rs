use corptable_types::{Company, FormField};

use crate::controllers::confirm::delete_prompt;
use crate::controllers::{FormController, FormMode};
use crate::presentation::view_models::{ConfirmViewModel, FormFieldViewModel, FormViewModel};

pub fn present_form(form: &FormController) -> FormViewModel {
    let title = match form.mode() {
        FormMode::Add => "New company".to_string(),
        FormMode::Edit(id) => format!("Edit company #{}", id),
    };

    let fields = FormField::ALL
        .iter()
        .map(|&field| FormFieldViewModel {
            label: field.label().to_string(),
            value: form.value(field).to_string(),
            placeholder: field.placeholder().to_string(),
            focused: form.focused() == field,
            error: form
                .issue(field)
                .filter(|_| form.is_touched(field))
                .map(|kind| kind.describe().to_string()),
        })
        .collect();

    FormViewModel {
        title,
        fields,
        can_confirm: form.can_confirm(),
    }
}

pub fn present_confirm(company: &Company) -> ConfirmViewModel {
    ConfirmViewModel {
        title: "Confirm delete".to_string(),
        message: delete_prompt(company),
    }
}
