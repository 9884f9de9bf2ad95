use anyhow::Result;
use corptable_runtime::CompanyStore;
use corptable_types::SortDirection;
use tracing::warn;

use crate::args::ListArgs;
use crate::controllers::TableController;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle<S: CompanyStore>(
    ctx: &HandlerContext,
    store: S,
    page_size: usize,
    args: ListArgs,
) -> Result<()> {
    let mut table = TableController::new(store, page_size);

    if let Some(key) = args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        table.set_sort(key, direction);
    }
    if let Some(filter) = &args.filter {
        table.set_filter(filter);
    }
    if !table.set_page(args.page) {
        warn!(
            requested = args.page,
            total_pages = table.page().total_pages,
            "requested page is out of range"
        );
    }

    let view_model = presenters::present_list_result(table.page(), table.query(), args.page);
    ctx.render(view_model)
}
