use anyhow::{Result, bail};
use corptable_runtime::CompanyStore;
use corptable_types::CompanyId;

use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext, store: &impl CompanyStore, id: CompanyId) -> Result<()> {
    let Some(company) = store.get_by_id(id) else {
        bail!("Company {} not found", id);
    };
    ctx.render(presenters::present_company_detail(&company))
}
