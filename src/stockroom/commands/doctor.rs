use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(catalog: &mut Catalog) -> CmdResult {
    let report = catalog.repair();
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::info("Inga problem hittades."));
    } else {
        tracing::warn!(
            orphans = report.released_orphans,
            unregistered = report.registered_products,
            "repaired handle registry"
        );
        if report.released_orphans > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Tog bort {} ID som saknade produkt.",
                report.released_orphans
            )));
        }
        if report.registered_products > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Gav {} produkter nya ID.",
                report.registered_products
            )));
        }
    }

    result.with_doctor_report(report)
}
