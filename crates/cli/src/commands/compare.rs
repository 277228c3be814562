use shopsense_core::response::Envelope;

use crate::commands::{load_engine, CommandResult};

pub fn run(product_id: &str, compare_ids: &[String]) -> CommandResult {
    let engine = match load_engine("compare") {
        Ok(engine) => engine,
        Err(result) => return result,
    };

    let result = engine.compare_prices(product_id, compare_ids);
    CommandResult::envelope("compare", &Envelope::from_records(result))
}
