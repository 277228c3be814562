use clap::ValueEnum;
use shopsense_core::catalog::MatrixKind;
use shopsense_core::response::Envelope;

use crate::commands::{load_engine, CommandResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Content,
    Collaborative,
    Hybrid,
}

pub fn run(strategy: Strategy, product_name: &str, page: i64, page_size: usize) -> CommandResult {
    let engine = match load_engine("recommend") {
        Ok(engine) => engine,
        Err(result) => return result,
    };

    let result = match strategy {
        Strategy::Content => {
            engine.recommend(MatrixKind::Content, Some(product_name), page, page_size)
        }
        Strategy::Collaborative => {
            engine.recommend(MatrixKind::Collaborative, Some(product_name), page, page_size)
        }
        Strategy::Hybrid => engine.hybrid_recommend(Some(product_name), page, page_size),
    };

    CommandResult::envelope("recommend", &Envelope::from_page(result))
}
