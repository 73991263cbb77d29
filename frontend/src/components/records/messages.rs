use common::model::card::RecordCard;

use crate::api::FetchError;

pub enum Msg {
    Loaded(Result<Vec<RecordCard>, FetchError>),
    SetSearchTerm(String),
    NextPage,
    PreviousPage,
    AddData,
}
