use crate::errors::StatementExtractError;
use crate::extract::description::clean_description;
use crate::extract::record::RecordCaptures;
use crate::extract::types::{Amount, CardNumber, StatementDateTime};
use serde::{Deserialize, Serialize};

/// One extracted statement row.
///
/// Field keys mirror the source statement column names verbatim; downstream
/// consumers match on the Russian keys, so they must never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Дата и время операции")]
    pub operation_at: StatementDateTime,
    #[serde(rename = "Дата списания")]
    pub settlement_at: StatementDateTime,
    #[serde(rename = "Сумма в валюте операции")]
    pub operation_amount: Amount,
    #[serde(rename = "Сумма операции в валюте карты")]
    pub card_amount: Amount,
    #[serde(rename = "Описание операции")]
    pub description: String,
    #[serde(rename = "Номер карты")]
    pub card_number: CardNumber,
}

impl TryFrom<RecordCaptures> for Transaction {
    type Error = StatementExtractError;

    fn try_from(captures: RecordCaptures) -> Result<Self, Self::Error> {
        let operation_at = StatementDateTime::parse(&captures.date1, captures.time1.as_deref())?;
        let settlement_at = StatementDateTime::parse(&captures.date2, captures.time2.as_deref())?;
        let operation_amount: Amount = captures.amount1.parse()?;
        let card_amount: Amount = captures.amount2.parse()?;
        let (description, card_number) = clean_description(&captures.description);

        Ok(Transaction {
            operation_at,
            settlement_at,
            operation_amount,
            card_amount,
            description,
            card_number,
        })
    }
}
