use thiserror::Error;

/// Erros possíveis durante a extração do extrato
#[derive(Error, Debug)]
pub enum StatementExtractError {
    /// Erro ao ler o documento de entrada do disco
    #[error("Failed to read input document: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// A biblioteca de extração de texto não conseguiu processar o documento
    #[error("Failed to extract document text: {0}")]
    DocumentExtractFailed(String),

    /// Data ou hora do extrato inválida ou malformada
    #[error("Invalid statement date format")]
    DateInvalidFormat,

    /// Valor monetário fora do formato da fonte (sinal, milhares, ₽)
    #[error("Invalid statement amount format")]
    AmountInvalidFormat,

    /// Erro ao serializar ou gravar o resultado
    #[error("Failed to write output: {0}")]
    WriteOutputFailed(String),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type StatementResult<T> = Result<T, StatementExtractError>;
