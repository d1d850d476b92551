use models::TierLabel;

/// Reasons a static dataset is rejected at load time.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid json in {document}: {message}")]
    InvalidJson { document: String, message: String },

    #[error("missing field `{field}` on {context}")]
    MissingField { context: String, field: String },

    #[error("invalid field `{field}` on {id}: {reason}")]
    InvalidField {
        id: String,
        field: String,
        reason: String,
    },

    #[error("character id {id:?} is not a lowercase slug (try {suggestion:?})")]
    InvalidSlug { id: String, suggestion: String },

    #[error("duplicate character id {0:?}")]
    DuplicateCharacterId(String),

    #[error("unknown tier label {0:?}")]
    UnknownTier(String),

    #[error("tier {tier} references unknown character {id:?}")]
    ReferentialIntegrityViolation { tier: TierLabel, id: String },

    #[error("character {id:?} is listed in tier {first} and again in tier {second}")]
    DuplicateTierEntry {
        id: String,
        first: TierLabel,
        second: TierLabel,
    },
}
