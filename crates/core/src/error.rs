use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("tip pool has {available} entries but advice replies sample {required}")]
    TipPoolTooSmall { available: usize, required: usize },
    #[error("template pool `{0}` is empty")]
    EmptyPool(&'static str),
    #[error("template `{template}` is missing the `{placeholder}` placeholder")]
    MissingPlaceholder {
        template: &'static str,
        placeholder: &'static str,
    },
}
