pub mod error;
pub mod intent;
pub mod models;
pub mod render;
pub mod templates;

pub use error::TemplateError;
pub use intent::{normalize_disease_name, parse_intent_label};
pub use models::*;
pub use render::{
    compose_advice_reply, compose_disease_card, compose_disease_not_found, compose_symptom_reply,
};
pub use templates::{Phrases, TemplatePack, TemplatePools, ADVICE_TIP_COUNT};
