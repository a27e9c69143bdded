mod config;

use std::path::Path;
use std::sync::Arc;

use medassist_catalog::DiseaseCatalog;
use medassist_core::{
    compose_advice_reply, compose_disease_card, compose_disease_not_found, compose_symptom_reply,
    normalize_disease_name, parse_intent_label, ConversationContext, FollowUpCategory, Intent,
    Locale, TemplatePack, ADVICE_TIP_COUNT,
};
use medassist_observability::ReplyMetrics;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use config::{parse_locale, ConfigError, GeneratorConfig, DISEASE_DATA_ENV, LOCALE_ENV};

/// One classified user turn, as handed over by the dialogue orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub context: ConversationContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub reply_text: String,
    pub intent: Intent,
    pub locale: Locale,
}

/// Maps a classified intent and its conversation context to a display string.
///
/// Catalog and templates are fixed at construction, so one generator can be
/// shared across threads; each call only draws from the supplied RNG.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    catalog: Arc<DiseaseCatalog>,
    templates: TemplatePack,
    metrics: Option<Arc<ReplyMetrics>>,
}

impl ResponseGenerator {
    /// Arabic templates with a best-effort catalog load.
    pub fn new(disease_data: Option<&Path>) -> Self {
        Self::with_catalog(
            DiseaseCatalog::load_or_empty(disease_data),
            TemplatePack::default(),
        )
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_catalog(
            DiseaseCatalog::load_or_empty(config.disease_data.as_deref()),
            TemplatePack::for_locale(config.locale),
        )
    }

    pub fn with_catalog(catalog: DiseaseCatalog, templates: TemplatePack) -> Self {
        Self {
            catalog: Arc::new(catalog),
            templates,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<ReplyMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn catalog(&self) -> &DiseaseCatalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplatePack {
        &self.templates
    }

    pub fn locale(&self) -> Locale {
        self.templates.locale()
    }

    pub fn generate(&self, message: &str, intent: Intent, context: &ConversationContext) -> String {
        self.generate_with_rng(message, intent, context, &mut rand::rng())
    }

    /// `message` is accepted for contract stability; replies depend only on
    /// `intent` and `context`.
    #[instrument(skip_all, fields(intent = intent.as_label()))]
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        _message: &str,
        intent: Intent,
        context: &ConversationContext,
        rng: &mut R,
    ) -> String {
        let phrases = self.templates.phrases();

        let reply = match intent {
            Intent::Greet => self.pick(self.templates.greetings(), rng).to_string(),
            Intent::ReportSymptoms => {
                let pool = self.templates.follow_ups(FollowUpCategory::Symptoms);
                let follow_up = self.pick(pool, rng);
                compose_symptom_reply(&self.templates, context.latest_symptom(), follow_up)
            }
            Intent::AskAboutDisease => self.disease_reply(context),
            Intent::AskMedicalAdvice => {
                let tips = self
                    .templates
                    .general_tips()
                    .choose_multiple(rng, ADVICE_TIP_COUNT)
                    .map(String::as_str)
                    .collect::<Vec<_>>();
                compose_advice_reply(&self.templates, &tips)
            }
            Intent::Emergency => phrases.emergency.clone(),
            Intent::Goodbye => phrases.goodbye.clone(),
            Intent::Unknown => {
                self.record(ReplyMetrics::inc_clarification);
                phrases.clarification.clone()
            }
        };

        self.record(ReplyMetrics::inc_reply);
        debug!(locale = self.locale().as_code(), "reply generated");
        reply
    }

    /// Answers a turn whose intent is still the raw classifier label.
    pub fn handle_turn(&self, turn: &ChatTurn) -> AssistantReply {
        let intent = parse_intent_label(turn.intent.as_deref());
        AssistantReply {
            reply_text: self.generate(&turn.message, intent, &turn.context),
            intent,
            locale: self.locale(),
        }
    }

    fn disease_reply(&self, context: &ConversationContext) -> String {
        let Some(disease) = context.latest_disease() else {
            return self.templates.phrases().ask_for_disease.clone();
        };

        let normalized = normalize_disease_name(disease);
        match self.catalog.lookup(&normalized) {
            Some(record) => {
                self.record(ReplyMetrics::inc_catalog_hit);
                compose_disease_card(&self.templates, record)
            }
            None => {
                self.record(ReplyMetrics::inc_catalog_miss);
                debug!(disease = %normalized, "disease not in catalog");
                compose_disease_not_found(&self.templates, &normalized)
            }
        }
    }

    fn pick<'a, R: Rng + ?Sized>(&'a self, pool: &'a [String], rng: &mut R) -> &'a str {
        pool.choose(rng)
            .map(String::as_str)
            .unwrap_or(&self.templates.phrases().clarification)
    }

    fn record(&self, update: fn(&ReplyMetrics)) {
        if let Some(metrics) = self.metrics.as_deref() {
            update(metrics);
        }
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}
