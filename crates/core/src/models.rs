use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ar" | "ar-eg" | "ar-sa" | "arabic" => Some(Self::Ar),
            "en" | "en-us" | "english" => Some(Self::En),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greet,
    ReportSymptoms,
    AskAboutDisease,
    AskMedicalAdvice,
    Emergency,
    Goodbye,
    #[serde(other)]
    Unknown,
}

impl Intent {
    pub const RECOGNIZED: [Intent; 6] = [
        Intent::Greet,
        Intent::ReportSymptoms,
        Intent::AskAboutDisease,
        Intent::AskMedicalAdvice,
        Intent::Emergency,
        Intent::Goodbye,
    ];

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Greet => "greet",
            Self::ReportSymptoms => "report_symptoms",
            Self::AskAboutDisease => "ask_about_disease",
            Self::AskMedicalAdvice => "ask_medical_advice",
            Self::Emergency => "emergency",
            Self::Goodbye => "goodbye",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpCategory {
    Symptoms,
    Disease,
    Medication,
}

/// Symptoms and diseases detected so far in the conversation, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub diseases: Vec<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    pub fn with_diseases<I, S>(mut self, diseases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diseases.extend(diseases.into_iter().map(Into::into));
        self
    }

    pub fn latest_symptom(&self) -> Option<&str> {
        self.symptoms.last().map(String::as_str)
    }

    pub fn latest_disease(&self) -> Option<&str> {
        self.diseases.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub treatment: Vec<String>,
}

impl DiseaseRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            symptoms: Vec::new(),
            treatment: Vec::new(),
        }
    }

    pub fn matches(&self, normalized_name: &str) -> bool {
        self.name.to_lowercase() == normalized_name
    }
}
