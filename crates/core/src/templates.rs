use crate::error::TemplateError;
use crate::models::{FollowUpCategory, Locale};

/// Number of distinct tips sampled into a medical-advice reply.
pub const ADVICE_TIP_COUNT: usize = 3;

pub const SYMPTOM_PLACEHOLDER: &str = "{symptom}";
pub const NAME_PLACEHOLDER: &str = "{name}";
pub const DISEASE_PLACEHOLDER: &str = "{disease}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePools {
    pub greetings: Vec<String>,
    pub symptom_follow_ups: Vec<String>,
    pub disease_follow_ups: Vec<String>,
    pub medication_follow_ups: Vec<String>,
    pub general_tips: Vec<String>,
}

/// Fixed sentences for every reply branch. Placeholders are substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases {
    /// Contains `{symptom}`.
    pub symptom_ack: String,
    pub ask_for_symptoms: String,
    pub ask_for_disease: String,
    /// Contains `{name}`.
    pub disease_title: String,
    pub description_label: String,
    pub no_description: String,
    pub symptoms_label: String,
    pub treatment_label: String,
    pub treatment_fallback: String,
    pub prevention_prompt: String,
    /// Contains `{disease}`.
    pub disease_not_found: String,
    pub advice_intro: String,
    pub advice_disclaimer: String,
    pub emergency: String,
    pub goodbye: String,
    pub clarification: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePack {
    locale: Locale,
    pools: TemplatePools,
    phrases: Phrases,
}

impl TemplatePack {
    pub fn new(locale: Locale, pools: TemplatePools, phrases: Phrases) -> Result<Self, TemplateError> {
        if pools.greetings.is_empty() {
            return Err(TemplateError::EmptyPool("greetings"));
        }
        if pools.symptom_follow_ups.is_empty() {
            return Err(TemplateError::EmptyPool("symptom_follow_ups"));
        }
        if pools.general_tips.len() < ADVICE_TIP_COUNT {
            return Err(TemplateError::TipPoolTooSmall {
                available: pools.general_tips.len(),
                required: ADVICE_TIP_COUNT,
            });
        }

        for (template, text, placeholder) in [
            ("symptom_ack", &phrases.symptom_ack, SYMPTOM_PLACEHOLDER),
            ("disease_title", &phrases.disease_title, NAME_PLACEHOLDER),
            ("disease_not_found", &phrases.disease_not_found, DISEASE_PLACEHOLDER),
        ] {
            if !text.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder {
                    template,
                    placeholder,
                });
            }
        }

        Ok(Self {
            locale,
            pools,
            phrases,
        })
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Self::arabic(),
            Locale::En => Self::english(),
        }
    }

    pub fn arabic() -> Self {
        Self {
            locale: Locale::Ar,
            pools: TemplatePools {
                greetings: strings(&[
                    "👋 أهلاً! كيف حالك اليوم؟",
                    "🌸 السلام عليكم! أنا هنا لمساعدتك في أي استفسار طبي.",
                    "😊 مرحباً بك! كيف أقدر أساعدك النهارده؟",
                ]),
                symptom_follow_ups: strings(&[
                    "منذ متى بدأت تشعر بهذه الأعراض؟",
                    "هل الأعراض مستمرة أم تأتي وتختفي؟",
                    "هل تتناول أي دواء حالياً؟",
                    "هل لديك أمراض مزمنة؟",
                    "هل الأعراض تزداد سوءاً مع الوقت؟",
                ]),
                disease_follow_ups: strings(&[
                    "هل تعاني من أي أعراض من هذا المرض؟",
                    "هل أحد في عائلتك يعاني من نفس المرض؟",
                    "هل ترغب في نصائح للوقاية؟",
                    "هل زرت الطبيب بخصوص هذا المرض؟",
                ]),
                medication_follow_ups: strings(&[
                    "هل تأخذ هذا الدواء حالياً؟",
                    "هل عندك حساسية من أي دواء؟",
                    "هل استشرت الطبيب قبل تناول هذا الدواء؟",
                ]),
                general_tips: strings(&[
                    "شرب الماء بانتظام يساعد الجسم على التعافي",
                    "الراحة الجيدة والنوم الكافي عنصر أساسي للصحة",
                    "تجنب القلق والتوتر قدر الإمكان",
                    "تناول طعام متوازن وغني بالخضروات والفواكه",
                    "مارس الرياضة الخفيفة مثل المشي",
                ]),
            },
            phrases: Phrases {
                symptom_ack: "أفهم أنك تشعر بـ **{symptom}**. ممكن توضحلي أكتر؟".to_string(),
                ask_for_symptoms: "هل يمكنك وصف الأعراض اللي تشعر بها بالتفصيل؟".to_string(),
                ask_for_disease: "هل يمكنك تحديد اسم المرض الذي تريد معرفة معلومات عنه؟"
                    .to_string(),
                disease_title: "📘 **معلومات عن {name}**".to_string(),
                description_label: "🔹 *الوصف:* ".to_string(),
                no_description: "لا يوجد وصف".to_string(),
                symptoms_label: "🔹 *الأعراض:* ".to_string(),
                treatment_label: "🔹 *العلاج:* ".to_string(),
                treatment_fallback: "استشر الطبيب لمزيد من التفاصيل".to_string(),
                prevention_prompt: "هل ترغب في معرفة طرق الوقاية؟".to_string(),
                disease_not_found:
                    "لم أجد معلومات عن **{disease}** حالياً، لكن يمكنك سؤالي عن مرض آخر."
                        .to_string(),
                advice_intro: "بناءً على ما ذكرت، أنصحك بالتالي:".to_string(),
                advice_disclaimer: "⚠️ تذكير: هذه النصائح لا تغني عن استشارة الطبيب.".to_string(),
                emergency: "🚨 حالة طارئة! برجاء الاتصال الفوري برقم الطوارئ 123.".to_string(),
                goodbye: "👋 أتمنى لك الشفاء العاجل. لا تتردد في الرجوع وقت ما تحتاج."
                    .to_string(),
                clarification: "🤔 لم أفهم تماماً، ممكن توضح لي أكثر عن حالتك؟".to_string(),
            },
        }
    }

    pub fn english() -> Self {
        Self {
            locale: Locale::En,
            pools: TemplatePools {
                greetings: strings(&[
                    "👋 Hello! How are you feeling today?",
                    "🌸 Welcome! I'm here to help with any medical question.",
                    "😊 Hi there! How can I help you today?",
                ]),
                symptom_follow_ups: strings(&[
                    "When did these symptoms start?",
                    "Are the symptoms constant, or do they come and go?",
                    "Are you taking any medication right now?",
                    "Do you have any chronic conditions?",
                    "Are the symptoms getting worse over time?",
                ]),
                disease_follow_ups: strings(&[
                    "Do you have any symptoms of this disease?",
                    "Does anyone in your family have the same disease?",
                    "Would you like some prevention tips?",
                    "Have you seen a doctor about this disease?",
                ]),
                medication_follow_ups: strings(&[
                    "Are you currently taking this medication?",
                    "Are you allergic to any medication?",
                    "Did you consult a doctor before taking this medication?",
                ]),
                general_tips: strings(&[
                    "Drinking water regularly helps your body recover",
                    "Good rest and enough sleep are essential for your health",
                    "Avoid anxiety and stress as much as possible",
                    "Eat a balanced diet rich in vegetables and fruit",
                    "Do light exercise such as walking",
                ]),
            },
            phrases: Phrases {
                symptom_ack: "I understand you are experiencing **{symptom}**. Could you tell me more?"
                    .to_string(),
                ask_for_symptoms: "Could you describe the symptoms you are feeling in detail?"
                    .to_string(),
                ask_for_disease: "Which disease would you like to know more about?".to_string(),
                disease_title: "📘 **About {name}**".to_string(),
                description_label: "🔹 *Description:* ".to_string(),
                no_description: "No description available".to_string(),
                symptoms_label: "🔹 *Symptoms:* ".to_string(),
                treatment_label: "🔹 *Treatment:* ".to_string(),
                treatment_fallback: "Consult a doctor for more details".to_string(),
                prevention_prompt: "Would you like to learn how to prevent it?".to_string(),
                disease_not_found:
                    "I don't have information about **{disease}** right now, but you can ask me about another disease."
                        .to_string(),
                advice_intro: "Based on what you told me, I recommend the following:".to_string(),
                advice_disclaimer:
                    "⚠️ Reminder: this advice does not replace a consultation with a doctor."
                        .to_string(),
                emergency: "🚨 Emergency! Please call the emergency number 123 immediately."
                    .to_string(),
                goodbye: "👋 I wish you a speedy recovery. Come back any time you need me."
                    .to_string(),
                clarification: "🤔 I didn't quite understand. Could you tell me more about how you feel?"
                    .to_string(),
            },
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    pub fn greetings(&self) -> &[String] {
        &self.pools.greetings
    }

    pub fn general_tips(&self) -> &[String] {
        &self.pools.general_tips
    }

    pub fn follow_ups(&self, category: FollowUpCategory) -> &[String] {
        match category {
            FollowUpCategory::Symptoms => &self.pools.symptom_follow_ups,
            FollowUpCategory::Disease => &self.pools.disease_follow_ups,
            FollowUpCategory::Medication => &self.pools.medication_follow_ups,
        }
    }
}

impl Default for TemplatePack {
    fn default() -> Self {
        Self::arabic()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
