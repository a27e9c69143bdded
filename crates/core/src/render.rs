use crate::models::DiseaseRecord;
use crate::templates::{
    TemplatePack, ADVICE_TIP_COUNT, DISEASE_PLACEHOLDER, NAME_PLACEHOLDER, SYMPTOM_PLACEHOLDER,
};

pub fn compose_symptom_reply(pack: &TemplatePack, symptom: Option<&str>, follow_up: &str) -> String {
    let phrases = pack.phrases();
    let opening = match symptom {
        Some(symptom) => phrases.symptom_ack.replace(SYMPTOM_PLACEHOLDER, symptom),
        None => phrases.ask_for_symptoms.clone(),
    };

    format!("{opening}\n\n{follow_up}")
}

pub fn compose_disease_card(pack: &TemplatePack, record: &DiseaseRecord) -> String {
    let phrases = pack.phrases();
    let description = record
        .description
        .as_deref()
        .unwrap_or(&phrases.no_description);

    let treatment = if record.treatment.is_empty() {
        bullet_list([phrases.treatment_fallback.as_str()])
    } else {
        bullet_list(record.treatment.iter().map(String::as_str))
    };

    format!(
        "{title}\n\n{desc_label}{description}\n{symptoms_label}{symptoms}\n{treatment_label}\n{treatment}\n\n{prevention}",
        title = phrases.disease_title.replace(NAME_PLACEHOLDER, &record.name),
        desc_label = phrases.description_label,
        symptoms_label = phrases.symptoms_label,
        symptoms = record.symptoms.join(", "),
        treatment_label = phrases.treatment_label,
        prevention = phrases.prevention_prompt,
    )
}

pub fn compose_disease_not_found(pack: &TemplatePack, normalized_name: &str) -> String {
    pack.phrases()
        .disease_not_found
        .replace(DISEASE_PLACEHOLDER, normalized_name)
}

/// Panics when fewer than [`ADVICE_TIP_COUNT`] tips are supplied: a short list
/// means the tip pool and the sampling size disagree.
pub fn compose_advice_reply(pack: &TemplatePack, tips: &[&str]) -> String {
    assert!(
        tips.len() >= ADVICE_TIP_COUNT,
        "advice reply needs {ADVICE_TIP_COUNT} tips, got {}",
        tips.len()
    );

    let phrases = pack.phrases();
    format!(
        "{}\n\n{}\n\n{}",
        phrases.advice_intro,
        bullet_list(tips.iter().copied()),
        phrases.advice_disclaimer
    )
}

fn bullet_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
