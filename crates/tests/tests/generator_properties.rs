use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use medassist_agents::{ChatTurn, GeneratorConfig, ResponseGenerator};
use medassist_core::{ConversationContext, FollowUpCategory, Intent, Locale, TemplatePack};
use medassist_tests::{dataset_without_flu, sample_dataset, write_dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator_for(locale: Locale, dataset: Option<&std::path::Path>) -> ResponseGenerator {
    ResponseGenerator::from_config(&GeneratorConfig {
        disease_data: dataset.map(ToOwned::to_owned),
        locale,
    })
}

#[test]
fn emergency_reply_is_fixed() {
    let generator = ResponseGenerator::new(None);
    for _ in 0..10 {
        assert_eq!(
            generator.generate("", Intent::Emergency, &ConversationContext::new()),
            "🚨 حالة طارئة! برجاء الاتصال الفوري برقم الطوارئ 123."
        );
    }
}

#[test]
fn deterministic_intents_ignore_message_text() {
    let dataset = sample_dataset();
    let generator = ResponseGenerator::new(Some(dataset.path()));
    let ctx = ConversationContext::new()
        .with_symptoms(["fever"])
        .with_diseases(["flu"]);

    for intent in [
        Intent::AskAboutDisease,
        Intent::Emergency,
        Intent::Goodbye,
        Intent::Unknown,
    ] {
        let first = generator.generate("first message", intent, &ctx);
        let second = generator.generate("something else entirely", intent, &ctx);
        assert_eq!(first, second, "{intent:?} should not vary");
        assert!(!first.is_empty());
    }
}

#[test]
fn greetings_are_never_starved() {
    for locale in [Locale::Ar, Locale::En] {
        let generator = generator_for(locale, None);
        let pool = TemplatePack::for_locale(locale)
            .greetings()
            .iter()
            .cloned()
            .collect::<HashSet<_>>();

        let seen = (0..300)
            .map(|_| generator.generate("hello", Intent::Greet, &ConversationContext::new()))
            .collect::<HashSet<_>>();

        assert_eq!(seen, pool);
    }
}

#[test]
fn advice_has_three_distinct_pool_tips() {
    let generator = generator_for(Locale::Ar, None);
    let pool = generator.templates().general_tips().to_vec();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let reply = generator.generate_with_rng(
            "",
            Intent::AskMedicalAdvice,
            &ConversationContext::new(),
            &mut rng,
        );
        let tips = reply
            .lines()
            .filter_map(|line| line.strip_prefix("• "))
            .collect::<Vec<_>>();

        assert_eq!(tips.len(), 3);
        assert_eq!(tips.iter().collect::<HashSet<_>>().len(), 3);
        for tip in tips {
            assert!(pool.iter().any(|candidate| candidate == tip));
        }
        assert!(reply.ends_with("⚠️ تذكير: هذه النصائح لا تغني عن استشارة الطبيب."));
    }
}

#[test]
fn symptom_report_mentions_symptom_and_follow_up() {
    for locale in [Locale::Ar, Locale::En] {
        let generator = generator_for(locale, None);
        let follow_ups = generator
            .templates()
            .follow_ups(FollowUpCategory::Symptoms)
            .to_vec();
        let ctx = ConversationContext::new().with_symptoms(["fever"]);

        let reply = generator.generate("I feel hot", Intent::ReportSymptoms, &ctx);
        assert!(reply.contains("fever"));
        assert!(follow_ups.iter().any(|question| reply.ends_with(question.as_str())));
    }
}

#[test]
fn symptom_report_without_symptoms_asks_for_description() {
    let generator = generator_for(Locale::En, None);
    let reply = generator.generate("", Intent::ReportSymptoms, &ConversationContext::new());
    assert!(reply.starts_with("Could you describe the symptoms you are feeling in detail?\n\n"));
}

#[test]
fn disease_question_without_disease_asks_for_name() {
    let generator = generator_for(Locale::Ar, None);
    assert_eq!(
        generator.generate("", Intent::AskAboutDisease, &ConversationContext::new()),
        "هل يمكنك تحديد اسم المرض الذي تريد معرفة معلومات عنه؟"
    );
}

#[test]
fn disease_lookup_is_case_insensitive_and_tracks_catalog() {
    let ctx = ConversationContext::new().with_diseases(["flu"]);

    let with_flu = sample_dataset();
    let generator = generator_for(Locale::En, Some(with_flu.path()));
    let card = generator.generate("", Intent::AskAboutDisease, &ctx);
    assert_eq!(
        card,
        "📘 **About Flu**\n\n\
         🔹 *Description:* A contagious respiratory illness caused by influenza viruses\n\
         🔹 *Symptoms:* fever, cough, sore throat\n\
         🔹 *Treatment:* \n\
         • Rest\n\
         • Drink fluids\n\
         • Antiviral medication if prescribed\n\n\
         Would you like to learn how to prevent it?"
    );

    let without_flu = dataset_without_flu();
    let generator = generator_for(Locale::En, Some(without_flu.path()));
    assert_eq!(
        generator.generate("", Intent::AskAboutDisease, &ctx),
        "I don't have information about **flu** right now, but you can ask me about another disease."
    );
}

#[test]
fn most_recent_disease_is_used_and_query_is_lowercased() {
    let dataset = sample_dataset();
    let generator = generator_for(Locale::Ar, Some(dataset.path()));
    let ctx = ConversationContext::new().with_diseases(["Flu", "MEASLES"]);

    assert_eq!(
        generator.generate("", Intent::AskAboutDisease, &ctx),
        "لم أجد معلومات عن **measles** حالياً، لكن يمكنك سؤالي عن مرض آخر."
    );
}

#[test]
fn padded_disease_name_is_not_found() {
    let dataset = sample_dataset();
    let generator = generator_for(Locale::En, Some(dataset.path()));
    let ctx = ConversationContext::new().with_diseases(["Flu "]);

    assert_eq!(
        generator.generate("", Intent::AskAboutDisease, &ctx),
        "I don't have information about **flu ** right now, but you can ask me about another disease."
    );
}

#[test]
fn sparse_record_uses_placeholders() {
    let dataset = sample_dataset();
    let generator = generator_for(Locale::Ar, Some(dataset.path()));
    let card = generator.generate(
        "",
        Intent::AskAboutDisease,
        &ConversationContext::new().with_diseases(["migraine"]),
    );

    assert!(card.starts_with("📘 **معلومات عن Migraine**\n\n"));
    assert!(card.contains("🔹 *الوصف:* لا يوجد وصف\n"));
    assert!(card.contains("🔹 *الأعراض:* \n"));
    assert!(card.contains("• استشر الطبيب لمزيد من التفاصيل"));
    assert!(card.ends_with("هل ترغب في معرفة طرق الوقاية؟"));
}

#[test]
fn missing_or_malformed_dataset_degrades_to_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("HumanDO.json");
    let malformed = write_dataset("{\"diseases\": [");
    let ctx = ConversationContext::new().with_diseases(["Flu"]);

    let no_path = ResponseGenerator::new(None);
    let missing_file = ResponseGenerator::new(Some(missing.as_path()));
    let bad_file = ResponseGenerator::new(Some(malformed.path()));

    for generator in [no_path, missing_file, bad_file] {
        assert!(generator.catalog().is_empty());
        assert_eq!(
            generator.generate("", Intent::AskAboutDisease, &ctx),
            "لم أجد معلومات عن **flu** حالياً، لكن يمكنك سؤالي عن مرض آخر."
        );
    }
}

#[test]
fn generator_is_shareable_across_threads() {
    let dataset = sample_dataset();
    let generator = Arc::new(generator_for(Locale::En, Some(dataset.path())));

    let handles = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let ctx = ConversationContext::new().with_diseases(["FLU"]);
                (0..25)
                    .map(|_| generator.generate("", Intent::AskAboutDisease, &ctx))
                    .collect::<HashSet<_>>()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let replies = handle.join().unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies.iter().all(|reply| reply.starts_with("📘 **About Flu**")));
    }
}

#[test]
fn turn_contract_round_trips_through_json() {
    let dataset = sample_dataset();
    let generator = generator_for(Locale::Ar, Some(dataset.path()));

    let turn: ChatTurn = serde_json::from_str(
        r#"{"message": "ما هو السكري؟", "intent": "ask_about_disease", "context": {"diseases": ["سكري"]}}"#,
    )
    .unwrap();
    let reply = generator.handle_turn(&turn);

    let encoded = serde_json::to_value(&reply).unwrap();
    assert_eq!(encoded["intent"], "ask_about_disease");
    assert_eq!(encoded["locale"], "ar");
    assert!(reply.reply_text.contains("• الأنسولين"));

    let unknown: ChatTurn = serde_json::from_str(r#"{"message": "???", "intent": "book_doctor"}"#).unwrap();
    assert_eq!(
        generator.handle_turn(&unknown).reply_text,
        generator.templates().phrases().clarification
    );
}
