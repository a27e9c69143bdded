//! Shared fixtures for the cross-crate integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

pub const SAMPLE_DATASET: &str = r#"{
    "diseases": [
        {
            "name": "Flu",
            "description": "A contagious respiratory illness caused by influenza viruses",
            "symptoms": ["fever", "cough", "sore throat"],
            "treatment": ["Rest", "Drink fluids", "Antiviral medication if prescribed"]
        },
        {
            "name": "Migraine",
            "symptoms": []
        },
        {
            "name": "سكري",
            "description": "ارتفاع مستوى السكر في الدم",
            "symptoms": ["عطش", "تبول متكرر"],
            "treatment": ["الأنسولين"]
        }
    ]
}"#;

pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp dataset file");
    file.write_all(contents.as_bytes()).expect("write dataset");
    file.flush().expect("flush dataset");
    file
}

pub fn sample_dataset() -> NamedTempFile {
    write_dataset(SAMPLE_DATASET)
}

/// Same dataset with the `Flu` record removed.
pub fn dataset_without_flu() -> NamedTempFile {
    let mut value: serde_json::Value =
        serde_json::from_str(SAMPLE_DATASET).expect("sample dataset is valid json");
    if let Some(diseases) = value["diseases"].as_array_mut() {
        diseases.retain(|record| record["name"] != "Flu");
    }
    write_dataset(&value.to_string())
}
