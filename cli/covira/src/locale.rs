//! Language packs for the user-facing text
//!
//! Only the presentation layer reads these; assessments are language-agnostic.

use clap::ValueEnum;
use covira_ai::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
}

/// Fixed UI strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePack {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub symptoms: &'static str,
    pub exposure: &'static str,
    pub predict: &'static str,
    pub note: &'static str,
}

const ENGLISH: LanguagePack = LanguagePack {
    title: "COVID-19 Risk Prediction System",
    subtitle: "Please answer the following questions",
    symptoms: "Health Symptoms",
    exposure: "Exposure History",
    predict: "Predict COVID-19 Risk",
    note: "This system is for educational purposes only.",
};

const HINDI: LanguagePack = LanguagePack {
    title: "कोविड-19 जोखिम पूर्वानुमान प्रणाली",
    subtitle: "कृपया निम्नलिखित प्रश्नों का उत्तर दें",
    symptoms: "स्वास्थ्य लक्षण",
    exposure: "संपर्क विवरण",
    predict: "जोखिम जांचें",
    note: "यह केवल शैक्षणिक उपयोग के लिए है।",
};

const TELUGU: LanguagePack = LanguagePack {
    title: "కోవిడ్-19 ప్రమాద అంచనా వ్యవస్థ",
    subtitle: "క్రింది ప్రశ్నలకు సమాధానం ఇవ్వండి",
    symptoms: "ఆరోగ్య లక్షణాలు",
    exposure: "సంపర్క వివరాలు",
    predict: "ప్రమాదాన్ని అంచనా వేయండి",
    note: "ఇది విద్యాపరమైన ఉపయోగం కోసం మాత్రమే.",
};

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Telugu];

    pub fn pack(self) -> &'static LanguagePack {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Telugu => &TELUGU,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
        };
        f.write_str(name)
    }
}

impl LanguagePack {
    pub fn section_heading(&self, section: Section) -> &'static str {
        match section {
            Section::Symptoms => self.symptoms,
            Section::Exposure => self.exposure,
        }
    }

    /// `(key, text)` pairs in a stable order
    pub fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("symptoms", self.symptoms),
            ("exposure", self.exposure),
            ("predict", self.predict),
            ("note", self.note),
        ]
    }
}
