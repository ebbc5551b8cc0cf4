use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Questionnaire section a question is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Symptoms,
    Exposure,
}

/// One yes/no question of the questionnaire.
///
/// Declaration order is the positional order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    Breathing,
    Fever,
    DryCough,
    SoreThroat,
    Hypertension,
    Abroad,
    Contact,
    Gathering,
    PublicPlace,
    FamilyPublic,
}

impl Question {
    pub const ALL: [Question; 10] = [
        Question::Breathing,
        Question::Fever,
        Question::DryCough,
        Question::SoreThroat,
        Question::Hypertension,
        Question::Abroad,
        Question::Contact,
        Question::Gathering,
        Question::PublicPlace,
        Question::FamilyPublic,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Question::Breathing => "breathing",
            Question::Fever => "fever",
            Question::DryCough => "dry_cough",
            Question::SoreThroat => "sore_throat",
            Question::Hypertension => "hypertension",
            Question::Abroad => "abroad",
            Question::Contact => "contact",
            Question::Gathering => "gathering",
            Question::PublicPlace => "public_place",
            Question::FamilyPublic => "family_public",
        }
    }

    /// Checkbox label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            Question::Breathing => "Breathing Problem",
            Question::Fever => "Fever",
            Question::DryCough => "Dry Cough",
            Question::SoreThroat => "Sore Throat",
            Question::Hypertension => "Hypertension",
            Question::Abroad => "Recent Abroad Travel",
            Question::Contact => "Contact with COVID Patient",
            Question::Gathering => "Attended Large Gathering",
            Question::PublicPlace => "Visited Public Exposed Places",
            Question::FamilyPublic => "Family Working in Public Exposed Places",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Question::Breathing
            | Question::Fever
            | Question::DryCough
            | Question::SoreThroat
            | Question::Hypertension => Section::Symptoms,
            Question::Abroad
            | Question::Contact
            | Question::Gathering
            | Question::PublicPlace
            | Question::FamilyPublic => Section::Exposure,
        }
    }

    /// Position of this question in the feature vector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn in_section(section: Section) -> impl Iterator<Item = Question> {
        Self::ALL.into_iter().filter(move |q| q.section() == section)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown question '{0}'")]
pub struct UnknownQuestion(pub String);

impl FromStr for Question {
    type Err = UnknownQuestion;

    /// Accepts the snake-case key; `-` may stand in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|q| q.key() == normalized)
            .ok_or_else(|| UnknownQuestion(s.to_string()))
    }
}

/// The ten answers of one questionnaire submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub breathing: bool,
    pub fever: bool,
    pub dry_cough: bool,
    pub sore_throat: bool,
    pub hypertension: bool,
    pub abroad: bool,
    pub contact: bool,
    pub gathering: bool,
    pub public_place: bool,
    pub family_public: bool,
}

impl AnswerSet {
    pub fn all(value: bool) -> Self {
        Self::from_array([value; 10])
    }

    /// Build from positional values in [`Question::ALL`] order
    pub fn from_array(values: [bool; 10]) -> Self {
        let mut answers = Self::default();
        for (q, v) in Question::ALL.into_iter().zip(values) {
            answers.set(q, v);
        }
        answers
    }

    /// Answers in [`Question::ALL`] order
    pub fn to_array(&self) -> [bool; 10] {
        Question::ALL.map(|q| self.get(q))
    }

    /// Set every question named in `keys` to `true`.
    pub fn from_positive_keys<I, S>(keys: I) -> Result<Self, UnknownQuestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut answers = Self::default();
        for key in keys {
            answers.set(key.as_ref().parse()?, true);
        }
        Ok(answers)
    }

    pub fn get(&self, question: Question) -> bool {
        match question {
            Question::Breathing => self.breathing,
            Question::Fever => self.fever,
            Question::DryCough => self.dry_cough,
            Question::SoreThroat => self.sore_throat,
            Question::Hypertension => self.hypertension,
            Question::Abroad => self.abroad,
            Question::Contact => self.contact,
            Question::Gathering => self.gathering,
            Question::PublicPlace => self.public_place,
            Question::FamilyPublic => self.family_public,
        }
    }

    pub fn set(&mut self, question: Question, value: bool) {
        let slot = match question {
            Question::Breathing => &mut self.breathing,
            Question::Fever => &mut self.fever,
            Question::DryCough => &mut self.dry_cough,
            Question::SoreThroat => &mut self.sore_throat,
            Question::Hypertension => &mut self.hypertension,
            Question::Abroad => &mut self.abroad,
            Question::Contact => &mut self.contact,
            Question::Gathering => &mut self.gathering,
            Question::PublicPlace => &mut self.public_place,
            Question::FamilyPublic => &mut self.family_public,
        };
        *slot = value;
    }

    /// Questions answered "yes", in positional order
    pub fn positives(&self) -> impl Iterator<Item = Question> + '_ {
        Question::ALL.into_iter().filter(|q| self.get(*q))
    }
}
