//! Keyword classifier gating which prompts reach the completion service

use aetheria_core::Error;
use regex::Regex;

/// English career vocabulary
pub const ENGLISH_CAREER_KEYWORDS: &[&str] = &[
    "job",
    "resume",
    "cv",
    "interview",
    "career",
    "cover letter",
    "passionate",
    "application",
    "promotion",
    "hiring",
    "employment",
    "internship",
    "networking",
    "skills",
    "work experience",
    "workplace",
    "salary",
    "offer",
    "manager",
    "colleague",
    "performance",
    "professional",
    "career growth",
    "linkedin",
    "portfolio",
    "ATS",
];

/// Indonesian career vocabulary
pub const INDONESIAN_CAREER_KEYWORDS: &[&str] = &[
    "pekerjaan",
    "resume",
    "cv",
    "wawancara",
    "karier",
    "surat lamaran",
    "lamaran",
    "promosi",
    "rekrutmen",
    "magang",
    "koneksi",
    "keterampilan",
    "pengalaman kerja",
    "tempat kerja",
    "gaji",
    "penawaran",
    "manajer",
    "rekan kerja",
    "kinerja",
    "profesional",
    "pertumbuhan karier",
    "linkedin",
    "portofolio",
];

/// Decides whether a prompt belongs to the assistant's subject area
///
/// A prompt is in-domain when any keyword from either lexicon occurs in it as
/// a whole word, ignoring case. Both lexicons are compiled into a single
/// pattern when the classifier is built.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    matcher: Option<Regex>,
}

impl DomainClassifier {
    /// Build a classifier from two keyword lexicons
    pub fn new(primary: &[&str], secondary: &[&str]) -> Result<Self, Error> {
        let mut alternatives: Vec<String> = primary
            .iter()
            .chain(secondary)
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        alternatives.sort();
        alternatives.dedup();

        if alternatives.is_empty() {
            return Ok(Self { matcher: None });
        }

        let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
        let matcher = Regex::new(&pattern)
            .map_err(|e| Error::Configuration(format!("Invalid keyword pattern: {}", e)))?;

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    /// The English and Indonesian career-guidance classifier
    pub fn career() -> Result<Self, Error> {
        Self::new(ENGLISH_CAREER_KEYWORDS, INDONESIAN_CAREER_KEYWORDS)
    }

    /// Whether `text` mentions at least one keyword as a whole word
    pub fn is_in_domain(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(text))
    }
}
