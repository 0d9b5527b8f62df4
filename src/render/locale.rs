//! Locale-conditional label substitution
//!
//! Canonical labels in the record are simplified Chinese; a render target
//! that wants traditional Chinese injects a [`Localizer`] carrying the
//! display overrides. The computation engine never consults this table.

use std::collections::HashMap;

/// Display language of a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Simplified Chinese, the canonical form stored in the record
    #[default]
    ZhCn,
    /// Traditional Chinese
    ZhHk,
}

/// Canonical-to-display label mapping injected into render targets
#[derive(Debug, Clone)]
pub struct Localizer {
    overrides: HashMap<&'static str, &'static str>,
}

impl Localizer {
    /// Localizer for the given language; simplified is the identity mapping
    pub fn for_language(language: Language) -> Self {
        let overrides = match language {
            Language::ZhCn => HashMap::new(),
            Language::ZhHk => TRADITIONAL_OVERRIDES.iter().copied().collect(),
        };
        Self { overrides }
    }

    /// Display form of a canonical label; unknown labels pass through
    pub fn localize<'a>(&self, label: &'a str) -> &'a str {
        self.overrides.get(label).copied().unwrap_or(label)
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::for_language(Language::ZhCn)
    }
}

/// Traditional-Chinese display forms for the fixed canonical labels
const TRADITIONAL_OVERRIDES: [(&str, &str); 9] = [
    ("大学教育基金 (University Education)", "大學教育基金 (University Education)"),
    ("外国升学基金 (Overseas Studies)", "外國升學基金 (Overseas Studies)"),
    ("结婚/创业金 (Marriage/Startup)", "結婚/創業金 (Marriage/Startup)"),
    ("退休基金 (Retirement Fund)", "退休基金 (Retirement Fund)"),
    ("传承予子女 (Gift to Descendants)", "傳承予子女 (Gift to Descendants)"),
    ("家族遗产 (Compassionate Legacy)", "家族遺產 (Compassionate Legacy)"),
    ("百年基业 (Centennial Legacy)", "百年基業 (Centennial Legacy)"),
    ("整付", "整付"),
    ("5年", "5年"),
];
