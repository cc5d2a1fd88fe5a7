//! Prompt templates and `{{key}}` substitution.
//!
//! Two fixed templates exist, one per tier. Substitution never leaves an
//! unresolved `{{placeholder}}` behind: unknown keys render as empty strings,
//! because the model treats a literal `{{...}}` as content.

use regex::{Captures, Regex};

/// Which report the caller paid for. Both tiers share the extraction
/// pipeline; they differ only in template, system instruction, and sampling
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Free,
    Paid,
}

const FREE_TEMPLATE: &str = "\
You are an expert analyzing local SEO for a Naver Place listing.
Based on the listing facts below, point out the SINGLE biggest loss point,
in plain language an owner understands.

Rules:
- never promise or guarantee ranking/exposure
- exactly one problem, not several
- short and concrete

[Listing facts]
- place name: {{place_name}}
- current keywords: {{current_keywords}}
- description text: {{description_text}}
- has main image: {{has_main_image}}
- main image URL: {{main_image_url}}

[Output format]
1. one-line summary
2. the single weakest point
3. one fix worth making right now
";

const PAID_TEMPLATE: &str = "\
You are an expert in Naver Place local SEO and content optimization.
Write a paid report improving keywords, description, and imagery together,
based on the facts below.

Rules:
- never promise or guarantee ranking/exposure
- no vague advice; everything must be directly actionable
- include copy-paste-ready results
- mark anything the data does not confirm as an assumption

[Listing facts]
- place name: {{place_name}}
- category (assumed): {{category_guess}}
- description summary: {{desc_short}}
- current keywords (user-supplied first): {{current_keywords}}
- description text: {{description_text}}
- main image URL (if any): {{main_image_url}}

[Output format: use these exact headings]
1) Diagnosis summary (3-6 lines)
2) Keyword improvements (12 copy-paste keywords)
3) Description rewrite (2 copy-paste variants, 350-600 chars each)
4) Image strategy (at least 8 recommended shots)
5) Execution priority (now / this week / this month)
6) One closing suggestion
";

const FREE_SYSTEM: &str =
    "Keep the 1-3 output format. Be short. No disclaimers beyond the rules.";
const PAID_SYSTEM: &str = "Keep the numbered headings exactly. No long preamble or \
disclaimers. Include copy-paste-ready results a practitioner can apply immediately.";

impl Tier {
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Tier::Free => FREE_TEMPLATE,
            Tier::Paid => PAID_TEMPLATE,
        }
    }

    #[must_use]
    pub fn system_instruction(self) -> &'static str {
        match self {
            Tier::Free => FREE_SYSTEM,
            Tier::Paid => PAID_SYSTEM,
        }
    }

    #[must_use]
    pub fn temperature(self) -> f32 {
        match self {
            Tier::Free => 0.4,
            Tier::Paid => 0.35,
        }
    }

    /// JSON key the report text is returned under.
    #[must_use]
    pub fn report_key(self) -> &'static str {
        match self {
            Tier::Free => "free_report",
            Tier::Paid => "paid_report",
        }
    }

    /// Sentinel substituted for the report when generation fails.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Tier::Free => "report generation failed",
            Tier::Paid => "paid report generation failed",
        }
    }
}

/// Resolved listing facts as template substitutions. Every field is a
/// concrete string; sentinel values stand in for anything unresolved.
#[derive(Debug, Clone)]
pub struct ReportVars {
    pub place_name: String,
    pub current_keywords: String,
    pub description_text: String,
    pub main_image_url: String,
}

impl ReportVars {
    /// Render the tier's template with these facts filled in.
    #[must_use]
    pub fn render(&self, tier: Tier) -> String {
        let has_main_image = if self.main_image_url.is_empty() { "no" } else { "yes" };
        let image_or_none = if self.main_image_url.is_empty() {
            "none"
        } else {
            self.main_image_url.as_str()
        };

        fill_template(tier.template(), |key| match key {
            "place_name" => Some(self.place_name.as_str()),
            "current_keywords" => Some(self.current_keywords.as_str()),
            "description_text" | "desc_short" => Some(self.description_text.as_str()),
            "has_main_image" => Some(has_main_image),
            "main_image_url" => Some(image_or_none),
            "category_guess" => Some("unconfirmed (assume and say so)"),
            _ => None,
        })
    }
}

/// Replace every `{{word}}` placeholder via `lookup`; unknown keys become
/// empty strings.
pub fn fill_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let placeholder_re = Regex::new(r"\{\{(\w+)\}\}").expect("valid regex");
    placeholder_re
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or("").to_string()
        })
        .into_owned()
}
