//! Curated numbering plans, one per dialing prefix.
//!
//! Patterns are full-match regular expressions over the national significant
//! number and cover allocated fixed-line and mobile ranges. Lengths list
//! every national-number length the plan can dial.

use std::sync::LazyLock;

use regex::Regex;

struct NumberingPlan {
    calling_code: &'static str,
    national_prefix: Option<&'static str>,
    possible_lengths: &'static [usize],
    valid_patterns: &'static [&'static str],
}

const PLANS: &[NumberingPlan] = &[
    // Peru
    NumberingPlan {
        calling_code: "51",
        national_prefix: Some("0"),
        possible_lengths: &[8, 9],
        valid_patterns: &[r"9\d{8}", r"(?:1\d|[4-8][1-9])\d{6}"],
    },
    // Mexico
    NumberingPlan {
        calling_code: "52",
        national_prefix: None,
        possible_lengths: &[10],
        valid_patterns: &[r"[2-9]\d{9}"],
    },
    // Colombia
    NumberingPlan {
        calling_code: "57",
        national_prefix: Some("0"),
        possible_lengths: &[10],
        valid_patterns: &[r"3\d{9}", r"60[1-8]\d{7}"],
    },
    // Chile
    NumberingPlan {
        calling_code: "56",
        national_prefix: None,
        possible_lengths: &[9],
        valid_patterns: &[r"[2-9]\d{8}"],
    },
    // Argentina; mobiles carry a leading 9 in international form.
    NumberingPlan {
        calling_code: "54",
        national_prefix: Some("0"),
        possible_lengths: &[10, 11],
        valid_patterns: &[r"[1-8]\d{9}", r"9[1-8]\d{9}"],
    },
    // Brazil
    NumberingPlan {
        calling_code: "55",
        national_prefix: Some("0"),
        possible_lengths: &[10, 11],
        valid_patterns: &[r"[1-9]{2}[2-5]\d{7}", r"[1-9]{2}9\d{8}"],
    },
    // Venezuela
    NumberingPlan {
        calling_code: "58",
        national_prefix: Some("0"),
        possible_lengths: &[10],
        valid_patterns: &[r"(?:2\d{2}|4(?:1[24-8]|2[246]))\d{7}"],
    },
    // Ecuador
    NumberingPlan {
        calling_code: "593",
        national_prefix: Some("0"),
        possible_lengths: &[8, 9],
        valid_patterns: &[r"[2-7]\d{7}", r"9[6-9]\d{7}"],
    },
    // Bolivia
    NumberingPlan {
        calling_code: "591",
        national_prefix: Some("0"),
        possible_lengths: &[8],
        valid_patterns: &[r"[2-4]\d{7}", r"[67]\d{7}"],
    },
    // Uruguay
    NumberingPlan {
        calling_code: "598",
        national_prefix: Some("0"),
        possible_lengths: &[8],
        valid_patterns: &[r"[24]\d{7}", r"9[1-9]\d{6}"],
    },
    // Paraguay
    NumberingPlan {
        calling_code: "595",
        national_prefix: Some("0"),
        possible_lengths: &[7, 8, 9],
        valid_patterns: &[r"[2-8]\d{6,7}", r"9[1-9]\d{7}"],
    },
    // North American Numbering Plan (United States, Canada)
    NumberingPlan {
        calling_code: "1",
        national_prefix: Some("1"),
        possible_lengths: &[10],
        valid_patterns: &[r"[2-9]\d{2}[2-9]\d{6}"],
    },
    // Spain
    NumberingPlan {
        calling_code: "34",
        national_prefix: None,
        possible_lengths: &[9],
        valid_patterns: &[r"[5-9]\d{8}"],
    },
    // United Kingdom
    NumberingPlan {
        calling_code: "44",
        national_prefix: Some("0"),
        possible_lengths: &[9, 10],
        valid_patterns: &[r"[1-3]\d{8,9}", r"7[1-57-9]\d{8}"],
    },
    // France
    NumberingPlan {
        calling_code: "33",
        national_prefix: Some("0"),
        possible_lengths: &[9],
        valid_patterns: &[r"[1-9]\d{8}"],
    },
    // Germany
    NumberingPlan {
        calling_code: "49",
        national_prefix: Some("0"),
        possible_lengths: &[6, 7, 8, 9, 10, 11],
        valid_patterns: &[r"[2-9]\d{5,10}", r"1[5-7]\d{8,9}"],
    },
];

/// A numbering plan with its validity patterns compiled and anchored.
pub(super) struct CompiledPlan {
    plan: &'static NumberingPlan,
    patterns: Vec<Regex>,
}

static COMPILED: LazyLock<Vec<CompiledPlan>> =
    LazyLock::new(|| PLANS.iter().map(CompiledPlan::compile).collect());

impl CompiledPlan {
    fn compile(plan: &'static NumberingPlan) -> Self {
        let patterns = plan
            .valid_patterns
            .iter()
            .filter_map(|pattern| Regex::new(&format!("^(?:{pattern})$")).ok())
            .collect();
        Self { plan, patterns }
    }

    /// Dialing prefix owning this plan.
    pub(super) fn calling_code(&self) -> &'static str {
        self.plan.calling_code
    }

    /// Whether a national number of `len` digits can be dialled.
    pub(super) fn is_possible_length(&self, len: usize) -> bool {
        self.plan.possible_lengths.contains(&len)
    }

    /// Whether the national number falls in an allocated range.
    pub(super) fn is_valid_national(&self, national: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(national))
    }

    /// Strip a calling code typed without `+`, or a trunk prefix, from
    /// nationally dialled digits.
    pub(super) fn strip_domestic_prefixes(&self, digits: &str, min_len: usize) -> String {
        if let Some(rest) = digits.strip_prefix(self.plan.calling_code) {
            if !self.is_possible_length(digits.len()) && self.is_possible_length(rest.len()) {
                return rest.to_owned();
            }
        }
        if let Some(rest) = self
            .plan
            .national_prefix
            .and_then(|prefix| digits.strip_prefix(prefix))
        {
            if !self.is_valid_national(digits) && rest.len() >= min_len {
                return rest.to_owned();
            }
        }
        digits.to_owned()
    }
}

/// Look up the plan owning a dialing prefix.
pub(super) fn plan_for(calling_code: &str) -> Option<&'static CompiledPlan> {
    COMPILED
        .iter()
        .find(|compiled| compiled.calling_code() == calling_code)
}
