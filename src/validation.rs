use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// Menu answers: any run of two or more digits, or a single non-zero digit.
const MENU_INDEX_PATTERN: &str = "[0-9]{2,}|[1-9]{1}";

/// Accept/reject predicate applied to a (possibly defaulted) answer.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Caller supplied pattern. Takes priority over any choices.
    Pattern(Regex),
    /// No choices and no pattern: every answer, including the empty one.
    AcceptAll,
    /// Menu mode: the answer must look like an index.
    MenuIndex(Regex),
    /// Whole-answer match against the literal choice set.
    Choices(Regex),
}

impl Rule {
    /// Derive the rule from the prompt options.
    ///
    /// # Arguments
    /// * `pattern` - Explicit answer pattern, if any
    /// * `choices` - Offered choices; an empty slice means "no choices"
    /// * `ignore_case` - Match choices case-insensitively
    /// * `is_menu` - Answers are 1-based indexes into `choices`
    pub fn derive(
        pattern: Option<&Regex>,
        choices: &[String],
        ignore_case: bool,
        is_menu: bool,
    ) -> Result<Self> {
        if let Some(pattern) = pattern {
            return Ok(Rule::Pattern(pattern.clone()));
        }
        if choices.is_empty() {
            return Ok(Rule::AcceptAll);
        }
        if is_menu {
            return Ok(Rule::MenuIndex(Regex::new(MENU_INDEX_PATTERN)?));
        }

        let alternatives =
            choices.iter().map(|c| regex::escape(c)).collect::<Vec<_>>().join("|");
        let regex = RegexBuilder::new(&format!(r"\A(?:{alternatives})\z"))
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Rule::Choices(regex))
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            Rule::AcceptAll => true,
            Rule::Pattern(regex) | Rule::MenuIndex(regex) | Rule::Choices(regex) => {
                regex.is_match(input)
            }
        }
    }
}

/// Check an answer against the rule, applying the menu index bound when needed.
///
/// Menu answers must also parse as an integer no greater than
/// `choice_count + 1`. There is no lower bound beyond what the index
/// pattern itself rejects.
pub fn input_is_valid(rule: &Rule, input: &str, is_menu: bool, choice_count: usize) -> bool {
    let matched = rule.matches(input);
    if !is_menu || !matched {
        return matched;
    }

    match input.parse::<i64>() {
        Ok(index) => index <= choice_count as i64 + 1,
        Err(_) => false,
    }
}
