// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::ParsedMessage;
use crate::config::RulesConfig;

use super::builtin::{builtin_rules, Rule};
use super::violation::Violation;

/// The ordered rule table plus the parameters the rules read.
///
/// Built once from configuration and shared read-only across runs.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    /// Recognized commit types.
    pub allowed_types: Vec<String>,
    /// Soft header length limit.
    pub max_header_length: usize,
    /// Hard header length limit, never below the soft one.
    pub hard_max_header_length: usize,
    /// Types that need a body or footer.
    pub motivation_types: Vec<String>,
    /// Verb roots for the mood heuristic.
    pub imperative_verbs: Vec<String>,
}

impl RuleSet {
    /// Build a rule set from the rule configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        for name in &config.disabled {
            if !builtin_rules().iter().any(|rule| rule.name == name.as_str()) {
                tracing::warn!("Ignoring unknown rule in disabled list: {}", name);
            }
        }

        let rules = builtin_rules()
            .iter()
            .filter(|rule| !config.disabled.iter().any(|name| name == rule.name))
            .copied()
            .collect();

        Self {
            rules,
            allowed_types: config.allowed_types.clone(),
            max_header_length: config.max_header_length,
            hard_max_header_length: config.hard_max_header_length.max(config.max_header_length),
            motivation_types: config.motivation_types.clone(),
            imperative_verbs: config
                .imperative_verbs
                .iter()
                .map(|verb| verb.to_lowercase())
                .collect(),
        }
    }

    /// The active rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether `commit_type` is on the allow-list.
    pub fn is_allowed_type(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

/// Apply every rule to the message, in table order.
///
/// All rules run; nothing short-circuits.
pub fn evaluate(message: &ParsedMessage, rules: &RuleSet) -> Vec<Violation> {
    let violations: Vec<Violation> = rules
        .rules()
        .iter()
        .filter_map(|rule| (rule.check)(message, rules))
        .collect();

    tracing::debug!(
        "Evaluated {} rules against {:?}: {} violations",
        rules.rules().len(),
        message.header,
        violations.len()
    );

    violations
}

/// Rule engine for validating commit messages.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine with the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create a rule engine from rule configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(RuleSet::from_config(config))
    }

    /// The rule set in use.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a parsed commit message.
    pub fn evaluate(&self, message: &ParsedMessage) -> Vec<Violation> {
        evaluate(message, &self.rules)
    }

    /// Parse and validate a raw commit message.
    pub fn check_str(&self, raw: &str) -> Vec<Violation> {
        self.evaluate(&ParsedMessage::parse(raw))
    }
}
