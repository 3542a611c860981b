//! Rule registry: the active rule set as data.
//!
//! Every built-in rule is an entry in [`FACTORIES`] mapping its id to a
//! constructor over the loaded [`Config`]. The default set mirrors the
//! historical catalog; the remaining rules are opt-in via
//! `[rules.<id>] enabled = true` or an explicit `--rules` list.

use readme_lint_core::{Config, RuleBox};

use crate::wp_version::WpOrgApi;
use crate::{
    Contributors, DefaultText, DonateLink, EmptySections, FileSize, HeadingLevels, License,
    PluginName, RequiredFields, RequiredSections, RequiresPhp, ShortDescription, StableTag,
    TestedUpTo, Trademark, UpgradeNotice,
};

/// One registered rule: id, description, default activation, and a
/// constructor taking the loaded configuration.
pub struct RuleFactory {
    /// Stable rule id.
    pub id: &'static str,
    /// Short description, for `list-rules`.
    pub description: &'static str,
    /// Whether the rule is part of the default set.
    pub default_enabled: bool,
    build: fn(&Config) -> RuleBox,
}

impl RuleFactory {
    /// Builds the rule from configuration.
    #[must_use]
    pub fn build(&self, config: &Config) -> RuleBox {
        (self.build)(config)
    }
}

/// All built-in rules, in registration order.
pub static FACTORIES: &[RuleFactory] = &[
    RuleFactory {
        id: crate::plugin_name::ID,
        description: "Plugin name header must be present, properly formatted, and match plugin file",
        default_enabled: true,
        build: |config| match &config.plugin_file {
            Some(path) => Box::new(PluginName::with_plugin_file(path)),
            None => Box::new(PluginName::new()),
        },
    },
    RuleFactory {
        id: crate::required_fields::ID,
        description: "Required metadata fields must be present",
        default_enabled: true,
        build: |_config| Box::new(RequiredFields::new()),
    },
    RuleFactory {
        id: crate::short_description::ID,
        description: "Short description must be present and within length limits",
        default_enabled: true,
        build: |_config| Box::new(ShortDescription::new()),
    },
    RuleFactory {
        id: crate::stable_tag::ID,
        description: "Stable tag must be present and in valid format",
        default_enabled: true,
        build: |config| Box::new(StableTag::new().allow_trunk(config.allow_trunk)),
    },
    RuleFactory {
        id: crate::requires_php::ID,
        description: "Requires PHP field should be present and valid",
        default_enabled: true,
        build: |_config| Box::new(RequiresPhp::new()),
    },
    RuleFactory {
        id: crate::required_sections::ID,
        description: "Required sections must be present",
        default_enabled: true,
        build: |config| Box::new(RequiredSections::new(config.required_sections.clone())),
    },
    RuleFactory {
        id: crate::empty_sections::ID,
        description: "Sections should have meaningful content",
        default_enabled: true,
        build: |_config| Box::new(EmptySections::new()),
    },
    RuleFactory {
        id: crate::heading_levels::ID,
        description: "Heading levels should be properly structured",
        default_enabled: true,
        build: |_config| Box::new(HeadingLevels::new()),
    },
    RuleFactory {
        id: crate::file_size::ID,
        description: "Readme file size should be reasonable",
        default_enabled: true,
        build: |_config| Box::new(FileSize::new()),
    },
    RuleFactory {
        id: crate::donate_link::ID,
        description: "Donate link should be present, properly formatted, and use appropriate domains",
        default_enabled: true,
        build: |_config| Box::new(DonateLink::new()),
    },
    RuleFactory {
        id: crate::license::ID,
        description: "License field must be present, valid, and match plugin header",
        default_enabled: false,
        build: |config| match &config.plugin_file {
            Some(path) => Box::new(License::with_plugin_file(path)),
            None => Box::new(License::new()),
        },
    },
    RuleFactory {
        id: crate::contributors::ID,
        description: "Contributors field must be valid and not use restricted usernames",
        default_enabled: false,
        build: |_config| Box::new(Contributors::new()),
    },
    RuleFactory {
        id: crate::tested_up_to::ID,
        description: "Tested up to field must be current and valid WordPress version",
        default_enabled: false,
        build: |config| match &config.wp_version {
            Some(version) => Box::new(TestedUpTo::with_version(version.clone())),
            None => Box::new(TestedUpTo::from_provider(&WpOrgApi::new())),
        },
    },
    RuleFactory {
        id: crate::default_text::ID,
        description: "Readme should not contain default template text",
        default_enabled: false,
        build: |_config| Box::new(DefaultText::new()),
    },
    RuleFactory {
        id: crate::upgrade_notice::ID,
        description: "Upgrade notices should be limited in number and length",
        default_enabled: false,
        build: |_config| Box::new(UpgradeNotice::new()),
    },
    RuleFactory {
        id: crate::trademark::ID,
        description: "Plugin should not improperly use trademarked names",
        default_enabled: false,
        build: |_config| Box::new(Trademark::new()),
    },
];

/// Builds the active rule set: catalog defaults plus per-rule config
/// toggles, in registration order.
#[must_use]
pub fn default_rules(config: &Config) -> Vec<RuleBox> {
    FACTORIES
        .iter()
        .filter(|factory| config.is_rule_enabled(factory.id, factory.default_enabled))
        .map(|factory| factory.build(config))
        .collect()
}

/// Builds an explicitly named subset. Unknown names are logged and
/// skipped.
#[must_use]
pub fn rules_named(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules = Vec::new();

    for name in names {
        match FACTORIES.iter().find(|factory| factory.id == *name) {
            Some(factory) => rules.push(factory.build(config)),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
