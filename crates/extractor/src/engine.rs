//! Rule-based insight extraction.
//!
//! The extractor walks a fixed, priority-ordered rule table over a
//! [`Profile`]. Each rule emits zero or more insights; list rules are capped
//! and record how many entries they left out. Extraction is total: missing
//! or malformed fields simply make their rule emit nothing.

use crate::tables;
use crate::tenure;
use prospectlens_config::{AppConfig, ConfigError, ListLimits};
use prospectlens_core::{Category, CategoryDefaults, Insight, InsightId, Profile};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Everything the extractor needs besides the profile itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorSettings {
    pub display_limit: usize,
    pub limits: ListLimits,
    pub defaults: CategoryDefaults,
}

impl ExtractorSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            display_limit: config.extraction.display_limit,
            limits: config.extraction.limits,
            defaults: config.category_defaults()?,
        })
    }
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            display_limit: prospectlens_core::DEFAULT_DISPLAY_LIMIT,
            limits: ListLimits::default(),
            defaults: CategoryDefaults::builtin(),
        }
    }
}

/// List-valued profile fields subject to a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    Posts,
    Experience,
    Recommendations,
    Certifications,
    Education,
    Skills,
    Languages,
    Featured,
    SharedCustomers,
    WorkMilestones,
    TopTraits,
}

impl ListField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Experience => "experience",
            Self::Recommendations => "recommendations",
            Self::Certifications => "certifications",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Languages => "languages",
            Self::Featured => "featured",
            Self::SharedCustomers => "shared_customers",
            Self::WorkMilestones => "work_milestones",
            Self::TopTraits => "top_traits",
        }
    }

    pub fn bound(&self, limits: &ListLimits) -> usize {
        match self {
            Self::Posts => limits.posts,
            Self::Experience => limits.experience,
            Self::Recommendations => limits.recommendations,
            Self::Certifications => limits.certifications,
            Self::Education => limits.education,
            Self::Skills => limits.skills,
            Self::Languages => limits.languages,
            Self::Featured => limits.featured,
            Self::SharedCustomers => limits.shared_customers,
            Self::WorkMilestones => limits.work_milestones,
            Self::TopTraits => limits.top_traits,
        }
    }
}

impl std::fmt::Display for ListField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// Insights in rule order; ids are sequential from 1.
    pub insights: Vec<Insight>,
    /// `length - bound` for every list field that exceeded its cap.
    pub excess: BTreeMap<ListField, usize>,
}

impl Extraction {
    /// How many entries of `field` were left out (0 when within bounds).
    pub fn excess(&self, field: ListField) -> usize {
        self.excess.get(&field).copied().unwrap_or(0)
    }

    pub fn into_insights(self) -> Vec<Insight> {
        self.insights
    }
}

type Rule = fn(&mut Run<'_>, &Profile);

/// Rules in evaluation order.
const RULES: &[(&str, Rule)] = &[
    ("about", rule_about),
    ("current_role", rule_current_role),
    ("company", rule_company),
    ("location", rule_location),
    ("experience", rule_experience),
    ("posts", rule_posts),
    ("featured", rule_featured),
    ("recommendations", rule_recommendations),
    ("skills", rule_skills),
    ("education", rule_education),
    ("certifications", rule_certifications),
    ("languages", rule_languages),
    ("business_model", rule_business_model),
    ("company_headcount", rule_headcount),
    ("company_industry", rule_industry),
    ("tenure", rule_tenure),
    ("work_anniversary", rule_anniversary),
    ("roles_at_company", rule_roles),
    ("work_milestones", rule_milestones),
    ("personality_type", rule_personality_type),
    ("top_traits", rule_top_traits),
    ("communication_style", rule_communication_style),
    ("selling_strategy", rule_selling_strategy),
    ("shared_customers", rule_shared_customers),
    ("email_approach", rule_email_approach),
    ("next_steps", rule_next_steps),
];

/// Turns profiles into insights.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    settings: ExtractorSettings,
}

impl Extractor {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(ExtractorSettings::from_config(config)?))
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// Run every rule against `profile`.
    pub fn extract(&self, profile: &Profile) -> Extraction {
        let mut run = Run::new(&self.settings);
        for (name, rule) in RULES {
            let before = run.insights.len();
            rule(&mut run, profile);
            let emitted = run.insights.len() - before;
            if emitted > 0 {
                debug!(rule = %name, emitted, "Extraction rule fired");
            }
        }

        info!(
            insights = run.insights.len(),
            selected = run.insights.iter().filter(|i| i.selected).count(),
            capped_fields = run.excess.len(),
            "Extracted insights"
        );

        Extraction {
            insights: run.insights,
            excess: run.excess,
        }
    }
}

// ── Run state ─────────────────────────────────────────────────────────────

struct Run<'a> {
    settings: &'a ExtractorSettings,
    insights: Vec<Insight>,
    excess: BTreeMap<ListField, usize>,
    next_id: u32,
    anniversary: Option<u64>,
}

impl<'a> Run<'a> {
    fn new(settings: &'a ExtractorSettings) -> Self {
        Self {
            settings,
            insights: Vec::new(),
            excess: BTreeMap::new(),
            next_id: 1,
            anniversary: None,
        }
    }

    fn push(&mut self, category: Category, title: impl Into<String>, text: impl Into<String>) {
        let id = InsightId(self.next_id);
        self.next_id += 1;
        let selected = self.settings.defaults.is_selected(category);
        self.insights.push(
            Insight::new(id, category, title, text, self.settings.display_limit)
                .with_selected(selected),
        );
    }

    /// The first `bound` items of `items`, recording the excess.
    fn capped<'p, T>(&mut self, field: ListField, items: &'p [T]) -> &'p [T] {
        let bound = field.bound(&self.settings.limits);
        if items.len() > bound {
            self.excess.insert(field, items.len() - bound);
        }
        &items[..items.len().min(bound)]
    }

    /// Join the capped items, noting how many were left out.
    fn joined(&mut self, field: ListField, items: &[String]) -> Option<String> {
        let shown = self.capped(field, items);
        join_with_overflow(shown.to_vec(), items.len() - shown.len())
    }
}

fn join_with_overflow(labels: Vec<String>, hidden: usize) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    let mut text = labels.join(", ");
    if hidden > 0 {
        text.push_str(&format!(" (+{hidden} more)"));
    }
    Some(text)
}

fn company_or<'p>(profile: &'p Profile, fallback: &'p str) -> &'p str {
    profile.company.as_deref().unwrap_or(fallback)
}

// ── Presence-gated profile rules ──────────────────────────────────────────

fn rule_about(run: &mut Run<'_>, profile: &Profile) {
    if let Some(about) = &profile.about {
        run.push(Category::LinkedInData, "About Me", about.as_str());
    }
}

fn rule_current_role(run: &mut Run<'_>, profile: &Profile) {
    if let Some(title) = &profile.title {
        let text = match &profile.company {
            Some(company) => format!("{title} at {company}"),
            None => title.clone(),
        };
        run.push(Category::LinkedInData, "Current Role", text);
    }
}

fn rule_company(run: &mut Run<'_>, profile: &Profile) {
    if let Some(company) = &profile.company {
        run.push(Category::CompanyInformation, "Company", company.as_str());
    }
}

fn rule_location(run: &mut Run<'_>, profile: &Profile) {
    if let Some(location) = &profile.location {
        run.push(Category::OtherInsights, "Location", format!("Based in {location}"));
    }
}

// ── List rules ────────────────────────────────────────────────────────────

fn rule_experience(run: &mut Run<'_>, profile: &Profile) {
    for entry in run.capped(ListField::Experience, &profile.experience) {
        let headline = match (&entry.title, &entry.company) {
            (Some(t), Some(c)) => format!("{t} at {c}"),
            (Some(t), None) => t.clone(),
            (None, Some(c)) => c.clone(),
            (None, None) => continue,
        };
        let title = match &entry.company {
            Some(c) => format!("Experience at {c}"),
            None => "Experience".to_string(),
        };
        let mut text = headline;
        if let Some(duration) = &entry.duration {
            text.push_str(&format!(" ({duration})"));
        }
        if let Some(description) = &entry.description {
            text.push_str(&format!(": {description}"));
        }
        run.push(Category::ProfessionalBackground, title, text);
    }
}

fn rule_posts(run: &mut Run<'_>, profile: &Profile) {
    for post in run.capped(ListField::Posts, &profile.posts) {
        let Some(text) = post.text() else { continue };
        let title = match post.date() {
            Some(date) => format!("Recent Post ({date})"),
            None => "Recent Post".to_string(),
        };
        let text = match post.engagement() {
            Some((likes, comments)) => format!("{text} [{likes} likes, {comments} comments]"),
            None => text.to_string(),
        };
        run.push(Category::LinkedInActivity, title, text);
    }
}

fn rule_featured(run: &mut Run<'_>, profile: &Profile) {
    for item in run.capped(ListField::Featured, &profile.featured) {
        let Some(title) = item.title() else { continue };
        let text = item.description().unwrap_or(title);
        run.push(Category::LinkedInData, format!("Featured: {title}"), text);
    }
}

fn rule_recommendations(run: &mut Run<'_>, profile: &Profile) {
    for rec in run.capped(ListField::Recommendations, &profile.recommendations) {
        let Some(text) = rec.text() else { continue };
        let title = match rec.author() {
            Some(author) => format!("Recommendation from {author}"),
            None => "Recommendation".to_string(),
        };
        run.push(Category::Recommendations, title, text);
    }
}

fn rule_skills(run: &mut Run<'_>, profile: &Profile) {
    if let Some(text) = run.joined(ListField::Skills, &profile.skills) {
        run.push(Category::LinkedInData, "Top Skills", text);
    }
}

fn rule_education(run: &mut Run<'_>, profile: &Profile) {
    for entry in run.capped(ListField::Education, &profile.education) {
        if let Some(label) = entry.label() {
            run.push(Category::ProfessionalBackground, "Education", label);
        }
    }
}

fn rule_certifications(run: &mut Run<'_>, profile: &Profile) {
    for cert in run.capped(ListField::Certifications, &profile.certifications) {
        if let Some(label) = cert.label() {
            run.push(Category::ProfessionalBackground, "Certification", label);
        }
    }
}

fn rule_languages(run: &mut Run<'_>, profile: &Profile) {
    let shown = run.capped(ListField::Languages, &profile.languages);
    let labels: Vec<String> = shown.iter().filter_map(|l| l.label()).collect();
    let hidden = profile.languages.len() - shown.len();
    if let Some(text) = join_with_overflow(labels, hidden) {
        run.push(Category::OtherInsights, "Languages", text);
    }
}

// ── Company metadata ──────────────────────────────────────────────────────

fn rule_business_model(run: &mut Run<'_>, profile: &Profile) {
    if let Some(model) = &profile.business_model {
        run.push(
            Category::CompanyInformation,
            "Business Model",
            format!("{} business model: {model}", company_or(profile, "Company")),
        );
    }
}

fn rule_headcount(run: &mut Run<'_>, profile: &Profile) {
    if let Some(headcount) = &profile.company_headcount {
        run.push(
            Category::CompanyInformation,
            "Company Size",
            format!("{} has {headcount} employees", company_or(profile, "The company")),
        );
    }
}

fn rule_industry(run: &mut Run<'_>, profile: &Profile) {
    if let Some(industry) = &profile.company_industry {
        run.push(Category::CompanyInformation, "Industry", industry.as_str());
    }
}

// ── Company experience ────────────────────────────────────────────────────

fn rule_tenure(run: &mut Run<'_>, profile: &Profile) {
    if let Some(years) = profile.years_at_company.filter(|y| *y >= 0.0) {
        run.push(
            Category::CompanyExperience,
            "Tenure at Company",
            format!(
                "{} at {}",
                tenure::format_tenure(years),
                company_or(profile, "their current company")
            ),
        );
    }
}

fn rule_anniversary(run: &mut Run<'_>, profile: &Profile) {
    let Some(years) = profile.years_at_company.filter(|y| *y >= 0.0) else {
        return;
    };
    if let Some(n) = tenure::anniversary(years) {
        run.anniversary = Some(n);
        let company = company_or(profile, "their company");
        let text = if years < n as f64 {
            format!("Coming up on {n} years at {company}")
        } else {
            format!("Just marked {n} years at {company}")
        };
        run.push(Category::CompanyExperience, "Work Anniversary", text);
    }
}

fn rule_roles(run: &mut Run<'_>, profile: &Profile) {
    if let Some(n) = profile.num_roles_at_company {
        let roles = if n == 1 { "role" } else { "roles" };
        run.push(
            Category::CompanyExperience,
            "Roles at Company",
            format!("Has held {n} {roles} at {}", company_or(profile, "their company")),
        );
    }
}

fn rule_milestones(run: &mut Run<'_>, profile: &Profile) {
    for milestone in run.capped(ListField::WorkMilestones, &profile.work_milestones) {
        run.push(Category::CompanyExperience, "Work Milestone", milestone.as_str());
    }
}

// ── Personality ───────────────────────────────────────────────────────────

fn rule_personality_type(run: &mut Run<'_>, profile: &Profile) {
    if let Some(kind) = &profile.personality_type {
        run.push(
            Category::BehavioralPersonality,
            "Personality Type",
            format!("Personality type: {kind}"),
        );
    }
}

fn rule_top_traits(run: &mut Run<'_>, profile: &Profile) {
    if let Some(text) = run.joined(ListField::TopTraits, &profile.top_traits) {
        run.push(Category::BehavioralPersonality, "Top Traits", text);
    }
}

fn rule_communication_style(run: &mut Run<'_>, profile: &Profile) {
    if let Some(style) =
        tables::communication_style(profile.personality_type.as_deref(), &profile.top_traits)
    {
        run.push(Category::BehavioralPersonality, "Communication Style", style);
    }
}

fn rule_selling_strategy(run: &mut Run<'_>, profile: &Profile) {
    if let Some(kind) = &profile.personality_type {
        run.push(
            Category::BehavioralPersonality,
            "Selling Strategy",
            tables::selling_strategy(kind),
        );
    }
}

// ── Shared experience ─────────────────────────────────────────────────────

fn rule_shared_customers(run: &mut Run<'_>, profile: &Profile) {
    for customer in run.capped(ListField::SharedCustomers, &profile.shared_customers) {
        run.push(
            Category::SharedExperience,
            "Shared Customer",
            format!("You both work with {customer}"),
        );
    }
}

// ── Derived guidance ──────────────────────────────────────────────────────

fn rule_email_approach(run: &mut Run<'_>, profile: &Profile) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(length) = profile.personality_type.as_deref().and_then(tables::email_length) {
        parts.push(length.to_string());
    }
    if profile.posts.iter().any(|p| p.text().is_some()) {
        parts.push("Open by referencing their recent post.".to_string());
    }
    if let Some(customer) = profile.shared_customers.first() {
        parts.push(format!("Mention your shared customer {customer} early."));
    }
    if !parts.is_empty() {
        run.push(Category::EmailOptimization, "Email Approach", parts.join(" "));
    }
}

fn rule_next_steps(run: &mut Run<'_>, profile: &Profile) {
    let mut steps: Vec<String> = Vec::new();
    if profile.posts.iter().any(|p| p.text().is_some()) {
        steps.push("Engage with their latest post before reaching out".to_string());
    }
    if let Some(n) = run.anniversary {
        steps.push(format!("Congratulate them on {n} years at {}", company_or(profile, "their company")));
    }
    if let Some(customer) = profile.shared_customers.first() {
        steps.push(format!("Use {customer} as a reference point"));
    }
    if profile.recommendations.iter().any(|r| r.text().is_some()) {
        steps.push("Echo what colleagues praise in their recommendations".to_string());
    }
    if let Some(title) = &profile.title {
        steps.push(format!("Tie the pitch to their priorities as {title}"));
    }
    steps.truncate(3);
    if !steps.is_empty() {
        run.push(Category::SuggestedNextSteps, "Next Steps", steps.join("; "));
    }
}
