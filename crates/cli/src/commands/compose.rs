//! `prospectlens compose` — Build the generation request body.

use super::Session;
use clap::Args;
use prospectlens_compose::{ComposeOptions, GenerationRequest};
use prospectlens_core::CaseStudyBatch;
use prospectlens_focus::{FocusTag, parse_tags};
use prospectlens_scoring::{has_additional_context, score};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Path to the profile record
    pub profile: PathBuf,

    /// Focus tags, comma-separated (`all` disables filtering)
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Flip the selection of an insight (e.g. `insight-3` or `3`)
    #[arg(short, long = "toggle")]
    pub toggles: Vec<String>,

    /// Case-study fetch result to pick from
    #[arg(long)]
    pub case_studies: Option<PathBuf>,

    /// Attach a case study by title
    #[arg(long = "study")]
    pub studies: Vec<String>,

    /// The chosen value proposition
    #[arg(long)]
    pub value_prop: Option<String>,

    /// Additional free-text context
    #[arg(long)]
    pub context: Option<String>,

    #[arg(long)]
    pub content_type: Option<String>,

    #[arg(long)]
    pub writing_style: Option<String>,

    #[arg(long)]
    pub message_length: Option<String>,
}

pub async fn run(
    config_override: Option<&Path>,
    args: ComposeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_override)?;
    let mut session = Session::open(&config, &args.profile).await?;
    session.apply_toggles(&args.toggles)?;

    if let Some(file) = &args.case_studies {
        let batch: CaseStudyBatch = serde_json::from_value(super::read_json(file).await?)?;
        session.state.case_studies.replace_all(batch.case_studies);
    }
    for title in &args.studies {
        if !session.state.case_studies.toggle(title) {
            tracing::warn!(%title, "No case study with that title, ignoring");
        }
    }

    let mut options = ComposeOptions::from_config(&config.compose);
    options.focus = args.focus.as_deref().map(parse_tags).unwrap_or_default();
    options.value_proposition = args.value_prop;
    options.additional_context = args.context.unwrap_or_default();
    if let Some(v) = args.content_type {
        options.content_type = v;
    }
    if let Some(v) = args.writing_style {
        options.writing_style = v;
    }
    if let Some(v) = args.message_length {
        options.message_length = v;
    }

    let focus_default: Vec<FocusTag> = config
        .focus
        .default_tags
        .iter()
        .map(|t| FocusTag::parse(t))
        .collect();

    let request = match GenerationRequest::compose(
        &session.raw,
        &session.state,
        &options,
        &focus_default,
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {e}");
            return Err(e.into());
        }
    };

    let selected = session.state.selected_insights();
    eprintln!(
        "📊 Personalization score: {}",
        score(
            &session.profile,
            &selected,
            options.has_value_proposition(),
            has_additional_context(&options.additional_context),
        )
    );
    println!("{}", request.to_json_pretty()?);

    Ok(())
}
