//! `prospectlens case-studies` — Search a case-study fetch result.

use prospectlens_core::CaseStudyBatch;
use prospectlens_selection::CaseStudySelector;
use std::path::Path;

pub async fn run(
    file: &Path,
    query: Option<&str>,
    selections: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let batch: CaseStudyBatch = serde_json::from_value(super::read_json(file).await?)?;

    let mut selector = CaseStudySelector::new();
    selector.replace_all(batch.case_studies);
    for title in selections {
        if !selector.toggle(title) {
            println!("⚠️  No case study titled {title:?}, ignoring");
        }
    }

    let query = query.unwrap_or("");
    let hits = selector.search(query);
    if query.trim().is_empty() {
        println!("📚 {} case studies\n", hits.len());
    } else {
        println!(
            "📚 {} of {} case studies match {query:?}\n",
            hits.len(),
            selector.available().len()
        );
    }

    for study in hits {
        let mark = if selector.is_selected(&study.title) { "[x]" } else { "[ ]" };
        println!("  {mark} {:>5.1}  {}", study.relevance_score, study.title);
        if !study.industry.is_empty() {
            println!("         {}", study.industry);
        }
        if !study.excerpt.is_empty() {
            println!("         {}", study.excerpt);
        }
    }

    if !selector.selected().is_empty() {
        println!("\nSelected: {}", selector.selected().len());
    }

    Ok(())
}
