use std::path::PathBuf;

use clap::Args;
use eyre::{bail, Result, WrapErr};
use servicelogger::{load_templates, Template};

use super::browser;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Directory containing the template catalog
    #[arg(long, short = 't', env = "SERVICELOGGER_TEMPLATES")]
    pub templates: PathBuf,

    /// Words every shown template must contain, case-insensitive
    pub words: Vec<String>,
}

impl SearchArgs {
    pub fn run(&self) -> Result<()> {
        let templates = load_templates(&self.templates).wrap_err("failed to load templates")?;
        let matching: Vec<Template> = templates
            .into_iter()
            .filter(|template| matches_words(template, &self.words))
            .collect();

        if matching.is_empty() {
            bail!("no templates in {} match", self.templates.display());
        }

        if let Some(template) = browser::browse(matching)? {
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Ok(())
    }
}

fn matches_words(template: &Template, words: &[String]) -> bool {
    let haystack = format!(
        "{}\n{}\n{}",
        template.summary,
        template.description,
        template.tags.join(" ")
    )
    .to_lowercase();

    words
        .iter()
        .all(|word| haystack.contains(&word.to_lowercase()))
}
